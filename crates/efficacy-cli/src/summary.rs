use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use efficacy_model::EfficacyCategory;

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: skipped (dry run)"),
    }
    if let Some(path) = &result.summary {
        println!("Run summary: {}", path.display());
    }
    println!("Confidence level: {}", result.confidence);

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Trials")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for category in EfficacyCategory::all() {
        table.add_row(vec![
            category_cell(category),
            Cell::new(stats.categories.get(category)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.completed_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "Rows: {} read, {} completed, {} filtered out, {} degraded",
        stats.input_rows, stats.completed_rows, stats.filtered_rows, stats.degraded_rows
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn category_cell(category: EfficacyCategory) -> Cell {
    let color = match category {
        EfficacyCategory::High => Color::Green,
        EfficacyCategory::Moderate => Color::Yellow,
        EfficacyCategory::Low => Color::Red,
    };
    Cell::new(category.as_str()).fg(color)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
