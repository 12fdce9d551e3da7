pub mod category;
pub mod columns;
pub mod numeric;
pub mod table;

pub use category::{EfficacyCategory, HIGH_EFFICACY_THRESHOLD, MODERATE_EFFICACY_THRESHOLD};
pub use columns::{
    CI_LOWER, CI_UPPER, COMPLETED_STATUS, DERIVED_COLUMNS, EFFICACY_CATEGORY, EFFICACY_RATE,
    NORMALIZED_PATIENTS, REQUIRED_COLUMNS, STATUS, SUCCESSFUL_OUTCOMES, TOTAL_PATIENTS,
};
pub use numeric::{format_numeric, format_optional, parse_f64, parse_i64};
pub use table::TrialTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_columns_follow_required_columns() {
        for required in REQUIRED_COLUMNS {
            assert!(!DERIVED_COLUMNS.contains(&required));
        }
        assert_eq!(DERIVED_COLUMNS.len(), 5);
    }

    #[test]
    fn category_serializes_as_display_string() {
        let json = serde_json::to_string(&EfficacyCategory::High).expect("serialize category");
        assert_eq!(json, "\"High Efficacy\"");
        let round: EfficacyCategory = serde_json::from_str(&json).expect("deserialize category");
        assert_eq!(round, EfficacyCategory::High);
    }
}
