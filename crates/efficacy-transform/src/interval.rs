//! Bayesian credible interval for the true efficacy rate.
//!
//! Beta-Binomial conjugate model with a flat Beta(1, 1) prior: observing
//! `successes` out of `total` patients gives the posterior
//! `Beta(successes + 1, failures + 1)`. The two-sided interval at
//! confidence `c` is the pair of posterior quantiles at `(1-c)/2` and
//! `(1+c)/2`, computed with the exact Beta inverse CDF. A normal
//! approximation would be symmetric and is wrong for extreme rates and
//! small trials, which is the point of using the posterior directly.

use statrs::distribution::{Beta, ContinuousCDF};

/// Posterior Beta parameters for the observed counts under a flat prior.
///
/// Negative failure counts (when `successes > total`, which the pipeline
/// does not validate) are clamped to zero so the posterior stays defined.
pub fn posterior_params(successes: i64, total: i64) -> (f64, f64) {
    let k = successes as f64;
    let n = total as f64;
    (1.0 + k, 1.0 + (n - k).max(0.0))
}

/// Equal-tailed credible interval for the efficacy rate.
///
/// Returns `None` when the counts cannot parameterize a posterior
/// (`total <= 0` or negative successes); the caller turns that into the
/// row's undefined sentinel. When every outcome agrees (zero successes or
/// zero failures) the equal-tailed interval excludes the point estimate,
/// so the touching bound is widened to keep
/// `lower <= successes / total <= upper`. Both bounds stay in `[0, 1]`.
pub fn credible_interval(successes: i64, total: i64, confidence: f64) -> Option<(f64, f64)> {
    if total <= 0 || successes < 0 {
        return None;
    }
    let (alpha, beta) = posterior_params(successes, total);
    let posterior = Beta::new(alpha, beta).ok()?;
    let tail = (1.0 - confidence) / 2.0;
    let lower = posterior.inverse_cdf(tail);
    let upper = posterior.inverse_cdf(1.0 - tail);
    if !lower.is_finite() || !upper.is_finite() {
        return None;
    }
    let rate = (successes as f64 / total as f64).clamp(0.0, 1.0);
    Some((
        lower.clamp(0.0, 1.0).min(rate),
        upper.clamp(0.0, 1.0).max(rate),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posterior_uses_flat_pseudo_counts() {
        assert_eq!(posterior_params(85, 100), (86.0, 16.0));
        assert_eq!(posterior_params(0, 0), (1.0, 1.0));
    }

    #[test]
    fn interval_straddles_the_point_estimate() {
        let (lower, upper) = credible_interval(85, 100, 0.95).expect("valid counts");
        assert!(lower < 0.85);
        assert!(upper > 0.85);
        assert!(lower > 0.7);
        assert!(upper < 0.95);
    }

    #[test]
    fn interval_narrows_with_more_evidence() {
        let (small_lower, small_upper) = credible_interval(5, 10, 0.95).expect("valid counts");
        let (large_lower, large_upper) = credible_interval(500, 1000, 0.95).expect("valid counts");
        assert!(large_upper - large_lower < small_upper - small_lower);
    }

    #[test]
    fn all_failures_widens_the_lower_bound_to_zero() {
        let (lower, upper) = credible_interval(0, 20, 0.95).expect("valid counts");
        assert_eq!(lower, 0.0);
        assert!(upper > 0.0);
        assert!(upper < 0.3);
    }

    #[test]
    fn all_successes_widens_the_upper_bound_to_one() {
        let (lower, upper) = credible_interval(20, 20, 0.95).expect("valid counts");
        assert!(lower > 0.7);
        assert_eq!(upper, 1.0);
    }

    #[test]
    fn interval_is_asymmetric_for_extreme_rates() {
        let (lower, upper) = credible_interval(95, 100, 0.95).expect("valid counts");
        let rate = 0.95;
        assert!(rate - lower > upper - rate);
    }

    #[test]
    fn undefined_counts_yield_no_interval() {
        assert_eq!(credible_interval(5, 0, 0.95), None);
        assert_eq!(credible_interval(-1, 10, 0.95), None);
    }

    #[test]
    fn wider_confidence_widens_the_interval() {
        let (narrow_lower, narrow_upper) = credible_interval(50, 100, 0.9).expect("valid counts");
        let (wide_lower, wide_upper) = credible_interval(50, 100, 0.99).expect("valid counts");
        assert!(wide_lower < narrow_lower);
        assert!(wide_upper > narrow_upper);
    }
}
