use crate::errors::{BudgetError, Result};

/// Smallest revenue point on every chart, in millions.
pub const REFERENCE_REVENUE: f64 = 50.0;

/// Largest accepted chart domain, in millions (1,000 revenue points).
pub const MAX_CHART_REVENUE: f64 = 100_000.0;

const REVENUE_STEP: f64 = 100.0;

/// The chart domain must be finite and within
/// `[REFERENCE_REVENUE, MAX_CHART_REVENUE]`.
pub fn validate_max_revenue(max_revenue: f64) -> Result<()> {
    if !max_revenue.is_finite() || !(REFERENCE_REVENUE..=MAX_CHART_REVENUE).contains(&max_revenue)
    {
        return Err(BudgetError::invalid_input(format!(
            "maximum chart revenue must be within [{REFERENCE_REVENUE}, {MAX_CHART_REVENUE}], got {max_revenue}"
        )));
    }
    Ok(())
}

/// Chart revenue points: 50, 150, 250, ... while below `max_revenue + 100`.
///
/// Always starts at the 50 reference point. Fails with `InvalidInput` when
/// `max_revenue` is outside the accepted domain.
pub fn revenue_points(max_revenue: f64) -> Result<Vec<f64>> {
    validate_max_revenue(max_revenue)?;
    let end = max_revenue + REVENUE_STEP;
    Ok((0u32..)
        .map(|step| REFERENCE_REVENUE + REVENUE_STEP * f64::from(step))
        .take_while(|point| *point < end)
        .collect())
}

/// Revenue points must be non-empty, finite, non-negative and strictly
/// increasing.
pub fn validate_revenue_points(points: &[f64]) -> Result<()> {
    if points.is_empty() {
        return Err(BudgetError::invalid_input("revenue points are empty"));
    }
    if let Some(bad) = points.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(BudgetError::invalid_input(format!(
            "revenue points must be finite and non-negative, got {bad}"
        )));
    }
    if let Some(pair) = points.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(BudgetError::invalid_input(format!(
            "revenue points must be strictly increasing, got {} then {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chart_domain() {
        assert_eq!(
            revenue_points(500.0).unwrap(),
            vec![50.0, 150.0, 250.0, 350.0, 450.0, 550.0]
        );
    }

    #[test]
    fn smallest_domain_keeps_reference_point() {
        assert_eq!(revenue_points(REFERENCE_REVENUE).unwrap(), vec![50.0]);
    }

    #[test]
    fn largest_domain_is_bounded() {
        let points = revenue_points(MAX_CHART_REVENUE).unwrap();
        assert_eq!(points.len(), 1_000);
        assert_eq!(points.last(), Some(&99_950.0));
    }

    #[test]
    fn rejects_out_of_domain_maximum() {
        for max in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -500.0, 49.9, 1.0e8] {
            assert!(
                matches!(revenue_points(max), Err(BudgetError::InvalidInput(_))),
                "max revenue {max} was accepted"
            );
        }
    }

    #[test]
    fn validation_rejects_bad_sequences() {
        assert!(validate_revenue_points(&[]).is_err());
        assert!(validate_revenue_points(&[50.0, 50.0]).is_err());
        assert!(validate_revenue_points(&[150.0, 50.0]).is_err());
        assert!(validate_revenue_points(&[-1.0, 50.0]).is_err());
        assert!(validate_revenue_points(&[50.0, f64::INFINITY]).is_err());
        assert!(validate_revenue_points(&[0.0, 50.0, 75.0]).is_ok());
    }
}
