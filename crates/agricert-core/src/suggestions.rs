//! Advisory lookup for out-of-range metrics.
//!
//! Pure lookup: one fixed advisory string per metric, plus an all-clear
//! message when nothing failed.

use agricert_types::Metric;

/// Message returned when no metric is out of range.
pub const ALL_CLEAR: &str = "All conditions within range. No action needed.";

/// Fixed advisory for a single out-of-range metric.
#[must_use]
pub fn advice(metric: Metric) -> &'static str {
    match metric {
        Metric::SoilMoisture => "Adjust irrigation to keep soil moisture within range.",
        Metric::SoilTemperature => "Use shading or mulching to regulate soil temperature.",
        Metric::Ph => "Apply lime to raise pH or sulfur to lower it.",
        Metric::Ec => "Add organic matter to stabilize soil EC.",
        Metric::Nitrogen => "Apply compost or nitrogen-rich fertilizers.",
        Metric::Phosphorus => "Use phosphorus fertilizers such as bone meal.",
        Metric::Potassium => "Apply potash-based fertilizers.",
        Metric::WaterTds => "Check the water source for high TDS levels.",
    }
}

/// One advisory per failed metric, preserving input order; the all-clear
/// message when none failed.
#[must_use]
pub fn for_violations(violations: &[Metric]) -> Vec<String> {
    if violations.is_empty() {
        vec![ALL_CLEAR.to_string()]
    } else {
        violations.iter().map(|&m| advice(m).to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_clear_when_no_violations() {
        assert_eq!(for_violations(&[]), vec![ALL_CLEAR.to_string()]);
    }

    #[test]
    fn test_one_advisory_per_violation() {
        let suggestions = for_violations(&[Metric::Ph]);
        assert_eq!(
            suggestions,
            vec!["Apply lime to raise pH or sulfur to lower it.".to_string()]
        );
    }

    #[test]
    fn test_order_preserved() {
        let suggestions = for_violations(&[Metric::SoilMoisture, Metric::WaterTds]);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("irrigation"));
        assert!(suggestions[1].contains("TDS"));
    }

    #[test]
    fn test_every_metric_has_advice() {
        for metric in Metric::ALL {
            assert!(!advice(metric).is_empty());
        }
    }
}
