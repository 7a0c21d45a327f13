//! Projection output: the monthly trajectory and derived summaries

use serde::{Deserialize, Serialize};

/// Round to 2 decimal places, halves away from zero
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Balance recorded at the end of a month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    pub month: u32,
    pub value: f64,
}

/// Balance sampled at a year boundary, for charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    pub value: f64,
}

/// Complete projection result for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Balance at the end of the term, rounded
    pub final_amount: f64,

    /// One point per month, month 0 included
    pub monthly_series: Vec<MonthPoint>,

    /// Principal credited over the term, rounded
    pub total_contributed: f64,

    /// Annual yield actually applied (after tier resolution)
    pub annual_yield_percent: f64,
}

impl ProjectionResult {
    pub fn term_months(&self) -> u32 {
        self.monthly_series.len().saturating_sub(1) as u32
    }

    /// Sample the series at months 0, 12, 24, ...
    pub fn yearly_points(&self) -> Vec<YearPoint> {
        self.monthly_series
            .iter()
            .filter(|p| p.month % 12 == 0)
            .map(|p| YearPoint {
                year: p.month / 12,
                value: p.value,
            })
            .collect()
    }

    /// Get summary figures for display
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            term_months: self.term_months(),
            final_amount: self.final_amount,
            total_contributed: self.total_contributed,
            generated_interest: round_currency(self.final_amount - self.total_contributed),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub term_months: u32,
    pub final_amount: f64,
    pub total_contributed: f64,
    pub generated_interest: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ProjectionResult {
        let monthly_series = (0..=24)
            .map(|m| MonthPoint {
                month: m,
                value: 1000.0 + 100.0 * m as f64,
            })
            .collect();
        ProjectionResult {
            final_amount: 3450.25,
            monthly_series,
            total_contributed: 3400.0,
            annual_yield_percent: 2.0,
        }
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(1.234), 1.23);
        assert_eq!(round_currency(1.236), 1.24);
        assert_eq!(round_currency(2.5), 2.5);
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(1000.0), 1000.0);
    }

    #[test]
    fn test_yearly_points() {
        let points = result().yearly_points();
        assert_eq!(
            points,
            vec![
                YearPoint { year: 0, value: 1000.0 },
                YearPoint { year: 1, value: 2200.0 },
                YearPoint { year: 2, value: 3400.0 },
            ]
        );
    }

    #[test]
    fn test_summary() {
        let summary = result().summary();
        assert_eq!(summary.term_months, 24);
        assert_eq!(summary.final_amount, 3450.25);
        assert_eq!(summary.total_contributed, 3400.0);
        assert_eq!(summary.generated_interest, 50.25);
    }
}
