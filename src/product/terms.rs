//! Contribution terms for a single product projection

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};
use super::yield_tier::select_annual_yield;

/// Annual ceiling applied by capped products (currency units per year)
pub const DEFAULT_ANNUAL_CONTRIBUTION_LIMIT: f64 = 8000.0;

/// Longest term accepted by `validate`
pub const MAX_TERM_YEARS: u32 = 100;

/// Fixed annual contribution ceiling, enforced during months 1-12 of the term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualContributionCap {
    /// Maximum principal credited in the first year, initial deposit included
    pub limit: f64,
}

impl Default for AnnualContributionCap {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ANNUAL_CONTRIBUTION_LIMIT,
        }
    }
}

/// Inputs for one projection. Immutable for the duration of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTerms {
    /// Starting balance at month 0
    pub initial_deposit: f64,

    /// Deposit credited at the end of every month
    pub monthly_deposit: f64,

    /// Term in whole years
    pub term_years: u32,

    /// Base annual yield as a percentage (3.5 means 3.5%)
    pub annual_yield_percent: f64,

    /// Yield used when the term is at least 5 years
    #[serde(default)]
    pub yield_tier_5_plus: Option<f64>,

    /// Yield used when the term is at least 10 years
    #[serde(default)]
    pub yield_tier_10_plus: Option<f64>,

    /// Ceiling on cumulative principal (initial plus all monthly deposits)
    #[serde(default)]
    pub max_total_contribution: Option<f64>,

    /// First-year contribution ceiling
    #[serde(default)]
    pub annual_contribution_cap: Option<AnnualContributionCap>,
}

impl ProductTerms {
    /// Create terms with a flat yield and no caps
    pub fn new(initial_deposit: f64, monthly_deposit: f64, term_years: u32, annual_yield_percent: f64) -> Self {
        Self {
            initial_deposit,
            monthly_deposit,
            term_years,
            annual_yield_percent,
            yield_tier_5_plus: None,
            yield_tier_10_plus: None,
            max_total_contribution: None,
            annual_contribution_cap: None,
        }
    }

    pub fn with_yield_tiers(mut self, tier_5_plus: Option<f64>, tier_10_plus: Option<f64>) -> Self {
        self.yield_tier_5_plus = tier_5_plus;
        self.yield_tier_10_plus = tier_10_plus;
        self
    }

    pub fn with_max_total_contribution(mut self, ceiling: f64) -> Self {
        self.max_total_contribution = Some(ceiling);
        self
    }

    pub fn with_annual_cap(mut self, limit: f64) -> Self {
        self.annual_contribution_cap = Some(AnnualContributionCap { limit });
        self
    }

    /// Number of monthly steps in the term
    pub fn term_months(&self) -> u32 {
        self.term_years.checked_mul(12).unwrap_or(u32::MAX)
    }

    /// Annual yield after tier resolution for this term
    pub fn effective_annual_yield(&self) -> f64 {
        select_annual_yield(self.term_years, self)
    }

    /// Reject inputs the projection loop cannot give a meaningful answer for
    pub fn validate(&self) -> Result<()> {
        if self.term_years == 0 {
            return Err(SimulatorError::InvalidInput("term_years must be at least 1".into()));
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(SimulatorError::InvalidInput(format!(
                "term_years must be at most {}, got {}",
                MAX_TERM_YEARS, self.term_years
            )));
        }
        check_amount("initial_deposit", self.initial_deposit)?;
        check_amount("monthly_deposit", self.monthly_deposit)?;
        check_rate("annual_yield_percent", self.annual_yield_percent)?;
        if let Some(rate) = self.yield_tier_5_plus {
            check_rate("yield_tier_5_plus", rate)?;
        }
        if let Some(rate) = self.yield_tier_10_plus {
            check_rate("yield_tier_10_plus", rate)?;
        }
        if let Some(ceiling) = self.max_total_contribution {
            check_amount("max_total_contribution", ceiling)?;
        }
        if let Some(cap) = self.annual_contribution_cap {
            check_amount("annual_contribution_cap.limit", cap.limit)?;
        }
        Ok(())
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimulatorError::InvalidInput(format!(
            "{} must be a finite non-negative amount, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_rate(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimulatorError::InvalidInput(format!(
            "{} must be finite, got {}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_months() {
        assert_eq!(ProductTerms::new(0.0, 100.0, 1, 2.0).term_months(), 12);
        assert_eq!(ProductTerms::new(0.0, 100.0, 25, 2.0).term_months(), 300);
        assert_eq!(ProductTerms::new(0.0, 100.0, 400_000_000, 2.0).term_months(), u32::MAX);
    }

    #[test]
    fn test_validate_term_upper_bound() {
        assert!(ProductTerms::new(1000.0, 0.0, MAX_TERM_YEARS, 0.0).validate().is_ok());

        let too_long = ProductTerms::new(1000.0, 0.0, MAX_TERM_YEARS + 1, 0.0);
        assert!(matches!(too_long.validate(), Err(SimulatorError::InvalidInput(_))));

        let overflowing = ProductTerms::new(1000.0, 0.0, 400_000_000, 0.0);
        assert!(matches!(overflowing.validate(), Err(SimulatorError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_accepts_zero_amounts() {
        let terms = ProductTerms::new(0.0, 0.0, 1, 0.0);
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let zero_term = ProductTerms::new(1000.0, 100.0, 0, 3.0);
        assert!(matches!(zero_term.validate(), Err(SimulatorError::InvalidInput(_))));

        let negative_deposit = ProductTerms::new(-1.0, 100.0, 5, 3.0);
        assert!(matches!(negative_deposit.validate(), Err(SimulatorError::InvalidInput(_))));

        let nan_monthly = ProductTerms::new(0.0, f64::NAN, 5, 3.0);
        assert!(nan_monthly.validate().is_err());

        let infinite_tier = ProductTerms::new(0.0, 10.0, 5, 3.0).with_yield_tiers(Some(f64::INFINITY), None);
        assert!(infinite_tier.validate().is_err());

        let negative_cap = ProductTerms::new(0.0, 10.0, 5, 3.0).with_annual_cap(-8000.0);
        assert!(negative_cap.validate().is_err());

        let negative_ceiling = ProductTerms::new(0.0, 10.0, 5, 3.0).with_max_total_contribution(-1.0);
        assert!(negative_ceiling.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let json = r#"{"initial_deposit":1000.0,"monthly_deposit":50.0,"term_years":3,"annual_yield_percent":2.5}"#;
        let terms: ProductTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms, ProductTerms::new(1000.0, 50.0, 3, 2.5));
    }
}
