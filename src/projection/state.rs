//! Month-to-month state carried through a projection

use crate::product::ProductTerms;

/// State of a projection at the end of a month
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Month index (0 = starting balance)
    pub month: u32,

    /// Running balance, never rounded
    pub value: f64,

    /// Principal credited so far, initial deposit included
    pub total_contributed: f64,

    /// Contribution year the next month falls in (1-indexed)
    pub current_year: u32,

    /// Principal counted against the annual cap in the current year
    pub current_year_contributions: f64,
}

impl ProjectionState {
    /// Month 0: the initial deposit, no interest and no contribution.
    /// The initial deposit counts against the first year's allowance.
    pub fn seed(terms: &ProductTerms) -> Self {
        Self {
            month: 0,
            value: terms.initial_deposit,
            total_contributed: terms.initial_deposit,
            current_year: 1,
            current_year_contributions: terms.initial_deposit,
        }
    }

    /// Deposit allowed by the annual cap for the coming month.
    /// Only the first year is capped; later years pass the deposit through.
    pub fn capped_contribution(&self, terms: &ProductTerms) -> f64 {
        match terms.annual_contribution_cap {
            Some(cap) if self.current_year == 1 => {
                let remaining = cap.limit - self.current_year_contributions;
                if remaining <= 0.0 {
                    0.0
                } else {
                    terms.monthly_deposit.min(remaining)
                }
            }
            _ => terms.monthly_deposit,
        }
    }

    /// Apply the lifetime ceiling: the whole amount is skipped if it would overflow
    pub fn within_total_ceiling(&self, terms: &ProductTerms, amount: f64) -> f64 {
        match terms.max_total_contribution {
            Some(ceiling) if self.total_contributed + amount > ceiling => 0.0,
            _ => amount,
        }
    }

    /// Cap-adjusted deposit and the amount actually credited for the coming month.
    /// The cap-adjusted amount is what counts against the first-year allowance.
    fn month_contribution(&self, terms: &ProductTerms) -> (f64, f64) {
        let capped = self.capped_contribution(terms);
        (capped, self.within_total_ceiling(terms, capped))
    }

    /// Amount actually credited at the end of the coming month
    pub fn contribution_for_month(&self, terms: &ProductTerms) -> f64 {
        self.month_contribution(terms).1
    }

    /// Advance one month: compound, then credit the month-end contribution
    pub fn step(&self, terms: &ProductTerms, monthly_rate: f64) -> Self {
        let month = self.month + 1;
        let grown = self.value * (1.0 + monthly_rate);

        let (capped, contribution) = self.month_contribution(terms);

        let mut current_year_contributions = self.current_year_contributions;
        if terms.annual_contribution_cap.is_some() && self.current_year == 1 {
            current_year_contributions += capped;
        }

        let mut current_year = self.current_year;
        if month % 12 == 0 {
            // Year boundary: the cap is not tracked past year 1
            current_year += 1;
            current_year_contributions = 0.0;
        }

        Self {
            month,
            value: grown + contribution,
            total_contributed: self.total_contributed + contribution,
            current_year,
            current_year_contributions,
        }
    }
}
