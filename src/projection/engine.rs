//! Monthly compounding projection engine

use log::{debug, trace};

use crate::error::Result;
use crate::product::ProductTerms;
use super::series::{round_currency, MonthPoint, ProjectionResult};
use super::state::ProjectionState;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConfig {
    /// Resolve the term-dependent yield tier inside the engine.
    /// When false, `annual_yield_percent` is used as given.
    pub resolve_yield_tiers: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            resolve_yield_tiers: true,
        }
    }
}

/// Main projection engine. Stateless between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate the terms and run the projection
    pub fn project(&self, terms: &ProductTerms) -> Result<ProjectionResult> {
        terms.validate()?;
        Ok(self.project_unchecked(terms))
    }

    /// Run the projection without input validation.
    /// Negative or non-finite inputs give meaningless output rather than an error.
    pub fn project_unchecked(&self, terms: &ProductTerms) -> ProjectionResult {
        let annual_yield = if self.config.resolve_yield_tiers {
            terms.effective_annual_yield()
        } else {
            terms.annual_yield_percent
        };
        let monthly_rate = annual_yield / 100.0 / 12.0;
        let term_months = terms.term_months();

        debug!(
            "Projecting {} months at {}% (initial {}, monthly {})",
            term_months, annual_yield, terms.initial_deposit, terms.monthly_deposit
        );

        let states: Vec<ProjectionState> = std::iter::successors(
            Some(ProjectionState::seed(terms)),
            |state| (state.month < term_months).then(|| state.step(terms, monthly_rate)),
        )
        .inspect(|state| {
            trace!(
                "month {}: value={} contributed={} year={}",
                state.month, state.value, state.total_contributed, state.current_year
            )
        })
        .collect();

        let monthly_series: Vec<MonthPoint> = states
            .iter()
            .map(|state| MonthPoint {
                month: state.month,
                value: round_currency(state.value),
            })
            .collect();

        // successors always yields the seed, so states is never empty
        let (final_value, total_contributed) = states
            .last()
            .map(|state| (state.value, state.total_contributed))
            .unwrap_or((terms.initial_deposit, terms.initial_deposit));

        ProjectionResult {
            final_amount: round_currency(final_value),
            monthly_series,
            total_contributed: round_currency(total_contributed),
            annual_yield_percent: annual_yield,
        }
    }
}

/// Project with the default engine configuration
pub fn project(terms: &ProductTerms) -> Result<ProjectionResult> {
    ProjectionEngine::default().project(terms)
}
