//! Future-value projection engine

mod state;
mod engine;
mod series;

pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine, ProjectionConfig};
pub use series::{round_currency, MonthPoint, YearPoint, ProjectionResult, ProjectionSummary};
