//! Savings Simulator - future-value projection engine for savings products
//!
//! This library provides:
//! - Month-by-month compounding projections with term-dependent yield tiers
//! - First-year annual contribution caps and lifetime contribution ceilings
//! - A goal/product catalog and a multi-product comparison runner
//! - Chart (yearly) and summary adapters over the monthly trajectory

pub mod error;
pub mod product;
pub mod projection;
pub mod simulation;

// Re-export commonly used types
pub use error::{Result, SimulatorError};
pub use product::{ProductTerms, AnnualContributionCap, Catalog, Goal, Product};
pub use projection::{project, ProjectionEngine, ProjectionConfig, ProjectionResult, ProjectionSummary};
pub use simulation::{Simulator, SimulationRequest, SimulationReport};
