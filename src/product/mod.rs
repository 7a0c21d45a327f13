//! Product terms, yield tiers and the goal/product catalog

mod terms;
mod yield_tier;
mod catalog;
pub mod loader;

pub use terms::{ProductTerms, AnnualContributionCap, DEFAULT_ANNUAL_CONTRIBUTION_LIMIT, MAX_TERM_YEARS};
pub use yield_tier::{select_annual_yield, TIER_5_PLUS_YEARS, TIER_10_PLUS_YEARS};
pub use catalog::{Catalog, Goal, Product, DEFAULT_CATALOG_PATH, MAX_SELECTED_PRODUCTS};
pub use loader::{load_products, load_products_from_reader, load_goals, load_goals_from_reader};
