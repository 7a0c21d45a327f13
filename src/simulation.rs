//! Multi-product simulation runner
//!
//! Holds the catalog once, then projects each selected product for a goal.
//! Products are independent, so they are projected in parallel.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SimulatorError};
use crate::product::{Catalog, ProductTerms};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};

fn default_term_years() -> u32 {
    10
}

/// A user's simulation input: goal, chosen products and contribution parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub goal_id: String,

    /// Up to three product ids, in display order
    pub product_ids: Vec<String>,

    #[serde(default)]
    pub initial_deposit: f64,

    #[serde(default)]
    pub monthly_deposit: f64,

    #[serde(default = "default_term_years")]
    pub term_years: u32,
}

impl SimulationRequest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Projection outcome for one selected product
#[derive(Debug, Clone, Serialize)]
pub struct ProductOutcome {
    pub product_id: String,
    pub product_name: String,
    pub summary: ProjectionSummary,
    pub result: ProjectionResult,
}

/// Outcomes for every product in a request, in selection order
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub goal_id: String,
    pub term_years: u32,
    pub products: Vec<ProductOutcome>,
}

/// Catalog-backed simulation runner
#[derive(Debug, Clone)]
pub struct Simulator {
    catalog: Catalog,
    engine: ProjectionEngine,
}

impl Simulator {
    /// Create a runner with the default engine configuration
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, ProjectionConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: ProjectionConfig) -> Self {
        Self {
            catalog,
            engine: ProjectionEngine::new(config),
        }
    }

    /// Create a runner by loading the catalog from a directory
    pub fn from_catalog_path(path: &Path) -> Result<Self> {
        Ok(Self::new(Catalog::load_from(path)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve the request against the catalog and project every selected product
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationReport> {
        let products = self.catalog.select_products(&request.goal_id, &request.product_ids)?;

        if let Some(product) = products.iter().find(|p| !p.accepts_term(request.term_years)) {
            return Err(SimulatorError::InvalidSelection(format!(
                "product {} cannot be held for {} years",
                product.id, request.term_years
            )));
        }

        info!(
            "Simulating goal {} over {} years for {} products",
            request.goal_id,
            request.term_years,
            products.len()
        );

        let outcomes = products
            .par_iter()
            .map(|product| -> Result<ProductOutcome> {
                let terms = product.terms(request.initial_deposit, request.monthly_deposit, request.term_years);
                let result = self.engine.project(&terms)?;
                Ok(ProductOutcome {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    summary: result.summary(),
                    result,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SimulationReport {
            goal_id: request.goal_id.clone(),
            term_years: request.term_years,
            products: outcomes,
        })
    }

    /// Project a batch of raw terms, bypassing the catalog
    pub fn run_terms(&self, terms: &[ProductTerms]) -> Result<Vec<ProjectionResult>> {
        terms.par_iter().map(|t| self.engine.project(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{AnnualContributionCap, Goal, Product};

    fn product(id: &str, yield_percent: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("{} product", id),
            annual_yield_percent: yield_percent,
            yield_tier_5_plus: None,
            yield_tier_10_plus: None,
            max_total_contribution: None,
            annual_contribution_cap: None,
            min_term_years: 1,
            max_term_years: Some(30),
        }
    }

    fn simulator() -> Simulator {
        let mut pension = product("pension", 3.5);
        pension.annual_contribution_cap = Some(AnnualContributionCap::default());
        let products = vec![product("savings", 2.0), product("fund", 5.0), pension];
        let goals = vec![Goal {
            id: "retirement".into(),
            name: "Retirement".into(),
            eligible_products: vec!["savings".into(), "fund".into(), "pension".into()],
        }];
        Simulator::new(Catalog::new(products, goals).unwrap())
    }

    fn request(ids: &[&str], term_years: u32) -> SimulationRequest {
        SimulationRequest {
            goal_id: "retirement".into(),
            product_ids: ids.iter().map(|s| s.to_string()).collect(),
            initial_deposit: 2000.0,
            monthly_deposit: 1000.0,
            term_years,
        }
    }

    #[test]
    fn test_run_preserves_selection_order() {
        let report = simulator().run(&request(&["fund", "savings", "pension"], 10)).unwrap();

        let ids: Vec<_> = report.products.iter().map(|o| o.product_id.as_str()).collect();
        assert_eq!(ids, vec!["fund", "savings", "pension"]);
        assert_eq!(report.term_years, 10);

        // Higher yield, same contributions, higher final amount
        assert!(report.products[0].summary.final_amount > report.products[1].summary.final_amount);
        // Capped product credits less principal in year 1
        assert_eq!(report.products[2].summary.total_contributed, 8000.0 + 108.0 * 1000.0);
    }

    #[test]
    fn test_run_rejects_unsupported_term() {
        let result = simulator().run(&request(&["savings"], 31));
        assert!(matches!(result, Err(SimulatorError::InvalidSelection(_))));
    }

    #[test]
    fn test_run_rejects_invalid_amounts() {
        let mut req = request(&["savings"], 5);
        req.monthly_deposit = -10.0;
        assert!(matches!(simulator().run(&req), Err(SimulatorError::InvalidInput(_))));
    }

    #[test]
    fn test_request_defaults() {
        let req = SimulationRequest::from_json_str(r#"{"goal_id":"retirement","product_ids":["savings"]}"#).unwrap();
        assert_eq!(req.initial_deposit, 0.0);
        assert_eq!(req.monthly_deposit, 0.0);
        assert_eq!(req.term_years, 10);

        assert!(matches!(
            SimulationRequest::from_json_str("{"),
            Err(SimulatorError::Json(_))
        ));
    }

    #[test]
    fn test_run_terms_batch() {
        let terms: Vec<_> = [1.0, 2.0, 3.0]
            .iter()
            .map(|&rate| ProductTerms::new(1000.0, 100.0, 5, rate))
            .collect();
        let results = simulator().run_terms(&terms).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results[2].final_amount > results[0].final_amount);
    }
}
