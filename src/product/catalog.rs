//! Goal and product catalog

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SimulatorError};
use super::loader::{load_goals, load_products};
use super::terms::{AnnualContributionCap, ProductTerms};

/// Default path to the catalog directory
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog";

/// Maximum number of products compared in one simulation
pub const MAX_SELECTED_PRODUCTS: usize = 3;

/// A product offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,

    /// Base annual yield (percent)
    pub annual_yield_percent: f64,

    /// Yield for terms of 5 years or more (percent)
    pub yield_tier_5_plus: Option<f64>,

    /// Yield for terms of 10 years or more (percent)
    pub yield_tier_10_plus: Option<f64>,

    /// Lifetime ceiling on principal
    pub max_total_contribution: Option<f64>,

    /// First-year contribution ceiling
    pub annual_contribution_cap: Option<AnnualContributionCap>,

    /// Shortest term the product can be held for (years, inclusive)
    pub min_term_years: u32,

    /// Longest term the product can be held for (years, inclusive)
    pub max_term_years: Option<u32>,
}

impl Product {
    /// Whether the product can be projected over `term_years`
    pub fn accepts_term(&self, term_years: u32) -> bool {
        term_years >= self.min_term_years
            && self.max_term_years.map_or(true, |max| term_years <= max)
    }

    /// Bind the product to user contribution parameters
    pub fn terms(&self, initial_deposit: f64, monthly_deposit: f64, term_years: u32) -> ProductTerms {
        ProductTerms {
            initial_deposit,
            monthly_deposit,
            term_years,
            annual_yield_percent: self.annual_yield_percent,
            yield_tier_5_plus: self.yield_tier_5_plus,
            yield_tier_10_plus: self.yield_tier_10_plus,
            max_total_contribution: self.max_total_contribution,
            annual_contribution_cap: self.annual_contribution_cap,
        }
    }
}

/// A savings goal and the products eligible for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub eligible_products: Vec<String>,
}

impl Goal {
    pub fn is_eligible(&self, product_id: &str) -> bool {
        self.eligible_products.iter().any(|id| id == product_id)
    }
}

/// In-memory catalog of goals and products
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    goals: Vec<Goal>,
}

impl Catalog {
    /// Build a catalog, checking that every goal references known products
    pub fn new(products: Vec<Product>, goals: Vec<Goal>) -> Result<Self> {
        for goal in &goals {
            for id in &goal.eligible_products {
                if !products.iter().any(|p| &p.id == id) {
                    return Err(SimulatorError::UnknownProduct(format!(
                        "{} (referenced by goal {})",
                        id, goal.id
                    )));
                }
            }
        }
        Ok(Self { products, goals })
    }

    /// Load from the default catalog directory
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CATALOG_PATH))
    }

    /// Load `products.csv` and `goals.csv` from a directory
    pub fn load_from(dir: &Path) -> Result<Self> {
        let products = load_products(dir.join("products.csv"))?;
        let goals = load_goals(dir.join("goals.csv"))?;
        info!(
            "Loaded catalog from {}: {} products, {} goals",
            dir.display(),
            products.len(),
            goals.len()
        );
        Self::new(products, goals)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn product(&self, id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SimulatorError::UnknownProduct(id.to_string()))
    }

    pub fn goal(&self, id: &str) -> Result<&Goal> {
        self.goals
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| SimulatorError::UnknownGoal(id.to_string()))
    }

    /// Products eligible for a goal, in catalog order.
    /// When a term is given, products that cannot be held that long are dropped.
    pub fn eligible_products(&self, goal_id: &str, term_years: Option<u32>) -> Result<Vec<&Product>> {
        let goal = self.goal(goal_id)?;
        Ok(self
            .products
            .iter()
            .filter(|p| goal.is_eligible(&p.id))
            .filter(|p| term_years.map_or(true, |t| p.accepts_term(t)))
            .collect())
    }

    /// Resolve a user selection of up to `MAX_SELECTED_PRODUCTS` products for a goal
    pub fn select_products(&self, goal_id: &str, product_ids: &[String]) -> Result<Vec<&Product>> {
        let goal = self.goal(goal_id)?;

        if product_ids.is_empty() {
            warn!("Rejected empty product selection for goal {}", goal_id);
            return Err(SimulatorError::InvalidSelection("no products selected".into()));
        }
        if product_ids.len() > MAX_SELECTED_PRODUCTS {
            warn!("Rejected {} products for goal {}", product_ids.len(), goal_id);
            return Err(SimulatorError::InvalidSelection(format!(
                "at most {} products can be compared, got {}",
                MAX_SELECTED_PRODUCTS,
                product_ids.len()
            )));
        }

        let mut selected: Vec<&Product> = Vec::with_capacity(product_ids.len());
        for id in product_ids {
            if selected.iter().any(|p| &p.id == id) {
                return Err(SimulatorError::InvalidSelection(format!("product {} selected twice", id)));
            }
            let product = self.product(id)?;
            if !goal.is_eligible(id) {
                warn!("Product {} is not eligible for goal {}", id, goal_id);
                return Err(SimulatorError::IneligibleProduct {
                    goal: goal_id.to_string(),
                    product: id.clone(),
                });
            }
            selected.push(product);
        }

        Ok(selected)
    }
}
