//! Load the product catalog from CSV

use csv::Reader;
use std::path::Path;

use crate::error::{Result, SimulatorError};
use super::catalog::{Goal, Product};
use super::terms::AnnualContributionCap;

/// Raw CSV row matching products.csv columns
#[derive(Debug, serde::Deserialize)]
struct ProductRow {
    #[serde(rename = "ProductId")]
    product_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "AnnualYield")]
    annual_yield: f64,
    #[serde(rename = "Tier5Plus")]
    tier_5_plus: Option<f64>,
    #[serde(rename = "Tier10Plus")]
    tier_10_plus: Option<f64>,
    #[serde(rename = "MaxTotalContribution")]
    max_total_contribution: Option<f64>,
    #[serde(rename = "AnnualLimit")]
    annual_limit: Option<f64>,
    #[serde(rename = "MinTermYears")]
    min_term_years: Option<u32>,
    #[serde(rename = "MaxTermYears")]
    max_term_years: Option<u32>,
}

impl ProductRow {
    fn into_product(self) -> Result<Product> {
        let id = self.product_id.trim().to_string();
        if id.is_empty() {
            return Err(SimulatorError::InvalidInput("product row with empty ProductId".into()));
        }

        let min_term_years = self.min_term_years.unwrap_or(1);
        if let Some(max) = self.max_term_years {
            if max < min_term_years {
                return Err(SimulatorError::InvalidInput(format!(
                    "product {}: MaxTermYears {} is below MinTermYears {}",
                    id, max, min_term_years
                )));
            }
        }

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            annual_yield_percent: self.annual_yield,
            yield_tier_5_plus: self.tier_5_plus,
            yield_tier_10_plus: self.tier_10_plus,
            max_total_contribution: self.max_total_contribution,
            annual_contribution_cap: self.annual_limit.map(|limit| AnnualContributionCap { limit }),
            min_term_years,
            max_term_years: self.max_term_years,
        })
    }
}

/// Raw CSV row matching goals.csv columns
#[derive(Debug, serde::Deserialize)]
struct GoalRow {
    #[serde(rename = "GoalId")]
    goal_id: String,
    #[serde(rename = "Name")]
    name: String,
    /// Semicolon-separated product ids
    #[serde(rename = "EligibleProducts")]
    eligible_products: String,
}

impl GoalRow {
    fn into_goal(self) -> Goal {
        Goal {
            id: self.goal_id.trim().to_string(),
            name: self.name.trim().to_string(),
            eligible_products: self
                .eligible_products
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Load all products from a CSV file
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let reader = Reader::from_path(path)?;
    read_products(reader)
}

/// Load products from any reader (e.g., string buffer)
pub fn load_products_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Product>> {
    read_products(Reader::from_reader(reader))
}

fn read_products<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Product>> {
    let mut products = Vec::new();
    for row in reader.deserialize() {
        let row: ProductRow = row?;
        products.push(row.into_product()?);
    }
    Ok(products)
}

/// Load all goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<Goal>> {
    let reader = Reader::from_path(path)?;
    read_goals(reader)
}

/// Load goals from any reader
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Goal>> {
    read_goals(Reader::from_reader(reader))
}

fn read_goals<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Goal>> {
    let mut goals = Vec::new();
    for row in reader.deserialize() {
        let row: GoalRow = row?;
        goals.push(row.into_goal());
    }
    Ok(goals)
}
