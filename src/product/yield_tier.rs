//! Term-dependent yield tier selection

use super::terms::ProductTerms;

/// Minimum term (years) for the middle tier
pub const TIER_5_PLUS_YEARS: u32 = 5;

/// Minimum term (years) for the top tier
pub const TIER_10_PLUS_YEARS: u32 = 10;

/// Select the single annual yield that applies to a term.
///
/// Tiers are checked highest threshold first, so a defined 10+ tier always wins
/// over the 5+ tier for long terms. Falls back to the base yield.
pub fn select_annual_yield(term_years: u32, terms: &ProductTerms) -> f64 {
    match (terms.yield_tier_10_plus, terms.yield_tier_5_plus) {
        (Some(rate), _) if term_years >= TIER_10_PLUS_YEARS => rate,
        (_, Some(rate)) if term_years >= TIER_5_PLUS_YEARS => rate,
        _ => terms.annual_yield_percent,
    }
}
