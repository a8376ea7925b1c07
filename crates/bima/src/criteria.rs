//! Filter criteria, sort keys, and their boundary validation.
//!
//! A [`Criteria`] value is immutable per evaluation: any input change builds
//! a fresh value through [`Criteria::checked`], which rejects malformed
//! combinations before they reach the engine. The engine itself never sees
//! an invalid criteria value.

use crate::policy::PolicyType;
use std::collections::BTreeSet;

/// Validation failures for user-entered filter bounds.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CriteriaError {
    #[error("premium range is inverted: low {low} exceeds high {high}")]
    InvertedPremiumRange { low: u32, high: u32 },
    #[error("claim settlement ratio {value}% is above 100%")]
    ClaimRatioOutOfRange { value: u32 },
}

/// The active filter constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// Minimum sum assured in rupees.
    pub min_life_cover: u64,
    /// Minimum age the cover must run until.
    pub min_coverage_till: u32,
    /// Accepted product categories; empty accepts all.
    pub policy_types: BTreeSet<PolicyType>,
    /// Closed monthly premium range in rupees.
    pub premium_low: u32,
    pub premium_high: u32,
    /// Minimum claim-settlement ratio in percent.
    pub min_claim_settled: f64,
    /// Case-insensitive substring matched against name or provider.
    pub query: String,
}

impl Default for Criteria {
    /// The search page's initial constraints.
    fn default() -> Self {
        Self {
            min_life_cover: 10_000_000,
            min_coverage_till: 30,
            policy_types: BTreeSet::new(),
            premium_low: 0,
            premium_high: 5000,
            min_claim_settled: 90.0,
            query: String::new(),
        }
    }
}

impl Criteria {
    /// Build a criteria value from raw UI inputs, validating the bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn checked(
        min_life_cover: u64,
        min_coverage_till: u32,
        policy_types: BTreeSet<PolicyType>,
        premium_low: u32,
        premium_high: u32,
        min_claim_settled: u32,
        query: String,
    ) -> Result<Self, CriteriaError> {
        if premium_low > premium_high {
            return Err(CriteriaError::InvertedPremiumRange {
                low: premium_low,
                high: premium_high,
            });
        }
        if min_claim_settled > 100 {
            return Err(CriteriaError::ClaimRatioOutOfRange {
                value: min_claim_settled,
            });
        }
        Ok(Self {
            min_life_cover,
            min_coverage_till,
            policy_types,
            premium_low,
            premium_high,
            min_claim_settled: min_claim_settled as f64,
            query,
        })
    }
}

/// The four total orders the list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PremiumLowToHigh,
    PremiumHighToLow,
    CoverageHighToLow,
    ClaimSettlementHighToLow,
}

impl SortKey {
    /// All sort keys, in selector order.
    pub const ALL: [SortKey; 4] = [
        SortKey::PremiumLowToHigh,
        SortKey::PremiumHighToLow,
        SortKey::CoverageHighToLow,
        SortKey::ClaimSettlementHighToLow,
    ];

    /// Display label for the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::PremiumLowToHigh => "Premium: Low to High",
            SortKey::PremiumHighToLow => "Premium: High to Low",
            SortKey::CoverageHighToLow => "Coverage Amount",
            SortKey::ClaimSettlementHighToLow => "Claim Settlement",
        }
    }
}
