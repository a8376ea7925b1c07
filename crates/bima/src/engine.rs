//! The filter/sort engine behind the search page.
//!
//! Pure and deterministic: the ordered view is a function of the catalog,
//! the criteria, and the sort key, nothing else. The view is always
//! replaced wholesale; nothing here mutates in place across evaluations.

use crate::criteria::{Criteria, SortKey};
use crate::policy::Policy;
use std::cmp::Ordering;

/// Produce the ordered view: every catalog policy satisfying `criteria`,
/// sorted by `sort`. The sort is stable, so policies tied on the sort
/// attribute keep their catalog order.
pub fn evaluate(catalog: &[Policy], criteria: &Criteria, sort: SortKey) -> Vec<Policy> {
    let mut view: Vec<Policy> = catalog
        .iter()
        .filter(|policy| matches(policy, criteria))
        .cloned()
        .collect();
    view.sort_by(|a, b| compare(a, b, sort));
    view
}

/// The filter predicate: a conjunction of every criteria field. Absent
/// numeric attributes fail their test; an empty type set accepts all types.
fn matches(policy: &Policy, criteria: &Criteria) -> bool {
    policy
        .life_cover
        .is_some_and(|cover| cover >= criteria.min_life_cover)
        && policy
            .coverage_till
            .is_some_and(|till| till >= criteria.min_coverage_till)
        && (criteria.policy_types.is_empty()
            || criteria.policy_types.contains(&policy.policy_type))
        && policy.monthly_premium.is_some_and(|premium| {
            premium >= criteria.premium_low && premium <= criteria.premium_high
        })
        && policy
            .claim_settled
            .is_some_and(|ratio| ratio >= criteria.min_claim_settled)
        && matches_query(policy, &criteria.query)
}

/// Case-insensitive substring match against name or provider.
fn matches_query(policy: &Policy, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    policy.name.to_lowercase().contains(&query)
        || policy.provider.to_lowercase().contains(&query)
}

fn compare(a: &Policy, b: &Policy, sort: SortKey) -> Ordering {
    // Filtering has already excluded policies lacking the sorted attribute
    // under any criteria that reach here; missing values sort last anyway.
    match sort {
        SortKey::PremiumLowToHigh => {
            let a = a.monthly_premium.unwrap_or(u32::MAX);
            let b = b.monthly_premium.unwrap_or(u32::MAX);
            a.cmp(&b)
        }
        SortKey::PremiumHighToLow => {
            let a = a.monthly_premium.unwrap_or(0);
            let b = b.monthly_premium.unwrap_or(0);
            b.cmp(&a)
        }
        SortKey::CoverageHighToLow => {
            let a = a.life_cover.unwrap_or(0);
            let b = b.life_cover.unwrap_or(0);
            b.cmp(&a)
        }
        SortKey::ClaimSettlementHighToLow => {
            let a = a.claim_settled.unwrap_or(f64::NEG_INFINITY);
            let b = b.claim_settled.unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        }
    }
}
