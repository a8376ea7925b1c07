//! The policy record and its supporting types.
//!
//! A [`Policy`] is immutable once loaded. Identifiers are unique within the
//! catalog and stable for the session; expansion and comparison marks are
//! keyed by them. The four numeric attributes used for filtering and
//! sorting are `Option`al: an absent value fails the corresponding filter
//! test rather than being coerced to a default.

use bima_widgets::virtual_list::Row;

/// Category of a life-insurance product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyType {
    Term,
    WholeLife,
    Endowment,
    Ulip,
}

impl PolicyType {
    /// All categories, in display order.
    pub const ALL: [PolicyType; 4] = [
        PolicyType::Term,
        PolicyType::WholeLife,
        PolicyType::Endowment,
        PolicyType::Ulip,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            PolicyType::Term => "Term",
            PolicyType::WholeLife => "Whole life",
            PolicyType::Endowment => "Endowment",
            PolicyType::Ulip => "ULIP",
        }
    }
}

/// Price of an add-on rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOnPrice {
    Free,
    /// Monthly price in rupees.
    Monthly(u32),
}

/// A rider attached to a policy, free or paid.
#[derive(Debug, Clone)]
pub struct AddOn {
    pub name: String,
    pub price: AddOnPrice,
    pub description: String,
}

impl AddOn {
    pub fn free(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: AddOnPrice::Free,
            description: description.into(),
        }
    }

    pub fn paid(name: impl Into<String>, price: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: AddOnPrice::Monthly(price),
            description: description.into(),
        }
    }
}

/// Descriptive terms shown only in the expanded card.
#[derive(Debug, Clone)]
pub struct PolicyDetail {
    pub min_entry_age: u32,
    pub max_entry_age: u32,
    /// Coverage bounds in rupees.
    pub min_coverage_amount: u64,
    pub max_coverage_amount: u64,
    /// "5 - 40 years" or "Whole life".
    pub policy_term: String,
    pub premium_payment_options: Vec<String>,
    pub tax_benefits: String,
    pub survival_benefits: String,
    pub maturity_benefits: String,
    pub surrender_value: String,
    pub loan_facility: String,
    pub grace_period: String,
    pub revival_period: String,
}

/// One insurance product in the catalog.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Stable, catalog-unique identifier.
    pub id: u64,
    pub provider: String,
    pub name: String,
    /// Claim-settlement ratio in percent.
    pub claim_settled: Option<f64>,
    /// Age the cover runs until, in years.
    pub coverage_till: Option<u32>,
    /// Sum assured in rupees.
    pub life_cover: Option<u64>,
    /// Monthly premium in rupees.
    pub monthly_premium: Option<u32>,
    /// Online purchase saving, in thousands of rupees.
    pub online_saving: f64,
    pub discount: String,
    pub policy_type: PolicyType,
    pub free_add_ons: Vec<AddOn>,
    pub paid_add_ons: Vec<AddOn>,
    pub detail: PolicyDetail,
}

impl Policy {
    /// Life cover formatted in crores, "₹2.00 Cr".
    pub fn life_cover_crores(&self) -> String {
        match self.life_cover {
            Some(cover) => format!("₹{:.2} Cr", cover as f64 / 1e7),
            None => "—".to_string(),
        }
    }
}

impl Row for Policy {
    fn key(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_cover_formats_in_crores() {
        let policy = crate::catalog::builtin()
            .into_iter()
            .find(|p| p.id == 3)
            .unwrap();
        assert_eq!(policy.life_cover_crores(), "₹2.00 Cr");
    }

    #[test]
    fn policy_type_labels() {
        assert_eq!(PolicyType::WholeLife.label(), "Whole life");
        assert_eq!(PolicyType::ALL.len(), 4);
    }
}
