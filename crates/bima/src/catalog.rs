//! The built-in policy catalog.
//!
//! Five term/whole-life products from the big Indian life insurers. The
//! catalog is handed to the application through `Model::Flags` rather than
//! read from a global, so tests can run the app against arbitrary fixtures.

use crate::policy::{AddOn, Policy, PolicyDetail, PolicyType};

/// The full built-in catalog.
pub fn builtin() -> Vec<Policy> {
    vec![
        Policy {
            id: 1,
            provider: "ICICI Prudential".into(),
            name: "iProtect Smart".into(),
            claim_settled: Some(99.2),
            coverage_till: Some(60),
            life_cover: Some(10_000_000),
            monthly_premium: Some(2449),
            online_saving: 7.4,
            discount: "10% discount for salaried included (for 1st year)".into(),
            policy_type: PolicyType::Term,
            free_add_ons: vec![
                AddOn::free(
                    "Waiver of Premium Cover",
                    "Waives future premiums in case of total permanent disability or critical illness.",
                ),
                AddOn::free(
                    "100% payout on Terminal illness",
                    "Provides full sum assured payout if diagnosed with a terminal illness.",
                ),
            ],
            paid_add_ons: vec![
                AddOn::paid(
                    "Extra Payout on Accidental death",
                    58,
                    "Provides additional payout in case of death due to accident.",
                ),
                AddOn::paid(
                    "Cover against 34 critical illnesses",
                    330,
                    "Offers protection against 34 specified critical illnesses.",
                ),
            ],
            detail: PolicyDetail {
                min_entry_age: 18,
                max_entry_age: 65,
                min_coverage_amount: 5_000_000,
                max_coverage_amount: 100_000_000,
                policy_term: "5 - 40 years".into(),
                premium_payment_options: payment_modes(),
                tax_benefits: "Premium paid is eligible for tax deduction under Section 80C".into(),
                survival_benefits: "No survival benefits as it's a pure term plan".into(),
                maturity_benefits: "No maturity benefits".into(),
                surrender_value: "No surrender value".into(),
                loan_facility: "No loan facility available".into(),
                grace_period: "30 days for monthly mode, 15 days for other modes".into(),
                revival_period: "5 years from the date of first unpaid premium".into(),
            },
        },
        Policy {
            id: 2,
            provider: "HDFC Life".into(),
            name: "Click 2 Protect Life".into(),
            claim_settled: Some(99.5),
            coverage_till: Some(65),
            life_cover: Some(15_000_000),
            monthly_premium: Some(3164),
            online_saving: 7.1,
            discount: "5% online discount included (for 1st year)".into(),
            policy_type: PolicyType::Term,
            free_add_ons: vec![AddOn::free(
                "Accidental Death Benefit",
                "Provides additional payout in case of accidental death.",
            )],
            paid_add_ons: vec![AddOn::paid(
                "Critical Illness Rider",
                420,
                "Covers 36 critical illnesses with additional payout.",
            )],
            detail: PolicyDetail {
                min_entry_age: 18,
                max_entry_age: 65,
                min_coverage_amount: 10_000_000,
                max_coverage_amount: 150_000_000,
                policy_term: "10 - 40 years".into(),
                premium_payment_options: payment_modes(),
                tax_benefits:
                    "Premium paid is eligible for tax deduction under Section 80C and 10(10D)"
                        .into(),
                survival_benefits: "No survival benefits as it's a pure term plan".into(),
                maturity_benefits: "Return of premiums at maturity (if opted)".into(),
                surrender_value: "Applicable only if Return of Premium option is chosen".into(),
                loan_facility: "No loan facility available".into(),
                grace_period: "30 days for all premium payment modes".into(),
                revival_period: "2 years from the date of first unpaid premium".into(),
            },
        },
        Policy {
            id: 3,
            provider: "Max Life".into(),
            name: "Smart Secure Plus".into(),
            claim_settled: Some(99.7),
            coverage_till: Some(70),
            life_cover: Some(20_000_000),
            monthly_premium: Some(2191),
            online_saving: 10.1,
            discount: "7% online discount included (for 1st year)".into(),
            policy_type: PolicyType::WholeLife,
            free_add_ons: vec![AddOn::free(
                "Terminal Illness Benefit",
                "Provides full sum assured payout if diagnosed with a terminal illness.",
            )],
            paid_add_ons: vec![AddOn::paid(
                "Accidental Death and Dismemberment Rider",
                280,
                "Provides coverage for accidental death and dismemberment.",
            )],
            detail: PolicyDetail {
                min_entry_age: 18,
                max_entry_age: 60,
                min_coverage_amount: 10_000_000,
                max_coverage_amount: 100_000_000,
                policy_term: "Whole life".into(),
                premium_payment_options: payment_modes(),
                tax_benefits:
                    "Premium paid is eligible for tax deduction under Section 80C and 10(10D)"
                        .into(),
                survival_benefits:
                    "Accumulation of bonuses (if any) throughout the policy term".into(),
                maturity_benefits:
                    "Sum assured plus accrued bonuses (if any) paid on maturity".into(),
                surrender_value: "Available after 3 full years' premiums are paid".into(),
                loan_facility: "Available after 3 full years' premiums are paid".into(),
                grace_period: "30 days for all premium payment modes".into(),
                revival_period: "5 years from the date of first unpaid premium".into(),
            },
        },
        Policy {
            id: 4,
            provider: "TATA AIA".into(),
            name: "Sampoorna Raksha+".into(),
            claim_settled: Some(99.1),
            coverage_till: Some(75),
            life_cover: Some(25_000_000),
            monthly_premium: Some(2229),
            online_saving: 7.3,
            discount: "10% discount for salaried included (for 1st year)".into(),
            policy_type: PolicyType::Endowment,
            free_add_ons: vec![
                AddOn::free(
                    "Life Stage Benefit",
                    "Allows increase in coverage at key life stages without medical tests.",
                ),
                AddOn::free(
                    "Special Exit Value",
                    "Returns a portion of premiums paid if the policy is surrendered after a certain period.",
                ),
            ],
            paid_add_ons: vec![],
            detail: PolicyDetail {
                min_entry_age: 18,
                max_entry_age: 55,
                min_coverage_amount: 5_000_000,
                max_coverage_amount: 50_000_000,
                policy_term: "15 - 30 years".into(),
                premium_payment_options: payment_modes(),
                tax_benefits:
                    "Premium paid is eligible for tax deduction under Section 80C and 10(10D)"
                        .into(),
                survival_benefits:
                    "Guaranteed additions and reversionary bonuses (if any)".into(),
                maturity_benefits: "Sum assured plus accrued bonuses paid on maturity".into(),
                surrender_value: "Available after 2 full years' premiums are paid".into(),
                loan_facility: "Available after 2 full years' premiums are paid".into(),
                grace_period: "15 days for monthly mode, 30 days for other modes".into(),
                revival_period: "2 years from the date of first unpaid premium".into(),
            },
        },
        Policy {
            id: 5,
            provider: "SBI Life".into(),
            name: "eShield Next".into(),
            claim_settled: Some(98.8),
            coverage_till: Some(85),
            life_cover: Some(30_000_000),
            monthly_premium: Some(3500),
            online_saving: 8.5,
            discount: "8% discount for women policyholders".into(),
            policy_type: PolicyType::Ulip,
            free_add_ons: vec![AddOn::free(
                "Spouse Insurance Cover",
                "Provides additional coverage for the spouse at no extra cost.",
            )],
            paid_add_ons: vec![AddOn::paid(
                "Income Benefit Rider",
                550,
                "Provides regular income to the family in case of policyholder's death.",
            )],
            detail: PolicyDetail {
                min_entry_age: 18,
                max_entry_age: 65,
                min_coverage_amount: 10_000_000,
                max_coverage_amount: 50_000_000,
                policy_term: "5 - 30 years".into(),
                premium_payment_options: payment_modes(),
                tax_benefits:
                    "Premium paid is eligible for tax deduction under Section 80C and 10(10D)"
                        .into(),
                survival_benefits:
                    "Returns based on the performance of chosen fund options".into(),
                maturity_benefits: "Fund value as on the date of maturity".into(),
                surrender_value: "Available after 5 year lock-in period".into(),
                loan_facility: "Not available".into(),
                grace_period: "15 days for monthly mode, 30 days for other modes".into(),
                revival_period: "2 years from the date of first unpaid premium".into(),
            },
        },
    ]
}

fn payment_modes() -> Vec<String> {
    ["Monthly", "Quarterly", "Half-yearly", "Yearly"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
