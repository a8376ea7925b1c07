//! Policy card rendering for the windowed list.
//!
//! The collapsed card shows the headline numbers; the expanded card adds
//! the add-on riders and the full policy terms. Both heights are fixed so
//! the offset table never needs to measure content.

use crate::policy::{AddOn, AddOnPrice, Policy};
use bima_widgets::virtual_list::{RowContext, RowDelegate};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Card height in lines while collapsed.
pub const COLLAPSED_HEIGHT: u16 = 8;
/// Card height in lines while expanded.
pub const EXPANDED_HEIGHT: u16 = 26;

/// Renders a [`Policy`] as a card.
pub struct CardDelegate;

impl RowDelegate<Policy> for CardDelegate {
    fn render<'a>(&'a self, policy: &'a Policy, ctx: RowContext) -> Vec<Line<'a>> {
        let dim = Style::default().fg(Color::DarkGray);
        let header_style = if ctx.cursor {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let arrow = if ctx.expanded { "▾" } else { "▸" };
        let marker = if ctx.cursor { "❯ " } else { "  " };
        let mut header = vec![
            Span::styled(format!("{marker}{arrow} "), header_style),
            Span::styled(clip(&policy.name, ctx.width), header_style),
            Span::styled(format!("  {}", policy.provider), dim),
        ];
        if ctx.marked {
            header.push(Span::styled(
                "  [✓ compare]",
                Style::default().fg(Color::Green),
            ));
        }

        let claim = policy
            .claim_settled
            .map(|r| format!("{r}%"))
            .unwrap_or_else(|| "—".into());
        let till = policy
            .coverage_till
            .map(|t| format!("{t} yrs"))
            .unwrap_or_else(|| "—".into());
        let premium = policy
            .monthly_premium
            .map(|p| format!("₹{p}/month"))
            .unwrap_or_else(|| "—".into());

        let mut lines = vec![
            Line::from(header),
            Line::from(vec![
                Span::styled("    Claim settled ", dim),
                Span::raw(claim),
                Span::styled("   Coverage till ", dim),
                Span::raw(till),
                Span::styled("   Life cover ", dim),
                Span::raw(policy.life_cover_crores()),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("    {premium}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   online saving ₹{}K", policy.online_saving),
                    dim,
                ),
            ]),
            Line::styled(
                format!("    ✓ {}", clip(&policy.discount, ctx.width.saturating_sub(6))),
                Style::default().fg(Color::Green),
            ),
            Line::raw("    ✓ 24hr claim settlement"),
            Line::styled(
                format!(
                    "    {} free add-ons · {} paid add-ons · enter for details",
                    policy.free_add_ons.len(),
                    policy.paid_add_ons.len()
                ),
                dim,
            ),
        ];

        if ctx.expanded {
            lines.push(Line::raw(""));
            if !policy.free_add_ons.is_empty() {
                lines.push(Line::raw("    Free add-ons"));
                for addon in &policy.free_add_ons {
                    lines.push(addon_line(addon, ctx.width));
                }
            }
            if !policy.paid_add_ons.is_empty() {
                lines.push(Line::raw("    Paid add-ons"));
                for addon in &policy.paid_add_ons {
                    lines.push(addon_line(addon, ctx.width));
                }
            }
            lines.push(Line::raw(""));
            let detail = &policy.detail;
            for (label, value) in [
                (
                    "Entry age",
                    format!("{} - {} years", detail.min_entry_age, detail.max_entry_age),
                ),
                (
                    "Coverage amount",
                    format!(
                        "₹{:.2} Cr - ₹{:.2} Cr",
                        detail.min_coverage_amount as f64 / 1e7,
                        detail.max_coverage_amount as f64 / 1e7
                    ),
                ),
                ("Policy term", detail.policy_term.clone()),
                (
                    "Payment options",
                    detail.premium_payment_options.join(", "),
                ),
                ("Tax benefits", detail.tax_benefits.clone()),
                ("Survival benefits", detail.survival_benefits.clone()),
                ("Maturity benefits", detail.maturity_benefits.clone()),
                ("Surrender value", detail.surrender_value.clone()),
                ("Loan facility", detail.loan_facility.clone()),
                ("Grace period", detail.grace_period.clone()),
                ("Revival period", detail.revival_period.clone()),
            ] {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {label}: "), dim),
                    Span::raw(clip(&value, ctx.width.saturating_sub(6 + label.len() as u16))),
                ]));
            }
        }

        // Pad so the rule always closes the card at its fixed height.
        while lines.len() + 1 < ctx.height as usize {
            lines.push(Line::raw(""));
        }
        lines.truncate(ctx.height.saturating_sub(1) as usize);
        lines.push(Line::styled(
            "─".repeat(ctx.width as usize),
            Style::default().fg(Color::DarkGray),
        ));
        lines
    }
}

fn addon_line(addon: &AddOn, width: u16) -> Line<'static> {
    let price = match addon.price {
        AddOnPrice::Free => "free".to_string(),
        AddOnPrice::Monthly(p) => format!("₹{p}/month"),
    };
    Line::from(vec![
        Span::raw(format!("      • {} ", addon.name)),
        Span::styled(
            format!("({price}) "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            clip(
                &addon.description,
                width.saturating_sub(10 + addon.name.len() as u16),
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Truncate `s` to at most `width` display columns.
fn clip(s: &str, width: u16) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width as usize {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn ctx(height: u16) -> RowContext {
        RowContext {
            index: 0,
            cursor: false,
            marked: false,
            expanded: height == EXPANDED_HEIGHT,
            transitioning: false,
            width: 100,
            height,
        }
    }

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn collapsed_card_fits_its_height() {
        let catalog = catalog::builtin();
        for policy in &catalog {
            let lines = CardDelegate.render(policy, ctx(COLLAPSED_HEIGHT));
            assert_eq!(lines.len(), COLLAPSED_HEIGHT as usize, "id {}", policy.id);
        }
    }

    #[test]
    fn expanded_card_fits_its_height() {
        let catalog = catalog::builtin();
        for policy in &catalog {
            let lines = CardDelegate.render(policy, ctx(EXPANDED_HEIGHT));
            assert_eq!(lines.len(), EXPANDED_HEIGHT as usize, "id {}", policy.id);
        }
    }

    #[test]
    fn expanded_card_shows_terms_collapsed_card_hides_them() {
        let policy = &catalog::builtin()[0];
        let collapsed = text_of(&CardDelegate.render(policy, ctx(COLLAPSED_HEIGHT))).join("\n");
        let expanded = text_of(&CardDelegate.render(policy, ctx(EXPANDED_HEIGHT))).join("\n");

        assert!(collapsed.contains("iProtect Smart"));
        assert!(collapsed.contains("₹2449/month"));
        assert!(!collapsed.contains("Revival period"));

        assert!(expanded.contains("Revival period"));
        assert!(expanded.contains("Waiver of Premium Cover"));
        assert!(expanded.contains("Entry age: 18 - 65 years"));
    }

    #[test]
    fn marked_card_carries_compare_tag() {
        let policy = &catalog::builtin()[0];
        let mut context = ctx(COLLAPSED_HEIGHT);
        context.marked = true;
        let text = text_of(&CardDelegate.render(policy, context)).join("\n");
        assert!(text.contains("[✓ compare]"));
    }

    #[test]
    fn clip_respects_display_width() {
        assert_eq!(clip("hello", 3), "hel");
        assert_eq!(clip("hello", 10), "hello");
        assert_eq!(clip("", 5), "");
    }
}
