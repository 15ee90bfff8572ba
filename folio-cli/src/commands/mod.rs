//! CLI command implementations

pub mod check;
pub mod compare;
pub mod faq;
pub mod plans;

pub use check::CheckArgs;
pub use compare::CompareArgs;
pub use faq::FaqArgs;
pub use plans::{PlanArgs, PlansArgs, SavingsArgs, UpgradeArgs};

use folio_core::{BillingPeriod, Config, Money, Plan, PlanId};

/// Parse a plan id from the command line, reporting unknown ones
pub(crate) fn resolve_plan(id: &str) -> anyhow::Result<&'static Plan> {
    let plan_id: PlanId = id.parse()?;
    folio_core::get_plan(plan_id.as_str())
        .ok_or_else(|| anyhow::anyhow!("Plan '{}' not found", id))
}

/// Format an amount as `$10/mo`, appending the founding member price if enabled
pub(crate) fn price_label(plan: &Plan, period: BillingPeriod, config: &Config) -> String {
    let symbol = &config.display.currency_symbol;
    let price = plan.price(period);
    if price.is_zero() {
        return "Free".to_string();
    }

    let mut label = format!("{}{}", price.format_with(symbol), period.suffix());
    if config.display.founding_member {
        let founding = plan.founding_member_price(period);
        label.push_str(&format!(
            " (founding {}{})",
            founding.format_with(symbol),
            period.suffix()
        ));
    }
    label
}

pub(crate) fn money(amount: Money, config: &Config) -> String {
    amount.format_with(&config.display.currency_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plan() {
        assert_eq!(resolve_plan("Tax-Pack").unwrap().id, PlanId::TaxPack);
        assert!(resolve_plan("enterprise").is_err());
    }

    #[test]
    fn test_price_label() {
        let standard = resolve_plan("standard").unwrap();
        let starter = resolve_plan("starter").unwrap();
        let mut config = Config::default();

        assert_eq!(price_label(standard, BillingPeriod::Monthly, &config), "$10/mo");
        assert_eq!(price_label(standard, BillingPeriod::Annual, &config), "$110/yr");
        assert_eq!(price_label(starter, BillingPeriod::Annual, &config), "Free");

        config.display.founding_member = true;
        config.display.currency_symbol = "€".to_string();
        assert_eq!(
            price_label(standard, BillingPeriod::Monthly, &config),
            "€10/mo (founding €5/mo)"
        );
    }
}
