//! Plan listing, detail, upgrade and savings commands

use clap::Args;
use folio_core::catalog::{self, features_for};
use folio_core::{Config, Money, Plan, PlanId, PlanKind};
use serde::Serialize;

use super::{money, price_label, resolve_plan};

/// List all plans in display order
#[derive(Args, Debug)]
pub struct PlansArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl PlansArgs {
    /// Execute the plans command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let plans = catalog::all_plans();

        if self.json {
            println!("{}", serde_json::to_string_pretty(plans)?);
            return Ok(());
        }

        let period = config.display.period;
        println!("Plans ({} billing):", period);
        println!();

        for plan in plans {
            let mut flags = Vec::new();
            if plan.kind() == PlanKind::AddOn {
                flags.push("add-on");
            }
            if plan.popular {
                flags.push("popular");
            }
            if plan.recommended {
                flags.push("recommended");
            }

            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };

            println!(
                "  {:<10} {:<28}{}",
                plan.id,
                price_label(plan, period, config),
                flags
            );
            println!("             {}", plan.subtitle);
        }

        Ok(())
    }
}

/// Show one plan in detail
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Plan id (starter, standard, pro, tax-pack)
    id: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PlanDetail {
    #[serde(flatten)]
    plan: &'static Plan,
    kind: PlanKind,
    savings_amount: Money,
    annual_discount_percent: u8,
    upgrade_path: Vec<PlanId>,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let plan = resolve_plan(&self.id)?;
        let upgrades = catalog::upgrade_path(plan.id.as_str());

        if self.json {
            let detail = PlanDetail {
                plan,
                kind: plan.kind(),
                savings_amount: plan.savings_amount(),
                annual_discount_percent: plan.annual_discount_percent(),
                upgrade_path: upgrades.iter().map(|p| p.id).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&detail)?);
            return Ok(());
        }

        println!("{}", plan.name);
        if let Some(badge) = plan.badge {
            println!("  [{}]", badge);
        }
        println!("  {}", plan.subtitle);
        println!();
        println!(
            "  Monthly: {}",
            price_label(plan, folio_core::BillingPeriod::Monthly, config)
        );
        println!(
            "  Annual:  {}",
            price_label(plan, folio_core::BillingPeriod::Annual, config)
        );
        if !plan.savings_amount().is_zero() {
            println!(
                "  Annual billing saves {} ({}%), about {}/mo",
                money(plan.savings_amount(), config),
                plan.annual_discount_percent(),
                money(plan.effective_monthly_on_annual(), config)
            );
        }
        println!();

        println!("  Features:");
        for feature in plan.features {
            println!("    - {}", feature);
        }

        let comparison = features_for(plan.id.as_str());
        if !comparison.is_empty() {
            println!();
            println!("  Comparison:");
            for (feature, value) in comparison {
                println!("    {:<24} {}", feature, value);
            }
        }

        if let Some(cta) = plan.cta {
            println!();
            println!("  > {}", cta);
        }

        match plan.kind() {
            PlanKind::AddOn => {
                println!();
                println!("  Add-on: can be bought with any tier.");
            }
            PlanKind::Tier if !upgrades.is_empty() => {
                let names: Vec<&str> = upgrades.iter().map(|p| p.name).collect();
                println!();
                println!("  Upgrades: {}", names.join(" → "));
            }
            PlanKind::Tier => {}
        }

        Ok(())
    }
}

/// Show the tiers above a plan
#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Current plan id
    id: String,
}

impl UpgradeArgs {
    /// Execute the upgrade command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let plan = resolve_plan(&self.id)?;
        let upgrades = catalog::upgrade_path(plan.id.as_str());

        if upgrades.is_empty() {
            match plan.kind() {
                PlanKind::AddOn => println!(
                    "{} is an add-on and sits outside the upgrade path.",
                    plan.name
                ),
                PlanKind::Tier => println!("{} is already the top tier.", plan.name),
            }
            return Ok(());
        }

        let period = config.display.period;
        println!("Upgrades from {}:", plan.name);
        for upgrade in upgrades {
            let difference = upgrade.price(period) - plan.price(period);
            println!(
                "  {:<10} {:<28} (+{}{})",
                upgrade.name,
                price_label(upgrade, period, config),
                money(difference, config),
                period.suffix()
            );
        }

        Ok(())
    }
}

/// Show how much annual billing saves
#[derive(Args, Debug)]
pub struct SavingsArgs {
    /// Plan id; all plans when omitted
    id: Option<String>,
}

impl SavingsArgs {
    /// Execute the savings command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let plans: Vec<&Plan> = match &self.id {
            Some(id) => vec![resolve_plan(id)?],
            None => catalog::all_plans().iter().collect(),
        };

        for plan in plans {
            let savings = catalog::savings_amount(plan.id.as_str());
            if savings.is_zero() {
                println!("  {:<10} no annual discount", plan.name);
            } else {
                println!(
                    "  {:<10} save {}/year ({} × 12 − {})",
                    plan.name,
                    money(savings, config),
                    money(plan.monthly_price, config),
                    money(plan.annual_price, config)
                );
            }
        }

        Ok(())
    }
}
