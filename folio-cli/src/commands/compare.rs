//! Feature comparison command

use clap::Args;
use folio_core::catalog::{self, ComparisonCategory};
use folio_core::PlanId;

/// Show the feature comparison table
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Only show one category (e.g. "Analytics")
    #[arg(short, long)]
    category: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> anyhow::Result<()> {
        let categories: Vec<&ComparisonCategory> = match &self.category {
            Some(name) => {
                let category = catalog::category(name).ok_or_else(|| {
                    let known: Vec<&str> = catalog::comparison().iter().map(|c| c.name).collect();
                    anyhow::anyhow!(
                        "Unknown category '{}'. Available: {}",
                        name,
                        known.join(", ")
                    )
                })?;
                vec![category]
            }
            None => catalog::comparison().iter().collect(),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&categories)?);
            return Ok(());
        }

        let tiers = catalog::tiers();
        let width = categories
            .iter()
            .flat_map(|c| c.rows.iter())
            .map(|r| r.feature.chars().count())
            .max()
            .unwrap_or(0)
            .max(8);

        print!("{:<width$}", "", width = width + 2);
        for tier in &tiers {
            print!("  {:<12}", tier.name);
        }
        println!();

        for category in categories {
            println!();
            println!("{}", category.name);
            for row in category.rows {
                print!("  {:<width$}", row.feature, width = width);
                for tier in &tiers {
                    let cell = row
                        .value_for(tier.id)
                        .map(|v| v.to_string())
                        .unwrap_or_default();
                    print!("  {:<12}", cell);
                }
                println!();
            }
        }

        println!();
        println!(
            "{} is an add-on available with every tier.",
            catalog::plan(PlanId::TaxPack).name
        );

        Ok(())
    }
}
