//! Catalog consistency check command

use clap::Args;
use folio_core::validate_catalog;

/// Check the catalog for inconsistencies
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> anyhow::Result<()> {
        let report = validate_catalog();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if report.is_clean() {
            println!("Catalog OK");
        } else {
            for issue in &report.issues {
                println!("  {}", issue);
            }
        }

        if report.has_errors() {
            anyhow::bail!(
                "Catalog check failed with {} error(s)",
                report.errors().count()
            );
        }

        Ok(())
    }
}
