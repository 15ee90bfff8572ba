//! Folio CLI - Command line interface for the Folio pricing catalog
//!
//! Renders plans, the feature comparison and the FAQ as the pricing pages
//! show them.

mod commands;

use clap::{Parser, Subcommand};
use folio_core::{BillingPeriod, CliOverrides, Config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, CompareArgs, FaqArgs, PlanArgs, PlansArgs, SavingsArgs, UpgradeArgs};

/// Folio: browse subscription plans, features and FAQs
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Currency symbol for prices (overrides config and FOLIO_CURRENCY_SYMBOL)
    #[arg(long, global = true)]
    currency_symbol: Option<String>,

    /// Billing period to show: monthly or annual (overrides config and FOLIO_PERIOD)
    #[arg(long, global = true)]
    period: Option<BillingPeriod>,

    /// Show founding member prices
    #[arg(long, global = true)]
    founding: bool,

    /// Hide founding member prices even if the config enables them
    #[arg(long, global = true, conflicts_with = "founding")]
    no_founding: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// List all plans in display order
    #[command(visible_alias = "ls")]
    Plans(PlansArgs),

    /// Show one plan in detail
    Plan(PlanArgs),

    /// Show the tiers above a plan
    Upgrade(UpgradeArgs),

    /// Show how much annual billing saves
    Savings(SavingsArgs),

    /// Show the feature comparison table
    Compare(CompareArgs),

    /// List frequently asked questions
    Faq(FaqArgs),

    /// Check the catalog for inconsistencies
    Check(CheckArgs),

    /// Show current configuration
    Config,
}

impl Cli {
    /// Values from the command line that take precedence over config and env
    fn overrides(&self) -> CliOverrides {
        let founding_member = if self.founding {
            Some(true)
        } else if self.no_founding {
            Some(false)
        } else {
            None
        };

        CliOverrides {
            currency_symbol: self.currency_symbol.clone(),
            period: self.period,
            founding_member,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.overrides())?;

    if cli.verbose {
        tracing::info!(
            currency_symbol = %config.display.currency_symbol,
            period = %config.display.period,
            founding_member = config.display.founding_member,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Plans(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Plan(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Upgrade(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Savings(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Compare(args)) => {
            args.execute()?;
        }
        Some(Commands::Faq(args)) => {
            args.execute(cli.verbose)?;
        }
        Some(Commands::Check(args)) => {
            args.execute()?;
        }
        Some(Commands::Config) => {
            println!("Folio Configuration");
            println!("===================");
            println!();
            println!("Display Settings:");
            println!("  currency_symbol: {}", config.display.currency_symbol);
            println!("  period: {}", config.display.period);
            println!("  founding_member: {}", config.display.founding_member);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Folio - plans, features and FAQs for the Folio portfolio tracker");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_env_does_not_break_parsing() {
        // FOLIO_PERIOD is read by Config, which ignores bad values with a warning
        std::env::set_var("FOLIO_PERIOD", "fortnightly");
        let cli = Cli::try_parse_from(["folio", "plans"]);
        std::env::remove_var("FOLIO_PERIOD");

        let cli = cli.unwrap();
        assert!(cli.period.is_none());
        assert!(matches!(cli.command, Some(Commands::Plans(_))));
    }

    #[test]
    fn test_period_flag() {
        let cli = Cli::try_parse_from(["folio", "plans", "--period", "annual"]).unwrap();
        assert_eq!(cli.overrides().period, Some(BillingPeriod::Annual));

        assert!(Cli::try_parse_from(["folio", "plans", "--period", "weekly"]).is_err());
    }

    #[test]
    fn test_founding_overrides() {
        let cli = Cli::try_parse_from(["folio", "plans"]).unwrap();
        assert_eq!(cli.overrides().founding_member, None);

        let cli = Cli::try_parse_from(["folio", "--founding", "plans"]).unwrap();
        assert_eq!(cli.overrides().founding_member, Some(true));

        let cli = Cli::try_parse_from(["folio", "plans", "--no-founding"]).unwrap();
        assert_eq!(cli.overrides().founding_member, Some(false));

        assert!(Cli::try_parse_from(["folio", "--founding", "--no-founding"]).is_err());
    }

    #[test]
    fn test_cli_founding_off_beats_config_file() {
        let cli = Cli::try_parse_from(["folio", "--no-founding", "plans"]).unwrap();
        let mut config = Config::default();
        config.display.founding_member = true;

        let config = config.with_cli_overrides(cli.overrides());
        assert!(!config.display.founding_member);
    }
}
