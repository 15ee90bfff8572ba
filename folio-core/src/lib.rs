//! Folio Core - Pricing catalog for the Folio portfolio tracker
//!
//! This crate holds the plan definitions, feature comparison matrix and FAQ
//! that the pricing pages render, along with the pure queries over them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod money;

pub use catalog::{
    all_plans, get_plan, savings_amount, upgrade_path, validate_catalog, FeatureValue, Plan,
    PlanId, PlanKind,
};
pub use config::{CliOverrides, Config};
pub use error::{Error, Result};
pub use money::{BillingPeriod, Money};
