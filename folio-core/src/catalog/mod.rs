//! Pricing catalog
//!
//! Static tables for plans, the feature comparison matrix and the FAQ, with
//! pure queries over them. Every query is total: unknown ids yield `None`,
//! an empty list or a zero amount.

mod comparison;
mod faq;
mod plans;
mod validate;

pub use comparison::{
    category, comparison, features_for, ComparisonCategory, FeatureComparisonRow, FeatureValue,
    COMPARISON,
};
pub use faq::{
    all_faqs, faq_categories, faqs_by_category, faqs_for_plan, get_faq, search_faqs, Faq, FAQS,
};
pub use plans::{
    add_ons, all_plans, annual_price, founding_member_price, get_plan, monthly_price, plan,
    plans_by_tier, popular_plan, price_for, recommended_plan, savings_amount, tiers,
    try_annual_price, try_monthly_price, upgrade_path, Plan, PlanId, PlanKind,
    FOUNDING_MEMBER_DISCOUNT_PERCENT, PLANS,
};
pub use validate::{validate, validate_catalog, CatalogIssue, Severity, ValidationReport};
