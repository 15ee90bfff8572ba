//! Consistency checks over the catalog tables
//!
//! The tables are hand-authored, so conventions such as "annual is never more
//! than twelve monthly payments" are only upheld by review. This module turns
//! them into a report that tests and the `check` command can act on.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use super::faq::{Faq, FAQS};
use super::plans::{Plan, PlanKind, PLANS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single problem found in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub severity: Severity,
    /// Plan or FAQ id the issue is about
    pub subject: String,
    pub message: String,
}

impl CatalogIssue {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.subject, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<CatalogIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Validate the built-in tables
pub fn validate_catalog() -> ValidationReport {
    validate(&PLANS, &FAQS)
}

/// Validate arbitrary plan and FAQ tables
pub fn validate(plans: &[Plan], faqs: &[Faq]) -> ValidationReport {
    let mut issues = Vec::new();

    let mut seen_plans = HashSet::new();
    for plan in plans {
        if !seen_plans.insert(plan.id) {
            issues.push(CatalogIssue::error(plan.id.as_str(), "duplicate plan id"));
        }

        if plan.annual_price > plan.monthly_price * 12 {
            issues.push(CatalogIssue::error(
                plan.id.as_str(),
                format!(
                    "annual price {} exceeds twelve monthly payments of {}",
                    plan.annual_price, plan.monthly_price
                ),
            ));
        } else if !plan.is_free() && plan.savings_amount().is_zero() {
            issues.push(CatalogIssue::warning(
                plan.id.as_str(),
                "annual billing gives no discount",
            ));
        }

        if plan.monthly_price.cents() < 0 || plan.annual_price.cents() < 0 {
            issues.push(CatalogIssue::error(plan.id.as_str(), "negative price"));
        }

        if plan.features.is_empty() {
            issues.push(CatalogIssue::warning(plan.id.as_str(), "no features listed"));
        }
    }

    // Tiers must be declared in upgrade order so cards render left to right
    let ranks: Vec<u8> = plans
        .iter()
        .filter(|p| p.kind() == PlanKind::Tier)
        .filter_map(|p| p.id.tier_rank())
        .collect();
    if ranks.windows(2).any(|w| w[0] >= w[1]) {
        issues.push(CatalogIssue::error(
            "plans",
            "tiers are not declared in upgrade order",
        ));
    }

    let recommended = plans.iter().filter(|p| p.recommended).count();
    if recommended > 1 {
        issues.push(CatalogIssue::error(
            "plans",
            format!("{} plans are marked recommended", recommended),
        ));
    }

    let mut seen_faqs = HashSet::new();
    for faq in faqs {
        if !seen_faqs.insert(faq.id) {
            issues.push(CatalogIssue::error(faq.id, "duplicate FAQ id"));
        }
        if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
            issues.push(CatalogIssue::error(faq.id, "empty question or answer"));
        }
    }

    for issue in &issues {
        tracing::warn!(
            severity = %issue.severity,
            subject = %issue.subject,
            "{}",
            issue.message
        );
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::plans::PlanId;
    use crate::money::Money;

    fn plan(id: PlanId, monthly: i64, annual: i64) -> Plan {
        Plan {
            id,
            name: "Test",
            subtitle: "",
            monthly_price: Money::from_dollars(monthly),
            annual_price: Money::from_dollars(annual),
            badge: None,
            savings: None,
            color: "gray",
            gradient: "",
            features: &["Something"],
            cta: None,
            recommended: false,
            popular: false,
        }
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let report = validate_catalog();
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn test_annual_above_twelve_months_is_error() {
        let report = validate(&[plan(PlanId::Standard, 10, 130)], &[]);
        assert!(report.has_errors());
        assert_eq!(report.errors().next().unwrap().subject, "standard");
    }

    #[test]
    fn test_no_discount_is_warning() {
        let report = validate(&[plan(PlanId::Standard, 10, 120)], &[]);
        assert!(!report.has_errors());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_duplicate_and_misordered_tiers() {
        let report = validate(
            &[
                plan(PlanId::Pro, 20, 220),
                plan(PlanId::Starter, 0, 0),
                plan(PlanId::Pro, 20, 220),
            ],
            &[],
        );
        let messages: Vec<&str> = report.errors().map(|i| i.message.as_str()).collect();
        assert!(messages.contains(&"duplicate plan id"));
        assert!(messages.contains(&"tiers are not declared in upgrade order"));
    }

    #[test]
    fn test_multiple_recommended() {
        let mut a = plan(PlanId::Standard, 10, 110);
        let mut b = plan(PlanId::Pro, 20, 220);
        a.recommended = true;
        b.recommended = true;
        let report = validate(&[a, b], &[]);
        assert!(report.has_errors());
    }

    #[test]
    fn test_duplicate_faq() {
        let faq = FAQS[0].clone();
        let report = validate(&[], &[faq.clone(), faq]);
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_add_on_ignored_for_tier_order() {
        let report = validate(
            &[
                plan(PlanId::TaxPack, 3, 30),
                plan(PlanId::Starter, 0, 0),
                plan(PlanId::Pro, 20, 220),
            ],
            &[],
        );
        assert!(!report.has_errors());
    }
}
