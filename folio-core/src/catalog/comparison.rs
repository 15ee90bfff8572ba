//! Feature comparison table
//!
//! Each row states, per tier, whether a feature is included or gives a short
//! label such as "Unlimited". The Tax Pack add-on has no column; features it
//! sells are listed here as not included on any tier.

use serde::Serialize;
use std::fmt;

use super::plans::PlanId;
use FeatureValue::{Included, Label};

/// One cell of the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Plain yes/no availability
    Included(bool),
    /// Descriptive value, e.g. "Unlimited" or "Daily"
    Label(&'static str),
}

impl FeatureValue {
    /// Whether the feature is available at all on this tier
    pub fn is_available(&self) -> bool {
        match self {
            FeatureValue::Included(included) => *included,
            FeatureValue::Label(_) => true,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Included(true) => write!(f, "✓"),
            FeatureValue::Included(false) => write!(f, "—"),
            FeatureValue::Label(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureComparisonRow {
    pub feature: &'static str,
    pub starter: FeatureValue,
    pub standard: FeatureValue,
    pub pro: FeatureValue,
}

impl FeatureComparisonRow {
    /// The cell for a plan; `None` for add-ons, which have no column
    pub fn value_for(&self, id: PlanId) -> Option<&FeatureValue> {
        match id {
            PlanId::Starter => Some(&self.starter),
            PlanId::Standard => Some(&self.standard),
            PlanId::Pro => Some(&self.pro),
            PlanId::TaxPack => None,
        }
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonCategory {
    pub name: &'static str,
    pub rows: &'static [FeatureComparisonRow],
}

pub static COMPARISON: [ComparisonCategory; 4] = [
    ComparisonCategory {
        name: "Tracking",
        rows: &[
            FeatureComparisonRow {
                feature: "Portfolios",
                starter: Label("1"),
                standard: Label("Unlimited"),
                pro: Label("Unlimited"),
            },
            FeatureComparisonRow {
                feature: "Connected accounts",
                starter: Label("2"),
                standard: Label("10"),
                pro: Label("Unlimited"),
            },
            FeatureComparisonRow {
                feature: "Price updates",
                starter: Label("Daily"),
                standard: Label("Real-time"),
                pro: Label("Real-time"),
            },
            FeatureComparisonRow {
                feature: "Dividend tracking",
                starter: Included(false),
                standard: Included(true),
                pro: Included(true),
            },
        ],
    },
    ComparisonCategory {
        name: "Analytics",
        rows: &[
            FeatureComparisonRow {
                feature: "Performance dashboard",
                starter: Label("Basic"),
                standard: Label("Full"),
                pro: Label("Full"),
            },
            FeatureComparisonRow {
                feature: "Asset allocation",
                starter: Included(false),
                standard: Included(true),
                pro: Included(true),
            },
            FeatureComparisonRow {
                feature: "Benchmark comparison",
                starter: Included(false),
                standard: Included(false),
                pro: Included(true),
            },
            FeatureComparisonRow {
                feature: "Risk metrics",
                starter: Included(false),
                standard: Included(false),
                pro: Included(true),
            },
        ],
    },
    ComparisonCategory {
        name: "Tax",
        rows: &[
            FeatureComparisonRow {
                feature: "Capital gains report",
                starter: Included(false),
                standard: Included(false),
                pro: Included(false),
            },
            FeatureComparisonRow {
                feature: "Cost basis tracking",
                starter: Included(false),
                standard: Included(false),
                pro: Included(false),
            },
        ],
    },
    ComparisonCategory {
        name: "Support",
        rows: &[
            FeatureComparisonRow {
                feature: "Community forum",
                starter: Included(true),
                standard: Included(true),
                pro: Included(true),
            },
            FeatureComparisonRow {
                feature: "Email support",
                starter: Included(false),
                standard: Included(true),
                pro: Included(true),
            },
            FeatureComparisonRow {
                feature: "Priority support",
                starter: Included(false),
                standard: Included(false),
                pro: Included(true),
            },
            FeatureComparisonRow {
                feature: "Data export",
                starter: Included(false),
                standard: Label("CSV"),
                pro: Label("CSV and API"),
            },
        ],
    },
];

pub fn comparison() -> &'static [ComparisonCategory] {
    &COMPARISON
}

/// Find a category by name, ignoring case
pub fn category(name: &str) -> Option<&'static ComparisonCategory> {
    COMPARISON
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

/// Every feature with its value for one tier
///
/// Empty for add-ons and unknown ids.
pub fn features_for(id: &str) -> Vec<(&'static str, &'static FeatureValue)> {
    let Some(plan_id) = PlanId::from_id(id) else {
        return Vec::new();
    };

    COMPARISON
        .iter()
        .flat_map(|c| c.rows.iter())
        .filter_map(|row| row.value_for(plan_id).map(|value| (row.feature, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::FeatureValue::{Included, Label};
    use super::*;

    #[test]
    fn test_feature_value_display() {
        assert_eq!(Included(true).to_string(), "✓");
        assert_eq!(Included(false).to_string(), "—");
        assert_eq!(Label("Unlimited").to_string(), "Unlimited");
    }

    #[test]
    fn test_is_available() {
        assert!(Included(true).is_available());
        assert!(!Included(false).is_available());
        assert!(Label("$30/year").is_available());
    }

    #[test]
    fn test_value_for_add_on_is_none() {
        let row = &COMPARISON[0].rows[0];
        assert!(row.value_for(PlanId::TaxPack).is_none());
        assert_eq!(row.value_for(PlanId::Pro), Some(&Label("Unlimited")));
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category("analytics").map(|c| c.name), Some("Analytics"));
        assert!(category("billing").is_none());
    }

    #[test]
    fn test_features_for() {
        let total_rows: usize = comparison().iter().map(|c| c.rows.len()).sum();
        let pro = features_for("pro");
        assert_eq!(pro.len(), total_rows);
        assert!(pro
            .iter()
            .any(|(feature, value)| *feature == "Risk metrics" && value.is_available()));

        let starter = features_for("starter");
        assert!(starter
            .iter()
            .any(|(feature, value)| *feature == "Risk metrics" && !value.is_available()));

        assert!(features_for("tax-pack").is_empty());
        assert!(features_for("nonexistent").is_empty());
    }

    #[test]
    fn test_higher_tiers_never_lose_features() {
        for row in comparison().iter().flat_map(|c| c.rows.iter()) {
            if row.starter.is_available() {
                assert!(row.standard.is_available(), "{}", row.feature);
            }
            if row.standard.is_available() {
                assert!(row.pro.is_available(), "{}", row.feature);
            }
        }
    }

    #[test]
    fn test_tax_pack_features_not_included_in_tiers() {
        let tax_pack = crate::catalog::plan(PlanId::TaxPack);
        let tax = category("Tax").unwrap();
        for row in tax.rows {
            let feature = row.feature.to_lowercase();
            assert!(
                tax_pack
                    .features
                    .iter()
                    .any(|f| f.to_lowercase().contains(&feature)),
                "{} is not sold by the Tax Pack",
                row.feature
            );
            for id in [PlanId::Starter, PlanId::Standard, PlanId::Pro] {
                assert!(!row.value_for(id).unwrap().is_available(), "{}", row.feature);
            }
        }

        let starter = features_for("starter");
        assert!(starter
            .iter()
            .any(|(feature, value)| *feature == "Capital gains report" && !value.is_available()));
    }

    #[test]
    fn test_serializes_untagged() {
        let json = serde_json::to_value(&COMPARISON[3].rows[3]).unwrap();
        assert_eq!(json["starter"], false);
        assert_eq!(json["pro"], "CSV and API");
    }
}
