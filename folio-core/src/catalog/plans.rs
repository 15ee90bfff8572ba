//! Subscription plans
//!
//! The plan table is authored by hand. Monthly and annual prices are
//! independent literals; the "one month free when paying annually" rule is a
//! convention checked by [`validate_catalog`](super::validate_catalog), not
//! something derived here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::{BillingPeriod, Money};
use crate::Error;

/// Discount shown to founding members, as a percentage of the published price
pub const FOUNDING_MEMBER_DISCOUNT_PERCENT: u8 = 50;

/// Identifier of a purchasable plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanId {
    Starter,
    Standard,
    Pro,
    TaxPack,
}

/// Whether a plan is a rung on the upgrade ladder or a bolt-on bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanKind {
    /// Subscription level with a strict upgrade order
    Tier,
    /// Bundle bought alongside a tier; never part of the upgrade path
    AddOn,
}

impl PlanId {
    /// Every plan id, in display order
    pub const ALL: [PlanId; 4] = [
        PlanId::Starter,
        PlanId::Standard,
        PlanId::Pro,
        PlanId::TaxPack,
    ];

    /// The identifier as it appears in URLs and config
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Starter => "starter",
            PlanId::Standard => "standard",
            PlanId::Pro => "pro",
            PlanId::TaxPack => "tax-pack",
        }
    }

    /// Exact, case-sensitive lookup of an identifier
    pub fn from_id(id: &str) -> Option<PlanId> {
        PlanId::ALL.into_iter().find(|p| p.as_str() == id)
    }

    pub fn kind(&self) -> PlanKind {
        match self {
            PlanId::Starter | PlanId::Standard | PlanId::Pro => PlanKind::Tier,
            PlanId::TaxPack => PlanKind::AddOn,
        }
    }

    /// Position in the upgrade order `starter < standard < pro`
    ///
    /// Add-ons have no rank.
    pub fn tier_rank(&self) -> Option<u8> {
        match self {
            PlanId::Starter => Some(0),
            PlanId::Standard => Some(1),
            PlanId::Pro => Some(2),
            PlanId::TaxPack => None,
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for PlanId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "taxpack" | "tax" => Ok(PlanId::TaxPack),
            other => PlanId::from_id(other).ok_or_else(|| Error::UnknownPlan(s.to_string())),
        }
    }
}

/// One purchasable plan as shown on the pricing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub monthly_price: Money,
    /// Authored separately from `monthly_price`
    pub annual_price: Money,
    pub badge: Option<&'static str>,
    /// Marketing text describing the annual saving
    pub savings: Option<&'static str>,
    /// Color token used by the card renderer
    pub color: &'static str,
    /// Gradient token used by the card renderer
    pub gradient: &'static str,
    pub features: &'static [&'static str],
    pub cta: Option<&'static str>,
    pub recommended: bool,
    pub popular: bool,
}

impl Plan {
    pub fn kind(&self) -> PlanKind {
        self.id.kind()
    }

    /// Published price for a billing period
    pub fn price(&self, period: BillingPeriod) -> Money {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Annual => self.annual_price,
        }
    }

    /// `monthly × 12 − annual`
    pub fn savings_amount(&self) -> Money {
        self.monthly_price * 12 - self.annual_price
    }

    /// Whole percent saved by paying annually, rounded down
    pub fn annual_discount_percent(&self) -> u8 {
        let full_year = (self.monthly_price * 12).cents();
        if full_year <= 0 {
            return 0;
        }
        let percent = self.savings_amount().cents().saturating_mul(100) / full_year;
        percent.clamp(0, 100) as u8
    }

    /// Annual price spread over twelve months, rounded to the nearest cent
    pub fn effective_monthly_on_annual(&self) -> Money {
        let cents = self.annual_price.cents();
        Money::from_cents(cents.saturating_add(6 * cents.signum()) / 12)
    }

    /// Price with the founding member discount applied
    pub fn founding_member_price(&self, period: BillingPeriod) -> Money {
        self.price(period).percent_off(FOUNDING_MEMBER_DISCOUNT_PERCENT)
    }

    pub fn is_free(&self) -> bool {
        self.monthly_price.is_zero() && self.annual_price.is_zero()
    }
}

/// All plans, in display order
pub static PLANS: [Plan; 4] = [
    Plan {
        id: PlanId::Starter,
        name: "Starter",
        subtitle: "Track your first portfolio for free",
        monthly_price: Money::from_dollars(0),
        annual_price: Money::from_dollars(0),
        badge: None,
        savings: None,
        color: "slate",
        gradient: "from-slate-500 to-slate-700",
        features: &[
            "1 portfolio",
            "Up to 2 connected accounts",
            "Daily price updates",
            "Basic performance dashboard",
            "Community forum access",
        ],
        cta: Some("Get started free"),
        recommended: false,
        popular: false,
    },
    Plan {
        id: PlanId::Standard,
        name: "Standard",
        subtitle: "Everything an active investor needs",
        monthly_price: Money::from_dollars(10),
        annual_price: Money::from_dollars(110),
        badge: Some("Most popular"),
        savings: Some("Save $10/year"),
        color: "blue",
        gradient: "from-blue-500 to-indigo-600",
        features: &[
            "Unlimited portfolios",
            "Up to 10 connected accounts",
            "Real-time price updates",
            "Dividend tracking and forecasts",
            "Asset allocation breakdown",
            "Email support",
        ],
        cta: Some("Start Standard"),
        recommended: false,
        popular: true,
    },
    Plan {
        id: PlanId::Pro,
        name: "Pro",
        subtitle: "Advanced analytics for serious portfolios",
        monthly_price: Money::from_dollars(20),
        annual_price: Money::from_dollars(220),
        badge: Some("Best value"),
        savings: Some("Save $20/year"),
        color: "violet",
        gradient: "from-violet-500 to-fuchsia-600",
        features: &[
            "Everything in Standard",
            "Unlimited connected accounts",
            "Benchmark comparison and risk metrics",
            "Custom price alerts",
            "Data export (CSV and API)",
            "Priority support",
        ],
        cta: Some("Go Pro"),
        recommended: true,
        popular: false,
    },
    Plan {
        id: PlanId::TaxPack,
        name: "Tax Pack",
        subtitle: "Capital gains reports at tax time",
        monthly_price: Money::from_dollars(3),
        annual_price: Money::from_dollars(30),
        badge: Some("Add-on"),
        savings: Some("Save $6/year"),
        color: "emerald",
        gradient: "from-emerald-500 to-teal-600",
        features: &[
            "Realized capital gains report",
            "Cost basis tracking (FIFO and specific lot)",
            "Wash sale detection",
            "Export for tax software",
        ],
        cta: Some("Add Tax Pack"),
        recommended: false,
        popular: false,
    },
];

/// Look up a plan by id
///
/// Returns `None` for unknown ids; the match is exact.
pub fn get_plan(id: &str) -> Option<&'static Plan> {
    let plan = PLANS.iter().find(|p| p.id.as_str() == id);
    if plan.is_none() {
        tracing::debug!(id, "Plan not found");
    }
    plan
}

/// Look up a plan by typed id
pub fn plan(id: PlanId) -> &'static Plan {
    match id {
        PlanId::Starter => &PLANS[0],
        PlanId::Standard => &PLANS[1],
        PlanId::Pro => &PLANS[2],
        PlanId::TaxPack => &PLANS[3],
    }
}

/// All plans in display order (Starter, Standard, Pro, Tax Pack)
pub fn all_plans() -> &'static [Plan] {
    &PLANS
}

/// Resolve a list of ids, dropping the ones that do not exist
pub fn plans_by_tier<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Plan> {
    ids.iter().filter_map(|id| get_plan(id.as_ref())).collect()
}

/// Tier plans in upgrade order
pub fn tiers() -> Vec<&'static Plan> {
    let mut tiers: Vec<&'static Plan> = PLANS
        .iter()
        .filter(|p| p.kind() == PlanKind::Tier)
        .collect();
    tiers.sort_by_key(|p| p.id.tier_rank());
    tiers
}

/// Add-on plans in display order
pub fn add_ons() -> Vec<&'static Plan> {
    PLANS
        .iter()
        .filter(|p| p.kind() == PlanKind::AddOn)
        .collect()
}

/// Tiers strictly above `current_id`, lowest first
///
/// Empty for the top tier, for add-ons and for unknown ids.
pub fn upgrade_path(current_id: &str) -> Vec<&'static Plan> {
    let Some(current_rank) = PlanId::from_id(current_id).and_then(|id| id.tier_rank()) else {
        return Vec::new();
    };

    tiers()
        .into_iter()
        .filter(|p| p.id.tier_rank().is_some_and(|rank| rank > current_rank))
        .collect()
}

/// Monthly price, or zero when the id is unknown
pub fn monthly_price(id: &str) -> Money {
    try_monthly_price(id).unwrap_or(Money::ZERO)
}

/// Annual price, or zero when the id is unknown
pub fn annual_price(id: &str) -> Money {
    try_annual_price(id).unwrap_or(Money::ZERO)
}

/// Monthly price, `None` when the id is unknown
pub fn try_monthly_price(id: &str) -> Option<Money> {
    get_plan(id).map(|p| p.monthly_price)
}

/// Annual price, `None` when the id is unknown
pub fn try_annual_price(id: &str) -> Option<Money> {
    get_plan(id).map(|p| p.annual_price)
}

pub fn price_for(id: &str, period: BillingPeriod) -> Option<Money> {
    get_plan(id).map(|p| p.price(period))
}

/// Amount saved per year by paying annually, zero for unknown ids
pub fn savings_amount(id: &str) -> Money {
    get_plan(id).map(Plan::savings_amount).unwrap_or(Money::ZERO)
}

pub fn founding_member_price(id: &str, period: BillingPeriod) -> Option<Money> {
    get_plan(id).map(|p| p.founding_member_price(period))
}

/// The plan flagged as recommended, if any
pub fn recommended_plan() -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.recommended)
}

/// The plan flagged as most popular, if any
pub fn popular_plan() -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.popular)
}
