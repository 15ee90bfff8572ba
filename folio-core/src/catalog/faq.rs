//! Frequently asked questions

use serde::Serialize;

use super::plans::PlanId;

/// A question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
    /// Plans this answer is about; empty for general questions
    pub plans: &'static [PlanId],
}

impl Faq {
    pub fn is_general(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn mentions(&self, id: PlanId) -> bool {
        self.plans.contains(&id)
    }
}

pub static FAQS: [Faq; 10] = [
    Faq {
        id: "what-is-folio",
        question: "What does Folio track?",
        answer: "Folio pulls holdings and transactions from your brokerage and bank \
                 accounts and shows performance, allocation and dividends in one place.",
        category: "General",
        plans: &[],
    },
    Faq {
        id: "is-starter-free",
        question: "Is the Starter plan really free?",
        answer: "Yes. Starter has no time limit and needs no card. It covers one \
                 portfolio with up to two connected accounts.",
        category: "Plans",
        plans: &[PlanId::Starter],
    },
    Faq {
        id: "standard-vs-pro",
        question: "What is the difference between Standard and Pro?",
        answer: "Standard covers unlimited portfolios with real-time prices and dividend \
                 tracking. Pro adds benchmark comparison, risk metrics, custom alerts and \
                 API export.",
        category: "Plans",
        plans: &[PlanId::Standard, PlanId::Pro],
    },
    Faq {
        id: "change-plan",
        question: "Can I upgrade or downgrade at any time?",
        answer: "Yes. Upgrades apply immediately and are prorated. Downgrades take effect \
                 at the end of the current billing period.",
        category: "Billing",
        plans: &[PlanId::Starter, PlanId::Standard, PlanId::Pro],
    },
    Faq {
        id: "annual-billing",
        question: "How much do I save with annual billing?",
        answer: "Annual billing gives you one month free: Standard is $110/year instead \
                 of $120 and Pro is $220/year instead of $240.",
        category: "Billing",
        plans: &[PlanId::Standard, PlanId::Pro],
    },
    Faq {
        id: "founding-members",
        question: "What is founding member pricing?",
        answer: "Early subscribers keep 50% off the published price for as long as their \
                 subscription stays active.",
        category: "Billing",
        plans: &[PlanId::Standard, PlanId::Pro],
    },
    Faq {
        id: "tax-pack-what",
        question: "What is the Tax Pack?",
        answer: "An add-on that produces capital gains reports, tracks cost basis and \
                 flags wash sales. It works with any plan, including Starter.",
        category: "Tax",
        plans: &[PlanId::TaxPack],
    },
    Faq {
        id: "tax-pack-price",
        question: "How is the Tax Pack billed?",
        answer: "The Tax Pack is $30/year or $3/month, billed separately from your plan.",
        category: "Tax",
        plans: &[PlanId::TaxPack],
    },
    Faq {
        id: "data-security",
        question: "Is my account data secure?",
        answer: "Connections are read-only. Folio never stores brokerage passwords and \
                 cannot place trades or move money.",
        category: "Security",
        plans: &[],
    },
    Faq {
        id: "cancel",
        question: "How do I cancel?",
        answer: "Cancel from account settings. You keep paid features until the end of \
                 the period you already paid for.",
        category: "Billing",
        plans: &[],
    },
];

pub fn all_faqs() -> &'static [Faq] {
    &FAQS
}

pub fn get_faq(id: &str) -> Option<&'static Faq> {
    FAQS.iter().find(|f| f.id == id)
}

/// FAQs in a category, ignoring case
pub fn faqs_by_category(category: &str) -> Vec<&'static Faq> {
    let category = category.trim();
    FAQS.iter()
        .filter(|f| f.category.eq_ignore_ascii_case(category))
        .collect()
}

/// FAQs relevant to a plan; empty for unknown ids
pub fn faqs_for_plan(plan_id: &str) -> Vec<&'static Faq> {
    match PlanId::from_id(plan_id) {
        Some(id) => FAQS.iter().filter(|f| f.mentions(id)).collect(),
        None => {
            tracing::debug!(plan_id, "No FAQs for unknown plan");
            Vec::new()
        }
    }
}

/// Distinct categories in the order they first appear
pub fn faq_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for faq in FAQS.iter() {
        if !categories.contains(&faq.category) {
            categories.push(faq.category);
        }
    }
    categories
}

/// Case-insensitive substring search over questions and answers
pub fn search_faqs(term: &str) -> Vec<&'static Faq> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    FAQS.iter()
        .filter(|f| {
            f.question.to_lowercase().contains(&term) || f.answer.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_faq() {
        let faq = get_faq("tax-pack-what").unwrap();
        assert_eq!(faq.category, "Tax");
        assert!(get_faq("missing").is_none());
    }

    #[test]
    fn test_faqs_for_plan() {
        let tax: Vec<&str> = faqs_for_plan("tax-pack").iter().map(|f| f.id).collect();
        assert_eq!(tax, vec!["tax-pack-what", "tax-pack-price"]);

        let pro = faqs_for_plan("pro");
        assert!(pro.iter().all(|f| f.mentions(PlanId::Pro)));
        assert!(pro.iter().any(|f| f.id == "standard-vs-pro"));

        assert!(faqs_for_plan("nonexistent").is_empty());
    }

    #[test]
    fn test_general_faqs_not_tied_to_plans() {
        let general = get_faq("data-security").unwrap();
        assert!(general.is_general());
        for id in PlanId::ALL {
            assert!(!faqs_for_plan(id.as_str()).contains(&general));
        }
    }

    #[test]
    fn test_faqs_by_category() {
        let billing = faqs_by_category("billing");
        assert_eq!(billing.len(), 4);
        assert!(billing.iter().all(|f| f.category == "Billing"));
        assert!(faqs_by_category("Nope").is_empty());
    }

    #[test]
    fn test_categories_first_appearance() {
        assert_eq!(
            faq_categories(),
            vec!["General", "Plans", "Billing", "Tax", "Security"]
        );
    }

    #[test]
    fn test_search() {
        let hits: Vec<&str> = search_faqs("WASH SALES").iter().map(|f| f.id).collect();
        assert_eq!(hits, vec!["tax-pack-what"]);
        assert!(search_faqs("   ").is_empty());
        assert!(search_faqs("cryptocurrency staking").is_empty());
    }
}
