//! FAQ command

use clap::Args;
use folio_core::catalog::{self, Faq};

/// List frequently asked questions
#[derive(Args, Debug)]
pub struct FaqArgs {
    /// Only questions about this plan
    #[arg(short, long)]
    plan: Option<String>,

    /// Only questions in this category
    #[arg(short, long)]
    category: Option<String>,

    /// Only questions containing this text
    #[arg(short, long)]
    search: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl FaqArgs {
    /// Execute the faq command
    pub fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let mut faqs: Vec<&Faq> = match &self.plan {
            Some(id) => {
                let plan = super::resolve_plan(id)?;
                catalog::faqs_for_plan(plan.id.as_str())
            }
            None => catalog::all_faqs().iter().collect(),
        };

        if let Some(category) = &self.category {
            let in_category = catalog::faqs_by_category(category);
            faqs.retain(|f| in_category.contains(f));
        }

        if let Some(term) = &self.search {
            let hits = catalog::search_faqs(term);
            faqs.retain(|f| hits.contains(f));
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&faqs)?);
            return Ok(());
        }

        if faqs.is_empty() {
            println!("No matching questions.");
            if self.category.is_some() {
                println!(
                    "Categories: {}",
                    catalog::faq_categories().join(", ")
                );
            }
            return Ok(());
        }

        for category in catalog::faq_categories() {
            let in_category: Vec<&&Faq> = faqs.iter().filter(|f| f.category == category).collect();
            if in_category.is_empty() {
                continue;
            }

            println!("{}", category);
            println!();
            for faq in in_category {
                println!("  Q: {}", faq.question);
                println!("  A: {}", faq.answer);
                if verbose && !faq.is_general() {
                    let plans: Vec<&str> = faq.plans.iter().map(|p| p.as_str()).collect();
                    println!("     ({}; plans: {})", faq.id, plans.join(", "));
                }
                println!();
            }
        }

        Ok(())
    }
}
