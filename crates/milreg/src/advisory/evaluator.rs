use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::catalog::{RuleCatalog, RuleId};
use super::fact::FactRecord;

/// Returned alone when no rule fires.
pub const FALLBACK_MESSAGE: &str = "Додаткові рекомендації відсутні на основі введених даних.";

/// One fired rule and the message it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub rule: RuleId,
    pub message: String,
}

/// Result of a single evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryReport {
    pub revision: String,
    pub evaluated_on: NaiveDate,
    pub advisories: Vec<Advisory>,
}

impl AdvisoryReport {
    pub fn fired_rules(&self) -> Vec<RuleId> {
        self.advisories.iter().map(|advisory| advisory.rule).collect()
    }

    pub fn fired(&self, rule: RuleId) -> bool {
        self.advisories.iter().any(|advisory| advisory.rule == rule)
    }

    /// Messages in catalog order, or the fallback message when nothing fired.
    pub fn messages(&self) -> Vec<String> {
        if self.advisories.is_empty() {
            return vec![FALLBACK_MESSAGE.to_string()];
        }
        self.advisories
            .iter()
            .map(|advisory| advisory.message.clone())
            .collect()
    }
}

/// Stateless single-pass evaluator over a shared, immutable catalog.
///
/// Every rule is checked independently in declaration order; nothing a rule
/// produces is fed back into the fact, so one scan is the whole evaluation.
#[derive(Debug, Clone)]
pub struct AdvisoryEngine {
    catalog: Arc<RuleCatalog>,
}

impl AdvisoryEngine {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn standard() -> Self {
        Self::new(RuleCatalog::standard())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Evaluate against the local calendar date.
    pub fn evaluate(&self, fact: &FactRecord) -> Vec<String> {
        self.evaluate_on(fact, Local::now().date_naive())
    }

    pub fn evaluate_on(&self, fact: &FactRecord, today: NaiveDate) -> Vec<String> {
        self.report(fact, today).messages()
    }

    pub fn report(&self, fact: &FactRecord, today: NaiveDate) -> AdvisoryReport {
        let ctx = self.catalog.context(fact, today);
        let advisories: Vec<Advisory> = self
            .catalog
            .rules()
            .iter()
            .filter(|rule| rule.matches(&ctx))
            .map(|rule| Advisory {
                rule: rule.id,
                message: rule.message(&ctx),
            })
            .collect();

        debug!(
            revision = self.catalog.revision(),
            %today,
            fired = advisories.len(),
            "advisory rules evaluated"
        );

        AdvisoryReport {
            revision: self.catalog.revision().to_string(),
            evaluated_on: today,
            advisories,
        }
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::standard()
    }
}
