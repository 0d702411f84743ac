use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{PersonSubmission, SubmissionError};
use crate::advisory::{AdvisoryEngine, AdvisoryReport, RuleCatalog, RuleId};

/// Evaluation result for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceView {
    pub revision: String,
    pub evaluated_on: NaiveDate,
    pub recommendations: Vec<String>,
    pub fired_rules: Vec<RuleId>,
}

impl From<AdvisoryReport> for AdviceView {
    fn from(report: AdvisoryReport) -> Self {
        Self {
            recommendations: report.messages(),
            fired_rules: report.fired_rules(),
            revision: report.revision,
            evaluated_on: report.evaluated_on,
        }
    }
}

/// One row of a batch: recommendations, or the reason the row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Advised {
        person: String,
        recommendations: Vec<String>,
    },
    Rejected {
        person: String,
        error: String,
    },
}

impl BatchEntry {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchAdviceView {
    pub revision: String,
    pub evaluated_on: NaiveDate,
    pub results: Vec<BatchEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub id: RuleId,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub revision: String,
    pub rules: Vec<RuleSummary>,
}

/// Maps submissions into fact records and runs them through the shared engine.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryService {
    engine: AdvisoryEngine,
}

impl AdvisoryService {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            engine: AdvisoryEngine::new(catalog),
        }
    }

    pub fn engine(&self) -> &AdvisoryEngine {
        &self.engine
    }

    /// Local calendar date used when a request does not pin one.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn advise(
        &self,
        submission: &PersonSubmission,
        today: NaiveDate,
    ) -> Result<AdviceView, SubmissionError> {
        let fact = submission.to_fact().map_err(|error| {
            warn!(%error, "person submission rejected");
            error
        })?;
        Ok(self.engine.report(&fact, today).into())
    }

    /// Rows are independent: a rejected row never stops the rest of the batch.
    pub fn advise_batch(
        &self,
        submissions: &[PersonSubmission],
        today: NaiveDate,
    ) -> BatchAdviceView {
        let results: Vec<BatchEntry> = submissions
            .iter()
            .map(|submission| {
                let person = submission.display_name();
                match submission.to_fact() {
                    Ok(fact) => BatchEntry::Advised {
                        person,
                        recommendations: self.engine.report(&fact, today).messages(),
                    },
                    Err(error) => BatchEntry::Rejected {
                        person,
                        error: error.to_string(),
                    },
                }
            })
            .collect();

        let rejected = results.iter().filter(|entry| entry.is_rejected()).count();
        info!(
            revision = self.engine.catalog().revision(),
            persons = results.len(),
            rejected,
            "batch advice evaluated"
        );

        BatchAdviceView {
            revision: self.engine.catalog().revision().to_string(),
            evaluated_on: today,
            results,
        }
    }

    pub fn catalog_view(&self) -> CatalogView {
        let catalog = self.engine.catalog();
        CatalogView {
            revision: catalog.revision().to_string(),
            rules: catalog
                .rules()
                .iter()
                .enumerate()
                .map(|(index, rule)| RuleSummary {
                    id: rule.id,
                    position: index + 1,
                })
                .collect(),
        }
    }
}
