//! Advisory rule engine for military registration records.
//!
//! A [`FactRecord`] goes in, an ordered list of recommendations comes out. The
//! catalog is built once at startup and shared read-only between callers.

mod catalog;
mod evaluator;
pub mod fact;
pub mod rnokpp;
pub mod temporal;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogConfig, CatalogError, RuleCatalog, RuleContext, RuleDefinition, RuleId,
    DEFAULT_BLOCKED_EMAIL_DOMAINS, STANDARD_REVISION,
};
pub use evaluator::{Advisory, AdvisoryEngine, AdvisoryReport, FALLBACK_MESSAGE};
pub use fact::{AccountCategory, DateValue, FactRecord, Gender};
pub use rnokpp::{IdCheck, Rnokpp};
