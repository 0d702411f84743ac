//! Calling layer around the advisory engine: raw person submissions, bulk import,
//! and the HTTP surface.

pub mod domain;
pub mod import;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{PersonSubmission, SubmissionError};
pub use import::ImportError;
pub use router::{advisory_router, AdviceRequest, BatchAdviceRequest};
pub use service::{
    AdviceView, AdvisoryService, BatchAdviceView, BatchEntry, CatalogView, RuleSummary,
};
