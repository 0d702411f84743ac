use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use milreg::advisory::temporal;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    temporal::parse_date(raw.trim())
        .ok_or_else(|| format!("failed to parse '{raw}' as YYYY-MM-DD"))
}
