//! End-to-end scenarios through the public surface: CSV import, submission mapping,
//! a configured catalog, and the HTTP router.

mod common {
    use chrono::NaiveDate;

    pub(super) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    /// Registry export with one clean person, one overdue appointment, one bad row.
    pub(super) const EXPORT: &str = "\
last_name,first_name,gender,birth_date,rnokpp,account_category,mil_rank,vos_code,email,edrpvr_number,passport_issued_date,appoint_order_date,position_name
Петренко,Іван,male,1990-05-17,3300912375,військовозобов'язаний,солдат,100915,ivan@ukr.net,260119900517001,2020-01-15,,
Мельник,Андрій,male,1990-05-17,3300912375,військовозобовʼязаний,сержант,100915,andrii@ukr.net,260119900517002,2020-01-15,2026-10-09,оператор
Бондар,Ігор,невідомо,1990-05-17,,призовник,,,,,,,
";
}

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use milreg::advisory::{AdvisoryEngine, CatalogConfig, RuleCatalog, RuleId, FALLBACK_MESSAGE};
use milreg::records::{advisory_router, import, AdvisoryService, BatchEntry};

#[test]
fn csv_export_is_advised_row_by_row() {
    let submissions = import::read_csv(Cursor::new(common::EXPORT)).expect("export parses");
    let service = AdvisoryService::default();

    let view = service.advise_batch(&submissions, common::today());

    assert_eq!(view.results.len(), 3);
    assert_eq!(
        view.results[0],
        BatchEntry::Advised {
            person: "Петренко Іван".to_string(),
            recommendations: vec![FALLBACK_MESSAGE.to_string()],
        }
    );
    assert_eq!(
        view.results[1],
        BatchEntry::Advised {
            person: "Мельник Андрій".to_string(),
            recommendations: vec![
                "Повідомлення про призначення Андрій Мельник на посаду необхідно було подати до 16.10.2026"
                    .to_string()
            ],
        }
    );
    assert_eq!(
        view.results[2],
        BatchEntry::Rejected {
            person: "Бондар Ігор".to_string(),
            error: "unknown gender 'невідомо'".to_string(),
        }
    );
}

#[test]
fn catalog_revision_without_registry_rule_silences_it() {
    let config = CatalogConfig::from_json_str(
        r#"{"revision": "pilot", "disabled_rules": ["missing_registry_number"]}"#,
    )
    .expect("definition parses");
    let engine = AdvisoryEngine::new(RuleCatalog::from_config(&config).expect("catalog builds"));

    let report = engine.report(&Default::default(), common::today());

    assert_eq!(report.revision, "pilot");
    assert!(!report.fired(RuleId::MissingRegistryNumber));
    assert_eq!(report.messages(), vec![FALLBACK_MESSAGE.to_string()]);
}

#[tokio::test]
async fn router_serves_advice_for_configured_catalog() {
    let config = CatalogConfig {
        revision: "pilot".to_string(),
        blocked_email_domains: vec!["example.org".to_string()],
        ..CatalogConfig::default()
    };
    let service = AdvisoryService::new(RuleCatalog::from_config(&config).expect("catalog builds"));
    let router = advisory_router(Arc::new(service));

    let payload = json!({
        "person": {
            "first_name": "Марта",
            "last_name": "Ткач",
            "gender": "female",
            "account_category": "reservist",
            "mil_rank": "молодший сержант",
            "email": "marta@Example.org",
            "edrpvr_number": "1"
        },
        "today": "2026-10-19"
    });
    let response = router
        .oneshot(
            Request::post("/api/v1/persons/advice")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    let body: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(body["revision"], json!("pilot"));
    assert_eq!(body["fired_rules"], json!(["blocked_email_domain"]));
}
