use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;

use crate::records::{AdvisoryService, PersonSubmission};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

pub(super) fn service() -> Arc<AdvisoryService> {
    Arc::new(AdvisoryService::default())
}

fn field(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Form values for a consistent record that fires no rule on [`today`].
pub(super) fn submission() -> PersonSubmission {
    PersonSubmission {
        last_name: field("Петренко"),
        first_name: field("Іван"),
        middle_name: field("Олександрович"),
        gender: field("male"),
        birth_date: field("1990-05-17"),
        rnokpp: field("3300912375"),
        address_registered: field("м. Київ, вул. Хрещатик, 1"),
        phone: field("+380501234567"),
        email: field("ivan.petrenko@ukr.net"),
        account_category: field("військовозобовʼязаний"),
        mil_rank: field("солдат"),
        vos_code: field("100915"),
        tcksp: field("Шевченківський РТЦК та СП"),
        edrpvr_number: field("260119900517001"),
        doc_type: field("ID-картка"),
        passport_issued_date: field("2020-01-15"),
        ..PersonSubmission::default()
    }
}

/// A seventeen-year-old conscript: only the minor-category rule fires.
pub(super) fn minor_submission() -> PersonSubmission {
    PersonSubmission {
        last_name: field("Коваль"),
        first_name: field("Олег"),
        gender: field("чоловік"),
        birth_date: field("2009-10-19"),
        account_category: field("призовник"),
        edrpvr_number: field("260120091019001"),
        ..PersonSubmission::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
