use super::common::*;
use crate::advisory::{AccountCategory, DateValue, Gender};
use crate::records::{PersonSubmission, SubmissionError};

#[test]
fn to_fact_maps_typed_fields() {
    let fact = submission().to_fact().expect("valid submission");

    assert_eq!(fact.gender, Some(Gender::Male));
    assert_eq!(fact.account_category, AccountCategory::Liable);
    assert_eq!(
        fact.birth_date.as_ref().and_then(DateValue::date),
        chrono::NaiveDate::from_ymd_opt(1990, 5, 17)
    );
    assert_eq!(fact.display_name(), "Іван Петренко");
}

#[test]
fn blank_fields_become_absent_and_text_is_trimmed() {
    let submission = PersonSubmission {
        first_name: Some("  Іван ".to_string()),
        mil_rank: Some("   ".to_string()),
        gender: Some(" ".to_string()),
        account_category: Some(String::new()),
        deferral_until: Some("\t".to_string()),
        ..PersonSubmission::default()
    };

    let fact = submission.to_fact().expect("blank values are accepted");

    assert_eq!(fact.first_name.as_deref(), Some("Іван"));
    assert_eq!(fact.mil_rank, None);
    assert_eq!(fact.gender, None);
    assert_eq!(fact.account_category, AccountCategory::Conscript);
    assert_eq!(fact.deferral_until, None);
}

#[test]
fn legacy_date_text_is_kept_verbatim() {
    let submission = PersonSubmission {
        booking_until: Some("31.12.2026".to_string()),
        ..PersonSubmission::default()
    };

    let fact = submission.to_fact().expect("valid submission");

    assert_eq!(
        fact.booking_until,
        Some(DateValue::Text("31.12.2026".to_string()))
    );
}

#[test]
fn unknown_gender_or_category_is_rejected() {
    let mut submission = submission();
    submission.gender = Some("невідомо".to_string());
    assert_eq!(
        submission.to_fact(),
        Err(SubmissionError::UnknownGender("невідомо".to_string()))
    );

    submission.gender = Some("female".to_string());
    submission.account_category = Some("курсант".to_string());
    let error = submission.to_fact().expect_err("category must be known");
    assert_eq!(error.to_string(), "unknown account category 'курсант'");
}

#[test]
fn display_name_lists_last_first_middle() {
    assert_eq!(submission().display_name(), "Петренко Іван Олександрович");

    let partial = PersonSubmission {
        first_name: Some("Олена".to_string()),
        middle_name: Some(" ".to_string()),
        ..PersonSubmission::default()
    };
    assert_eq!(partial.display_name(), "Олена");
    assert_eq!(PersonSubmission::default().display_name(), "");
}

#[test]
fn submission_deserializes_with_missing_fields() {
    let submission: PersonSubmission =
        serde_json::from_str(r#"{"last_name": "Бойко", "account_category": "reservist"}"#)
            .expect("partial payload");

    let fact = submission.to_fact().expect("valid submission");

    assert_eq!(fact.account_category, AccountCategory::Reservist);
    assert_eq!(fact.last_name.as_deref(), Some("Бойко"));
}
