use super::common::*;
use crate::advisory::{RuleId, FALLBACK_MESSAGE, STANDARD_REVISION};
use crate::records::{BatchEntry, SubmissionError};

#[test]
fn advise_returns_fallback_for_clean_submission() {
    let view = service()
        .advise(&submission(), today())
        .expect("valid submission");

    assert_eq!(view.revision, STANDARD_REVISION);
    assert_eq!(view.evaluated_on, today());
    assert_eq!(view.recommendations, vec![FALLBACK_MESSAGE.to_string()]);
    assert!(view.fired_rules.is_empty());
}

#[test]
fn advise_reports_fired_rules_alongside_messages() {
    let view = service()
        .advise(&minor_submission(), today())
        .expect("valid submission");

    assert_eq!(view.fired_rules, vec![RuleId::MinorCategory]);
    assert_eq!(
        view.recommendations,
        vec!["Перевірте визначення категорії обліку неповнолітнього".to_string()]
    );
}

#[test]
fn advise_propagates_submission_errors() {
    let mut rejected = submission();
    rejected.gender = Some("x".to_string());

    let error = service()
        .advise(&rejected, today())
        .expect_err("gender must be known");

    assert_eq!(error, SubmissionError::UnknownGender("x".to_string()));
}

#[test]
fn batch_keeps_order_and_isolates_rejected_rows() {
    let mut rejected = minor_submission();
    rejected.account_category = Some("курсант".to_string());
    let persons = vec![submission(), rejected, minor_submission()];

    let view = service().advise_batch(&persons, today());

    assert_eq!(view.results.len(), 3);
    assert_eq!(
        view.results[0],
        BatchEntry::Advised {
            person: "Петренко Іван Олександрович".to_string(),
            recommendations: vec![FALLBACK_MESSAGE.to_string()],
        }
    );
    assert!(view.results[1].is_rejected());
    assert!(matches!(
        &view.results[2],
        BatchEntry::Advised { person, recommendations }
            if person == "Коваль Олег" && recommendations.len() == 1
    ));
}

#[test]
fn empty_batch_is_not_an_error() {
    let view = service().advise_batch(&[], today());

    assert!(view.results.is_empty());
    assert_eq!(view.revision, STANDARD_REVISION);
}

#[test]
fn catalog_view_numbers_rules_from_one() {
    let view = service().catalog_view();

    assert_eq!(view.rules.len(), RuleId::ordered().len());
    assert_eq!(view.rules[0].id, RuleId::BelowRegistrableAge);
    assert_eq!(view.rules[0].position, 1);
    assert_eq!(view.rules.last().map(|rule| rule.position), Some(25));
}
