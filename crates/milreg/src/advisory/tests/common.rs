use chrono::NaiveDate;

use crate::advisory::{
    AccountCategory, AdvisoryEngine, AdvisoryReport, DateValue, FactRecord, Gender,
};

pub(super) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn date(year: i32, month: u32, day_of_month: u32) -> Option<DateValue> {
    Some(DateValue::Date(day(year, month, day_of_month)))
}

pub(super) fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Fixed reference date for every evaluation in these tests.
pub(super) fn today() -> NaiveDate {
    day(2026, 10, 19)
}

pub(super) fn engine() -> AdvisoryEngine {
    AdvisoryEngine::standard()
}

pub(super) fn report(fact: &FactRecord) -> AdvisoryReport {
    engine().report(fact, today())
}

/// A complete, consistent record that triggers no rule on [`today`].
pub(super) fn clean_fact() -> FactRecord {
    FactRecord {
        first_name: text("Іван"),
        last_name: text("Петренко"),
        gender: Some(Gender::Male),
        birth_date: date(1990, 5, 17),
        account_category: AccountCategory::Liable,
        rnokpp: text("3300912375"),
        mil_rank: text("солдат"),
        vos_code: text("100915"),
        email: text("ivan.petrenko@ukr.net"),
        address_registered: text("м. Київ, вул. Хрещатик, 1"),
        edrpvr_number: text("260119900517001"),
        passport_issued_date: date(2020, 1, 15),
        ..FactRecord::default()
    }
}

pub(super) fn conscript(birth: NaiveDate) -> FactRecord {
    FactRecord {
        first_name: text("Олег"),
        last_name: text("Коваль"),
        gender: Some(Gender::Male),
        birth_date: Some(DateValue::Date(birth)),
        account_category: AccountCategory::Conscript,
        edrpvr_number: text("260120090101001"),
        ..FactRecord::default()
    }
}
