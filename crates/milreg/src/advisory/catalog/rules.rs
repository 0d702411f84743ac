use chrono::NaiveDate;

use super::{RuleContext, RuleDefinition, RuleId};
use crate::advisory::fact::{date_present, parsed, text, AccountCategory, DateValue, Gender};
use crate::advisory::rnokpp::{self, Rnokpp};
use crate::advisory::temporal::{add_years, days_until, deadline, display_date, format_date};

const MINIMUM_REGISTRABLE_AGE: u32 = 16;
const ADULT_AGE: u32 = 18;
const AGE_CEILING: u32 = 60;
const MAX_PLAUSIBLE_AGE: u32 = 125;
const NOTICE_WINDOW_DAYS: i64 = 7;
const DOCUMENT_VALIDITY_YEARS: i32 = 10;

pub(super) fn standard_rules() -> [RuleDefinition; 25] {
    [
        RuleDefinition::new(
            RuleId::BelowRegistrableAge,
            below_registrable_age,
            below_registrable_age_message,
        ),
        RuleDefinition::new(RuleId::MinorCategory, minor_category, minor_category_message),
        RuleDefinition::new(RuleId::AgeCeiling, age_ceiling, age_ceiling_message),
        RuleDefinition::new(
            RuleId::ConscriptMobilizationOrder,
            conscript_mobilization_order,
            conscript_mobilization_order_message,
        ),
        RuleDefinition::new(RuleId::ConscriptRank, conscript_rank, conscript_rank_message),
        RuleDefinition::new(
            RuleId::ConscriptSpecialty,
            conscript_specialty,
            conscript_specialty_message,
        ),
        RuleDefinition::new(
            RuleId::LiableWithoutRank,
            liable_without_rank,
            liable_without_rank_message,
        ),
        RuleDefinition::new(
            RuleId::ReservistWithoutRank,
            reservist_without_rank,
            reservist_without_rank_message,
        ),
        RuleDefinition::new(
            RuleId::BlockedEmailDomain,
            blocked_email_domain,
            blocked_email_domain_message,
        ),
        RuleDefinition::new(RuleId::IdGenderParity, id_gender_parity, id_gender_parity_message),
        RuleDefinition::new(RuleId::IdBirthDate, id_birth_date, id_birth_date_message),
        RuleDefinition::new(
            RuleId::DeferralWithBooking,
            deferral_with_booking,
            deferral_with_booking_message,
        ),
        RuleDefinition::new(RuleId::DeferralExpired, deferral_expired, deferral_expired_message),
        RuleDefinition::new(RuleId::BookingExpired, booking_expired, booking_expired_message),
        RuleDefinition::new(
            RuleId::AppointmentWithoutPosition,
            appointment_without_position,
            appointment_without_position_message,
        ),
        RuleDefinition::new(
            RuleId::AppointmentNotice,
            appointment_notice,
            appointment_notice_message,
        ),
        RuleDefinition::new(RuleId::DismissalNotice, dismissal_notice, dismissal_notice_message),
        RuleDefinition::new(
            RuleId::MinorMobilization,
            minor_mobilization,
            minor_mobilization_message,
        ),
        RuleDefinition::new(
            RuleId::MobilizationWithoutUnit,
            mobilization_without_unit,
            mobilization_without_unit_message,
        ),
        RuleDefinition::new(
            RuleId::UnitWithoutMobilization,
            unit_without_mobilization,
            unit_without_mobilization_message,
        ),
        RuleDefinition::new(
            RuleId::ImplausibleBirthDate,
            implausible_birth_date,
            implausible_birth_date_message,
        ),
        RuleDefinition::new(RuleId::DuplicateAddress, duplicate_address, duplicate_address_message),
        RuleDefinition::new(
            RuleId::DistinctAddresses,
            distinct_addresses,
            distinct_addresses_message,
        ),
        RuleDefinition::new(
            RuleId::MissingRegistryNumber,
            missing_registry_number,
            missing_registry_number_message,
        ),
        RuleDefinition::new(RuleId::PassportExpired, passport_expired, passport_expired_message),
    ]
}

fn category_in(ctx: &RuleContext<'_>, categories: &[AccountCategory]) -> bool {
    categories.contains(&ctx.fact.account_category)
}

fn date_text(value: Option<&DateValue>) -> String {
    format_date(value).unwrap_or_else(|| "[невідомо]".to_string())
}

// Age

fn below_registrable_age(ctx: &RuleContext<'_>) -> bool {
    ctx.age().is_some_and(|age| age < MINIMUM_REGISTRABLE_AGE)
}

fn below_registrable_age_message(_ctx: &RuleContext<'_>) -> String {
    "Особа молодша 16 років і не підлягає взяттю на військовий облік".to_string()
}

fn minor_category(ctx: &RuleContext<'_>) -> bool {
    category_in(ctx, &[AccountCategory::Conscript, AccountCategory::Liable])
        && ctx.age().is_some_and(|age| age < ADULT_AGE)
}

fn minor_category_message(_ctx: &RuleContext<'_>) -> String {
    "Перевірте визначення категорії обліку неповнолітнього".to_string()
}

fn age_ceiling(ctx: &RuleContext<'_>) -> bool {
    category_in(ctx, &[AccountCategory::Liable, AccountCategory::Reservist])
        && ctx.age().is_some_and(|age| age > AGE_CEILING)
}

fn age_ceiling_message(ctx: &RuleContext<'_>) -> String {
    format!(
        "{} має бути виключений з військового обліку у звʼязку з досягненням граничного віку",
        ctx.fact.display_name()
    )
}

// Category consistency

fn is_conscript(ctx: &RuleContext<'_>) -> bool {
    ctx.fact.account_category == AccountCategory::Conscript
}

fn conscript_mobilization_order(ctx: &RuleContext<'_>) -> bool {
    is_conscript(ctx) && date_present(&ctx.fact.mobil_order_date)
}

fn conscript_mobilization_order_message(_ctx: &RuleContext<'_>) -> String {
    "Призовнику не може бути видано мобілізаційне розпорядження, перевірте категорію обліку"
        .to_string()
}

fn conscript_rank(ctx: &RuleContext<'_>) -> bool {
    is_conscript(ctx) && text(&ctx.fact.mil_rank).is_some()
}

fn conscript_rank_message(_ctx: &RuleContext<'_>) -> String {
    "Призовник не може мати військового звання, перевірте категорію обліку".to_string()
}

fn conscript_specialty(ctx: &RuleContext<'_>) -> bool {
    is_conscript(ctx) && text(&ctx.fact.vos_code).is_some()
}

fn conscript_specialty_message(_ctx: &RuleContext<'_>) -> String {
    "Призовник не може мати військово-облікової спеціальності (ВОС), перевірте категорію обліку"
        .to_string()
}

fn liable_without_rank(ctx: &RuleContext<'_>) -> bool {
    ctx.fact.account_category == AccountCategory::Liable && text(&ctx.fact.mil_rank).is_none()
}

fn liable_without_rank_message(_ctx: &RuleContext<'_>) -> String {
    "Для військовозобовʼязаного не зазначено військове звання, перевірте, чи це правильно"
        .to_string()
}

fn reservist_without_rank(ctx: &RuleContext<'_>) -> bool {
    ctx.fact.account_category == AccountCategory::Reservist && text(&ctx.fact.mil_rank).is_none()
}

fn reservist_without_rank_message(_ctx: &RuleContext<'_>) -> String {
    "Для резервіста не зазначено військове звання, перевірте, чи це правильно".to_string()
}

// Contact data

fn email_domain(email: &str) -> Option<String> {
    let (_, domain) = email.rsplit_once('@')?;
    let domain = domain.trim().to_lowercase();
    (!domain.is_empty()).then_some(domain)
}

fn blocked_email_domain(ctx: &RuleContext<'_>) -> bool {
    text(&ctx.fact.email)
        .and_then(email_domain)
        .is_some_and(|domain| ctx.is_blocked_domain(&domain))
}

fn blocked_email_domain_message(ctx: &RuleContext<'_>) -> String {
    format!(
        "Негайно змініть адресу електронної пошти {}: поштові сервіси держави-агресора заборонені",
        text(&ctx.fact.email).unwrap_or_default().trim()
    )
}

// National identifier

fn id_gender_parity(ctx: &RuleContext<'_>) -> bool {
    rnokpp::parity_check(text(&ctx.fact.rnokpp), ctx.fact.gender).is_mismatch()
}

fn id_gender_parity_message(ctx: &RuleContext<'_>) -> String {
    let encoded = text(&ctx.fact.rnokpp)
        .and_then(Rnokpp::normalize)
        .map(|id| match id.encoded_gender() {
            Gender::Male => "чоловічу",
            Gender::Female => "жіночу",
        })
        .unwrap_or("іншу");
    format!(
        "Стать не відповідає РНОКПП: девʼята цифра номера вказує на {encoded} стать"
    )
}

fn id_birth_date(ctx: &RuleContext<'_>) -> bool {
    rnokpp::birthdate_consistency_check(text(&ctx.fact.rnokpp), ctx.fact.birth()).is_mismatch()
}

fn id_birth_date_message(ctx: &RuleContext<'_>) -> String {
    let encoded = text(&ctx.fact.rnokpp)
        .and_then(Rnokpp::normalize)
        .and_then(|id| id.encoded_birth_date())
        .map(display_date);
    match encoded {
        Some(encoded) => format!(
            "Ймовірна помилка в перших 5 цифрах РНОКПП: вони відповідають даті народження {}, а вказано {}",
            encoded,
            date_text(ctx.fact.birth_date.as_ref())
        ),
        None => "Ймовірна помилка в перших 5 цифрах РНОКПП".to_string(),
    }
}

// Deferral and booking

fn deferral_with_booking(ctx: &RuleContext<'_>) -> bool {
    date_present(&ctx.fact.deferral_until) && date_present(&ctx.fact.booking_until)
}

fn deferral_with_booking_message(ctx: &RuleContext<'_>) -> String {
    let reason = text(&ctx.fact.deferral_reason).unwrap_or("підставу не зазначено");
    format!(
        "{} може не включатися до списку на бронювання до {}, адже має відстрочку ({})",
        ctx.fact.display_name(),
        date_text(ctx.fact.deferral_until.as_ref()),
        reason
    )
}

fn expired(value: &Option<DateValue>, today: NaiveDate) -> bool {
    parsed(value).is_some_and(|until| until < today)
}

fn deferral_expired(ctx: &RuleContext<'_>) -> bool {
    expired(&ctx.fact.deferral_until, ctx.today)
}

fn deferral_expired_message(ctx: &RuleContext<'_>) -> String {
    format!(
        "Строк відстрочки {} сплив {}, оновіть дані",
        ctx.fact.display_name(),
        date_text(ctx.fact.deferral_until.as_ref())
    )
}

fn booking_expired(ctx: &RuleContext<'_>) -> bool {
    expired(&ctx.fact.booking_until, ctx.today)
}

fn booking_expired_message(ctx: &RuleContext<'_>) -> String {
    format!(
        "Строк бронювання {} сплив {}, оновіть дані",
        ctx.fact.display_name(),
        date_text(ctx.fact.booking_until.as_ref())
    )
}

// Appointment and dismissal notices

fn appointment_without_position(ctx: &RuleContext<'_>) -> bool {
    date_present(&ctx.fact.appoint_order_date) && text(&ctx.fact.position_name).is_none()
}

fn appointment_without_position_message(ctx: &RuleContext<'_>) -> String {
    format!(
        "Зазначте посаду, на яку призначено {}",
        ctx.fact.display_name()
    )
}

/// Days left to file a notice for `order`, when the notice is still missing.
fn pending_notice_days(
    order: &Option<DateValue>,
    notice: &Option<DateValue>,
    today: NaiveDate,
) -> Option<i64> {
    if !date_present(order) || date_present(notice) {
        return None;
    }
    days_until(parsed(order), NOTICE_WINDOW_DAYS, today)
}

fn notice_deadline_text(order: &Option<DateValue>) -> String {
    deadline(parsed(order), NOTICE_WINDOW_DAYS)
        .map(display_date)
        .unwrap_or_else(|| "[невідомо]".to_string())
}

fn appointment_notice(ctx: &RuleContext<'_>) -> bool {
    pending_notice_days(
        &ctx.fact.appoint_order_date,
        &ctx.fact.notif_appoint_date,
        ctx.today,
    )
    .is_some()
}

fn appointment_notice_message(ctx: &RuleContext<'_>) -> String {
    let name = ctx.fact.display_name();
    match pending_notice_days(
        &ctx.fact.appoint_order_date,
        &ctx.fact.notif_appoint_date,
        ctx.today,
    ) {
        Some(days_left) if days_left > 0 => format!(
            "Не подано повідомлення до ТЦК та СП про призначення {name} на посаду. Залишилось {days_left} днів"
        ),
        _ => format!(
            "Повідомлення про призначення {name} на посаду необхідно було подати до {}",
            notice_deadline_text(&ctx.fact.appoint_order_date)
        ),
    }
}

fn dismissal_notice(ctx: &RuleContext<'_>) -> bool {
    pending_notice_days(
        &ctx.fact.dismiss_order_date,
        &ctx.fact.notif_dismiss_date,
        ctx.today,
    )
    .is_some()
}

fn dismissal_notice_message(ctx: &RuleContext<'_>) -> String {
    let name = ctx.fact.display_name();
    match pending_notice_days(
        &ctx.fact.dismiss_order_date,
        &ctx.fact.notif_dismiss_date,
        ctx.today,
    ) {
        Some(days_left) if days_left > 0 => format!(
            "Не подано повідомлення до ТЦК та СП про звільнення {name}. Залишилось {days_left} днів."
        ),
        _ => format!(
            "Повідомлення про звільнення {name} з посади необхідно було подати до {}",
            notice_deadline_text(&ctx.fact.dismiss_order_date)
        ),
    }
}

// Mobilization

fn minor_mobilization(ctx: &RuleContext<'_>) -> bool {
    let (Some(birth), Some(order)) = (ctx.fact.birth(), parsed(&ctx.fact.mobil_order_date)) else {
        return false;
    };
    add_years(birth, ADULT_AGE as i32).is_some_and(|adulthood| order < adulthood)
}

fn minor_mobilization_message(ctx: &RuleContext<'_>) -> String {
    format!(
        "Неповнолітня особа не може бути мобілізована: на дату розпорядження {} {} не досяг 18 років",
        date_text(ctx.fact.mobil_order_date.as_ref()),
        ctx.fact.display_name()
    )
}

fn mobilization_without_unit(ctx: &RuleContext<'_>) -> bool {
    date_present(&ctx.fact.mobil_order_date) && text(&ctx.fact.unit_number).is_none()
}

fn mobilization_without_unit_message(ctx: &RuleContext<'_>) -> String {
    format!(
        "Зазначте номер військової частини, до якої мобілізовано {}",
        ctx.fact.display_name()
    )
}

fn unit_without_mobilization(ctx: &RuleContext<'_>) -> bool {
    text(&ctx.fact.unit_number).is_some() && !date_present(&ctx.fact.mobil_order_date)
}

fn unit_without_mobilization_message(_ctx: &RuleContext<'_>) -> String {
    "Зазначте дату видачі мобілізаційного розпорядження".to_string()
}

// Identity data

fn implausible_birth_date(ctx: &RuleContext<'_>) -> bool {
    ctx.age().is_some_and(|age| age > MAX_PLAUSIBLE_AGE)
}

fn implausible_birth_date_message(_ctx: &RuleContext<'_>) -> String {
    "Переконайтеся, що дата народження вказана правильно".to_string()
}

fn addresses<'a>(ctx: &RuleContext<'a>) -> Option<(&'a str, &'a str)> {
    Some((
        text(&ctx.fact.address_registered)?,
        text(&ctx.fact.address_actual)?,
    ))
}

fn duplicate_address(ctx: &RuleContext<'_>) -> bool {
    addresses(ctx).is_some_and(|(registered, actual)| registered == actual)
}

fn duplicate_address_message(_ctx: &RuleContext<'_>) -> String {
    "Вказуйте лише задеклароване місце проживання".to_string()
}

fn distinct_addresses(ctx: &RuleContext<'_>) -> bool {
    addresses(ctx).is_some_and(|(registered, actual)| registered != actual)
}

fn distinct_addresses_message(_ctx: &RuleContext<'_>) -> String {
    "Необхідно зазначити задеклароване та фактичне місце проживання".to_string()
}

fn missing_registry_number(ctx: &RuleContext<'_>) -> bool {
    text(&ctx.fact.edrpvr_number).is_none()
}

fn missing_registry_number_message(_ctx: &RuleContext<'_>) -> String {
    "Вкажіть номер в ЄДРПВР".to_string()
}

fn passport_expiry(ctx: &RuleContext<'_>) -> Option<NaiveDate> {
    add_years(parsed(&ctx.fact.passport_issued_date)?, DOCUMENT_VALIDITY_YEARS)
}

// Strictly more than ten years: a document issued exactly ten years ago is still valid today.
fn passport_expired(ctx: &RuleContext<'_>) -> bool {
    passport_expiry(ctx).is_some_and(|expiry| expiry < ctx.today)
}

fn passport_expired_message(ctx: &RuleContext<'_>) -> String {
    let expiry = passport_expiry(ctx)
        .map(display_date)
        .unwrap_or_else(|| "[невідомо]".to_string());
    format!("Оновіть дані про паспорт (ID-картку) термін дії якого сплив {expiry}")
}
