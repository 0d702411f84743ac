use serde::{Deserialize, Serialize};

use crate::advisory::{AccountCategory, DateValue, FactRecord, Gender};

/// Raw field values of the person form, exactly as typed or exported.
///
/// Nothing is validated on deserialization; [`PersonSubmission::to_fact`] does the
/// mapping into the engine's typed record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonSubmission {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub rnokpp: Option<String>,
    pub address_registered: Option<String>,
    pub address_actual: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub position_name: Option<String>,
    pub appoint_order_date: Option<String>,
    pub dismiss_order_date: Option<String>,
    pub account_category: Option<String>,
    pub mil_rank: Option<String>,
    pub vos_code: Option<String>,
    pub tcksp: Option<String>,
    pub edrpvr_number: Option<String>,
    pub doc_type: Option<String>,
    pub doc_series_number: Option<String>,
    pub passport_series_number: Option<String>,
    pub passport_issued_by: Option<String>,
    pub passport_issued_date: Option<String>,
    pub deferral_until: Option<String>,
    pub deferral_reason: Option<String>,
    pub booking_until: Option<String>,
    pub mobil_order_date: Option<String>,
    pub unit_number: Option<String>,
    pub notif_appoint_date: Option<String>,
    pub notif_dismiss_date: Option<String>,
}

/// Form-level rejection of a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("unknown gender '{0}'")]
    UnknownGender(String),
    #[error("unknown account category '{0}'")]
    UnknownCategory(String),
}

fn cleaned(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn date_field(value: &Option<String>) -> Option<DateValue> {
    value.as_deref().and_then(DateValue::from_raw)
}

impl PersonSubmission {
    /// "last first middle" with absent parts skipped.
    pub fn display_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.middle_name]
            .into_iter()
            .filter_map(cleaned)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_fact(&self) -> Result<FactRecord, SubmissionError> {
        let gender = match cleaned(&self.gender) {
            Some(raw) => Some(Gender::parse(&raw).ok_or(SubmissionError::UnknownGender(raw))?),
            None => None,
        };
        let account_category = match cleaned(&self.account_category) {
            Some(raw) => {
                AccountCategory::parse(&raw).ok_or(SubmissionError::UnknownCategory(raw))?
            }
            None => AccountCategory::default(),
        };

        Ok(FactRecord {
            first_name: cleaned(&self.first_name),
            last_name: cleaned(&self.last_name),
            gender,
            birth_date: date_field(&self.birth_date),
            account_category,
            rnokpp: cleaned(&self.rnokpp),
            mil_rank: cleaned(&self.mil_rank),
            vos_code: cleaned(&self.vos_code),
            email: cleaned(&self.email),
            deferral_until: date_field(&self.deferral_until),
            deferral_reason: cleaned(&self.deferral_reason),
            booking_until: date_field(&self.booking_until),
            appoint_order_date: date_field(&self.appoint_order_date),
            dismiss_order_date: date_field(&self.dismiss_order_date),
            notif_appoint_date: date_field(&self.notif_appoint_date),
            notif_dismiss_date: date_field(&self.notif_dismiss_date),
            mobil_order_date: date_field(&self.mobil_order_date),
            unit_number: cleaned(&self.unit_number),
            position_name: cleaned(&self.position_name),
            address_registered: cleaned(&self.address_registered),
            address_actual: cleaned(&self.address_actual),
            edrpvr_number: cleaned(&self.edrpvr_number),
            passport_issued_date: date_field(&self.passport_issued_date),
        })
    }
}
