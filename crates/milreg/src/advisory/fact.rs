use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::temporal::parse_date;

/// Declared sex of the registrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Accepts the form values (`male`/`female`) and the Ukrainian labels.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" | "m" | "чоловік" => Some(Self::Male),
            "female" | "f" | "жінка" => Some(Self::Female),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Чоловік",
            Self::Female => "Жінка",
        }
    }
}

/// Registration category of the person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountCategory {
    #[default]
    #[serde(rename = "призовник", alias = "conscript")]
    Conscript,
    #[serde(
        rename = "військовозобовʼязаний",
        alias = "військовозобов'язаний",
        alias = "військовозобов’язаний",
        alias = "liable"
    )]
    Liable,
    #[serde(rename = "резервіст", alias = "reservist")]
    Reservist,
}

impl AccountCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Conscript, Self::Liable, Self::Reservist]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conscript => "призовник",
            Self::Liable => "військовозобовʼязаний",
            Self::Reservist => "резервіст",
        }
    }

    /// Parse a category label, tolerating apostrophe variants and English aliases.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .map(|ch| match ch {
                '\'' | '’' | '`' => 'ʼ',
                other => other,
            })
            .collect();

        match normalized.as_str() {
            "conscript" => Some(Self::Conscript),
            "liable" => Some(Self::Liable),
            "reservist" => Some(Self::Reservist),
            other => Self::ordered()
                .into_iter()
                .find(|category| category.label() == other),
        }
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored date: either a parsed calendar date or legacy text kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    Text(String),
}

impl DateValue {
    /// `None` for blank input; otherwise a parsed date or the original text.
    pub fn from_raw(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(match parse_date(raw.trim()) {
            Some(date) => Self::Date(date),
            None => Self::Text(raw.to_string()),
        })
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(_) => None,
        }
    }

    pub fn is_present(&self) -> bool {
        match self {
            Self::Date(_) => true,
            Self::Text(text) => !text.trim().is_empty(),
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Immutable snapshot of one person's attributes fed to the advisory engine.
///
/// Every optional field may be absent; blank strings count as absent wherever
/// the rules check for presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateValue>,
    pub account_category: AccountCategory,
    pub rnokpp: Option<String>,
    pub mil_rank: Option<String>,
    pub vos_code: Option<String>,
    pub email: Option<String>,
    pub deferral_until: Option<DateValue>,
    pub deferral_reason: Option<String>,
    pub booking_until: Option<DateValue>,
    pub appoint_order_date: Option<DateValue>,
    pub dismiss_order_date: Option<DateValue>,
    pub notif_appoint_date: Option<DateValue>,
    pub notif_dismiss_date: Option<DateValue>,
    pub mobil_order_date: Option<DateValue>,
    pub unit_number: Option<String>,
    pub position_name: Option<String>,
    pub address_registered: Option<String>,
    pub address_actual: Option<String>,
    pub edrpvr_number: Option<String>,
    pub passport_issued_date: Option<DateValue>,
}

impl FactRecord {
    /// Name used in advisory messages: `"{first} {last}"` from whatever is present.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [text(&self.first_name), text(&self.last_name)]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            "Особа".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn birth(&self) -> Option<NaiveDate> {
        parsed(&self.birth_date)
    }
}

/// Present, non-blank text of an optional field.
pub(crate) fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.trim().is_empty())
}

pub(crate) fn date_present(value: &Option<DateValue>) -> bool {
    value.as_ref().is_some_and(DateValue::is_present)
}

pub(crate) fn parsed(value: &Option<DateValue>) -> Option<NaiveDate> {
    value.as_ref().and_then(DateValue::date)
}
