use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{CatalogError, RuleId};

pub const STANDARD_REVISION: &str = "standard-2025";

/// Mail providers operated from the aggressor state.
pub const DEFAULT_BLOCKED_EMAIL_DOMAINS: &[&str] = &[
    "mail.ru",
    "inbox.ru",
    "list.ru",
    "bk.ru",
    "internet.ru",
    "yandex.ru",
    "yandex.ua",
    "yandex.by",
    "yandex.kz",
    "yandex.com",
    "ya.ru",
    "rambler.ru",
    "lenta.ru",
    "ro.ru",
    "autorambler.ru",
    "myrambler.ru",
];

/// Versioned catalog definition, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default = "default_revision")]
    pub revision: String,
    #[serde(default)]
    pub disabled_rules: Vec<RuleId>,
    #[serde(default = "default_blocked_email_domains")]
    pub blocked_email_domains: Vec<String>,
}

fn default_revision() -> String {
    STANDARD_REVISION.to_string()
}

fn default_blocked_email_domains() -> Vec<String> {
    DEFAULT_BLOCKED_EMAIL_DOMAINS
        .iter()
        .map(|domain| domain.to_string())
        .collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            revision: default_revision(),
            disabled_rules: Vec::new(),
            blocked_email_domains: default_blocked_email_domains(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
