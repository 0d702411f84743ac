mod config;
mod rules;

pub use config::{CatalogConfig, DEFAULT_BLOCKED_EMAIL_DOMAINS, STANDARD_REVISION};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use super::fact::FactRecord;
use super::temporal::age_in_years;

/// Stable identifier of each rule in the standard catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    BelowRegistrableAge,
    MinorCategory,
    AgeCeiling,
    ConscriptMobilizationOrder,
    ConscriptRank,
    ConscriptSpecialty,
    LiableWithoutRank,
    ReservistWithoutRank,
    BlockedEmailDomain,
    IdGenderParity,
    IdBirthDate,
    DeferralWithBooking,
    DeferralExpired,
    BookingExpired,
    AppointmentWithoutPosition,
    AppointmentNotice,
    DismissalNotice,
    MinorMobilization,
    MobilizationWithoutUnit,
    UnitWithoutMobilization,
    ImplausibleBirthDate,
    DuplicateAddress,
    DistinctAddresses,
    MissingRegistryNumber,
    PassportExpired,
}

impl RuleId {
    /// Declaration order of the standard catalog.
    pub const fn ordered() -> [Self; 25] {
        [
            Self::BelowRegistrableAge,
            Self::MinorCategory,
            Self::AgeCeiling,
            Self::ConscriptMobilizationOrder,
            Self::ConscriptRank,
            Self::ConscriptSpecialty,
            Self::LiableWithoutRank,
            Self::ReservistWithoutRank,
            Self::BlockedEmailDomain,
            Self::IdGenderParity,
            Self::IdBirthDate,
            Self::DeferralWithBooking,
            Self::DeferralExpired,
            Self::BookingExpired,
            Self::AppointmentWithoutPosition,
            Self::AppointmentNotice,
            Self::DismissalNotice,
            Self::MinorMobilization,
            Self::MobilizationWithoutUnit,
            Self::UnitWithoutMobilization,
            Self::ImplausibleBirthDate,
            Self::DuplicateAddress,
            Self::DistinctAddresses,
            Self::MissingRegistryNumber,
            Self::PassportExpired,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::BelowRegistrableAge => "below_registrable_age",
            Self::MinorCategory => "minor_category",
            Self::AgeCeiling => "age_ceiling",
            Self::ConscriptMobilizationOrder => "conscript_mobilization_order",
            Self::ConscriptRank => "conscript_rank",
            Self::ConscriptSpecialty => "conscript_specialty",
            Self::LiableWithoutRank => "liable_without_rank",
            Self::ReservistWithoutRank => "reservist_without_rank",
            Self::BlockedEmailDomain => "blocked_email_domain",
            Self::IdGenderParity => "id_gender_parity",
            Self::IdBirthDate => "id_birth_date",
            Self::DeferralWithBooking => "deferral_with_booking",
            Self::DeferralExpired => "deferral_expired",
            Self::BookingExpired => "booking_expired",
            Self::AppointmentWithoutPosition => "appointment_without_position",
            Self::AppointmentNotice => "appointment_notice",
            Self::DismissalNotice => "dismissal_notice",
            Self::MinorMobilization => "minor_mobilization",
            Self::MobilizationWithoutUnit => "mobilization_without_unit",
            Self::UnitWithoutMobilization => "unit_without_mobilization",
            Self::ImplausibleBirthDate => "implausible_birth_date",
            Self::DuplicateAddress => "duplicate_address",
            Self::DistinctAddresses => "distinct_addresses",
            Self::MissingRegistryNumber => "missing_registry_number",
            Self::PassportExpired => "passport_expired",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

type Predicate = fn(&RuleContext<'_>) -> bool;
type Formatter = fn(&RuleContext<'_>) -> String;

/// A predicate over the fact paired with the message it produces when it holds.
#[derive(Clone, Copy)]
pub struct RuleDefinition {
    pub id: RuleId,
    predicate: Predicate,
    message: Formatter,
}

impl RuleDefinition {
    pub(crate) const fn new(id: RuleId, predicate: Predicate, message: Formatter) -> Self {
        Self {
            id,
            predicate,
            message,
        }
    }

    pub fn matches(&self, ctx: &RuleContext<'_>) -> bool {
        (self.predicate)(ctx)
    }

    pub fn message(&self, ctx: &RuleContext<'_>) -> String {
        (self.message)(ctx)
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Everything a rule may look at: the fact, the reference date, and catalog settings.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub fact: &'a FactRecord,
    pub today: NaiveDate,
    blocked_email_domains: &'a BTreeSet<String>,
}

impl<'a> RuleContext<'a> {
    pub fn age(&self) -> Option<u32> {
        age_in_years(self.fact.birth()?, self.today)
    }

    pub fn is_blocked_domain(&self, domain: &str) -> bool {
        self.blocked_email_domains.contains(domain)
    }
}

/// Fatal problems building the catalog. The service refuses to start on any of these.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read rule catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rule catalog definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rule catalog revision must not be blank")]
    BlankRevision,
    #[error("rule {0} is disabled more than once")]
    DuplicateDisabledRule(RuleId),
    #[error("blocked e-mail domain list contains a blank entry")]
    BlankEmailDomain,
    #[error("rule catalog revision {revision} has no enabled rules")]
    NoRulesEnabled { revision: String },
}

/// Ordered, immutable set of rules shared by every evaluation.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    revision: String,
    rules: Vec<RuleDefinition>,
    blocked_email_domains: BTreeSet<String>,
}

impl RuleCatalog {
    /// Full catalog with the default blocked-domain list.
    pub fn standard() -> Self {
        Self {
            revision: STANDARD_REVISION.to_string(),
            rules: rules::standard_rules().to_vec(),
            blocked_email_domains: DEFAULT_BLOCKED_EMAIL_DOMAINS
                .iter()
                .map(|domain| domain.to_string())
                .collect(),
        }
    }

    /// Build a catalog from configuration, keeping the standard declaration order.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let revision = config.revision.trim();
        if revision.is_empty() {
            return Err(CatalogError::BlankRevision);
        }

        let mut disabled = BTreeSet::new();
        for id in &config.disabled_rules {
            if !disabled.insert(*id) {
                return Err(CatalogError::DuplicateDisabledRule(*id));
            }
        }

        let mut blocked_email_domains = BTreeSet::new();
        for domain in &config.blocked_email_domains {
            let normalized = domain.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(CatalogError::BlankEmailDomain);
            }
            blocked_email_domains.insert(normalized);
        }

        let rules: Vec<RuleDefinition> = rules::standard_rules()
            .into_iter()
            .filter(|rule| !disabled.contains(&rule.id))
            .collect();
        if rules.is_empty() {
            return Err(CatalogError::NoRulesEnabled {
                revision: revision.to_string(),
            });
        }

        let catalog = Self {
            revision: revision.to_string(),
            rules,
            blocked_email_domains,
        };
        info!(
            revision = %catalog.revision,
            rules = catalog.rules.len(),
            disabled = disabled.len(),
            "rule catalog ready"
        );
        Ok(catalog)
    }

    /// Read a JSON catalog definition from disk and build it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let config = CatalogConfig::from_path(path)?;
        Self::from_config(&config)
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, id: RuleId) -> bool {
        self.rules.iter().any(|rule| rule.id == id)
    }

    pub fn context<'a>(&'a self, fact: &'a FactRecord, today: NaiveDate) -> RuleContext<'a> {
        RuleContext {
            fact,
            today,
            blocked_email_domains: &self.blocked_email_domains,
        }
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
