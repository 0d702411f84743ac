use std::path::PathBuf;

use crate::advisory::{
    CatalogConfig, CatalogError, RuleCatalog, RuleId, DEFAULT_BLOCKED_EMAIL_DOMAINS,
    STANDARD_REVISION,
};

#[test]
fn standard_catalog_holds_every_rule_in_order() {
    let catalog = RuleCatalog::standard();

    let ids: Vec<RuleId> = catalog.rules().iter().map(|rule| rule.id).collect();
    assert_eq!(ids, RuleId::ordered().to_vec());
    assert_eq!(catalog.revision(), STANDARD_REVISION);
    assert!(!catalog.is_empty());
}

#[test]
fn empty_json_document_yields_the_standard_catalog() {
    let config = CatalogConfig::from_json_str("{}").expect("empty object parses");

    assert_eq!(config, CatalogConfig::default());
    assert_eq!(
        config.blocked_email_domains.len(),
        DEFAULT_BLOCKED_EMAIL_DOMAINS.len()
    );

    let catalog = RuleCatalog::from_config(&config).expect("catalog builds");
    assert_eq!(catalog.len(), RuleId::ordered().len());
}

#[test]
fn disabled_rules_keep_the_remaining_order() {
    let config = CatalogConfig::from_json_str(
        r#"{
            "revision": "2026-q1",
            "disabled_rules": ["passport_expired", "below_registrable_age", "duplicate_address"]
        }"#,
    )
    .expect("definition parses");

    let catalog = RuleCatalog::from_config(&config).expect("catalog builds");

    let expected: Vec<RuleId> = RuleId::ordered()
        .into_iter()
        .filter(|id| {
            !matches!(
                id,
                RuleId::PassportExpired | RuleId::BelowRegistrableAge | RuleId::DuplicateAddress
            )
        })
        .collect();
    let ids: Vec<RuleId> = catalog.rules().iter().map(|rule| rule.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(catalog.revision(), "2026-q1");
}

#[test]
fn revision_is_trimmed_and_must_not_be_blank() {
    let trimmed = CatalogConfig {
        revision: "  r7 ".to_string(),
        ..CatalogConfig::default()
    };
    assert_eq!(
        RuleCatalog::from_config(&trimmed)
            .expect("catalog builds")
            .revision(),
        "r7"
    );

    let blank = CatalogConfig {
        revision: "   ".to_string(),
        ..CatalogConfig::default()
    };
    assert!(matches!(
        RuleCatalog::from_config(&blank),
        Err(CatalogError::BlankRevision)
    ));
}

#[test]
fn duplicate_disabled_rule_is_rejected() {
    let config = CatalogConfig {
        disabled_rules: vec![RuleId::AgeCeiling, RuleId::AgeCeiling],
        ..CatalogConfig::default()
    };

    let err = RuleCatalog::from_config(&config).expect_err("duplicate must fail");

    assert!(matches!(
        err,
        CatalogError::DuplicateDisabledRule(RuleId::AgeCeiling)
    ));
    assert_eq!(err.to_string(), "rule age_ceiling is disabled more than once");
}

#[test]
fn blank_email_domain_is_rejected() {
    let config = CatalogConfig {
        blocked_email_domains: vec!["mail.ru".to_string(), " ".to_string()],
        ..CatalogConfig::default()
    };

    assert!(matches!(
        RuleCatalog::from_config(&config),
        Err(CatalogError::BlankEmailDomain)
    ));
}

#[test]
fn catalog_with_every_rule_disabled_is_rejected() {
    let config = CatalogConfig {
        revision: "off".to_string(),
        disabled_rules: RuleId::ordered().to_vec(),
        ..CatalogConfig::default()
    };

    let err = RuleCatalog::from_config(&config).expect_err("empty catalog must fail");

    assert!(matches!(err, CatalogError::NoRulesEnabled { ref revision } if revision == "off"));
}

#[test]
fn unknown_rule_ids_and_fields_fail_to_parse() {
    let unknown_rule = CatalogConfig::from_json_str(r#"{"disabled_rules": ["no_such_rule"]}"#);
    assert!(matches!(unknown_rule, Err(CatalogError::Parse(_))));

    let unknown_field = CatalogConfig::from_json_str(r#"{"rules": []}"#);
    assert!(matches!(unknown_field, Err(CatalogError::Parse(_))));
}

#[test]
fn missing_catalog_file_reports_its_path() {
    let path = PathBuf::from("/nonexistent/milreg/catalog.json");

    let err = RuleCatalog::load(&path).expect_err("missing file must fail");

    match err {
        CatalogError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn catalog_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("milreg-catalog-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"revision": "disk", "blocked_email_domains": ["Example.ORG"]}"#,
    )
    .expect("write catalog");

    let catalog = RuleCatalog::load(&path);
    std::fs::remove_file(&path).ok();
    let catalog = catalog.expect("catalog loads");

    assert_eq!(catalog.revision(), "disk");
    assert_eq!(catalog.len(), RuleId::ordered().len());
}

#[test]
fn rule_ids_serialize_as_their_keys() {
    for id in RuleId::ordered() {
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.key()));
        assert_eq!(id.to_string(), id.key());
    }
}
