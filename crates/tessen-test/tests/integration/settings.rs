//! Settings drive validation behavior.

use tessen_test::config::{ReportMode, Settings};
use tessen_test::ical::Property;
use tessen_test::validation::{CrossFieldRule, RequestContext, ValidationOptions, Validator};

use super::helpers::completed_reply;

#[test_log::test]
fn default_settings_keep_cross_field_notes_advisory() -> anyhow::Result<()> {
    let settings = Settings::from_toml_str("")?;
    let options = ValidationOptions::from(&settings.validation);

    assert_eq!(options.report, ReportMode::FailFast);
    assert!(!options.enforce_cross_field);

    let reply = completed_reply().with_property(Property::raw("DURATION", "PT2H"));
    assert!(
        Validator::TodoReply
            .validate_with(&reply, &options, &RequestContext::default())
            .is_ok()
    );

    Ok(())
}

#[test_log::test]
fn strict_settings_enforce_due_duration_exclusion() -> anyhow::Result<()> {
    let settings = Settings::from_toml_str(
        r#"
        [validation]
        report = "collect"
        enforce_cross_field = true
        "#,
    )?;
    let options = ValidationOptions::from(&settings.validation);

    let reply = completed_reply().with_property(Property::raw("DURATION", "PT2H"));
    let report = Validator::TodoReply
        .validate_with(&reply, &options, &RequestContext::default())
        .expect_err("DUE and DURATION together should be rejected");

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.first().map(|e| e.to_string()),
        Some(
            "Constraint [DUE/DURATION mutually exclusive] violated: DUE and DURATION must not both be present"
                .to_string()
        )
    );
    assert!(matches!(
        report.first(),
        Some(tessen_test::validation::ValidationError::CrossField {
            rule: CrossFieldRule::MutuallyExclusive("DUE", "DURATION"),
            ..
        })
    ));

    Ok(())
}
