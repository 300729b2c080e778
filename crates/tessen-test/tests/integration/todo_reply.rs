//! End-to-end checks of VTODO REPLY messages.

use tessen_test::ical::{Component, ComponentKind, Property};
use tessen_test::validation::{
    Cardinality, CrossFieldRule, ReportMode, RequestContext, RfcError, Scope, ValidationError,
    ValidationOptions, Validator,
};

use super::helpers::*;

#[test_log::test]
fn completed_reply_is_accepted() {
    let validator = Validator::select(ComponentKind::Todo, "REPLY").expect("supported pair");

    assert!(validator.validate(&completed_reply()).is_ok());
}

#[test]
fn unsupported_pair_is_an_error() {
    match Validator::select(ComponentKind::Todo, "COUNTER") {
        Err(RfcError::UnsupportedMethod { component, method }) => {
            assert_eq!(component, "VTODO");
            assert_eq!(method, "COUNTER");
        }
        other => panic!("Expected UnsupportedMethod, got {other:?}"),
    }
}

#[test_log::test]
fn reply_without_attendee_is_rejected() {
    let mut reply = completed_reply();
    reply.remove_properties("ATTENDEE");

    let err = Validator::TodoReply.validate(&reply).unwrap_err();
    tracing::debug!(%err, "Rejected reply");

    assert_eq!(err.scope(), Some(Scope::Property));
    assert_eq!(err.name(), "ATTENDEE");
    assert_eq!(err.expected(), Some(Cardinality::OneOrMore));
    assert_eq!(err.actual(), Some(0));
    assert_eq!(
        err.to_string(),
        "Property [ATTENDEE] must be specified at least once (expected 1+, found 0)"
    );
}

#[test]
fn validation_error_converts_into_rfc_error() {
    fn check(reply: &Component) -> tessen_test::validation::RfcResult<()> {
        Validator::TodoReply.validate(reply)?;
        Ok(())
    }

    let reply = completed_reply().with_child(Component::alarm());

    match check(&reply) {
        Err(RfcError::Validation(ValidationError::Cardinality { name, .. })) => {
            assert_eq!(name, "VALARM");
        }
        other => panic!("Expected a VALARM validation error, got {other:?}"),
    }
}

#[test]
fn lowercase_names_from_lenient_parser_are_counted() {
    let mut reply = completed_reply();
    reply.add_property(Property {
        name: "dtstamp".to_string(),
        ..Property::raw("DTSTAMP", "20260320T083100Z")
    });

    let err = Validator::TodoReply.validate(&reply).unwrap_err();
    assert_eq!(err.name(), "DTSTAMP");
    assert_eq!(err.actual(), Some(2));
}

#[test]
fn collecting_mode_lists_every_problem() {
    let reply = completed_reply()
        .with_property(Property::integer("PERCENT-COMPLETE", 50))
        .with_property(Property::text("UID", "second@example.org"))
        .with_child(Component::alarm());

    let options = ValidationOptions {
        report: ReportMode::Collect,
        enforce_cross_field: false,
    };
    let report = Validator::TodoReply
        .validate_with(&reply, &options, &RequestContext::default())
        .unwrap_err();

    let summary: Vec<(&str, Option<usize>)> = report
        .errors()
        .iter()
        .map(|e| (e.name(), e.actual()))
        .collect();
    assert_eq!(
        summary,
        [
            ("UID", Some(2)),
            ("PERCENT-COMPLETE", Some(2)),
            ("VALARM", Some(1)),
        ]
    );
}

#[test]
fn message_level_validation_against_request() {
    let context = RequestContext::from_request(&original_request());
    let options = ValidationOptions {
        report: ReportMode::Collect,
        enforce_cross_field: true,
    };

    let ok = reply_message(vec![completed_reply()]);
    assert!(
        Validator::TodoReply
            .validate_calendar(&ok, &options, &context)
            .is_ok()
    );

    let mut stale = completed_reply();
    stale.remove_properties("SEQUENCE");
    let stale = stale.with_property(Property::integer("SEQUENCE", 3));
    let report = Validator::TodoReply
        .validate_calendar(&reply_message(vec![stale]), &options, &context)
        .unwrap_err();

    assert_eq!(report.len(), 1);
    assert!(matches!(
        report.first(),
        Some(ValidationError::CrossField {
            rule: CrossFieldRule::SequenceMatchesRequest,
            ..
        })
    ));
}

#[test]
fn validators_are_shareable_across_threads() {
    let reply = std::sync::Arc::new(completed_reply());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reply = std::sync::Arc::clone(&reply);
            std::thread::spawn(move || Validator::TodoReply.validate(&reply))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("validator thread panicked"), Ok(()));
    }
}
