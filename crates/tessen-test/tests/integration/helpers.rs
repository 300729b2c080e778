//! Shared builders for reply trees.

use tessen_test::ical::{Component, ICalendar, Parameter, Property};

pub const TODO_UID: &str = "20260318T101500Z-4421@tasks.example.org";

/// ## Summary
/// A VTODO REPLY in which one attendee marks the task completed.
pub fn completed_reply() -> Component {
    Component::todo()
        .with_property(Property::cal_address("ORGANIZER", "mailto:lead@example.org"))
        .with_property(
            Property::cal_address("ATTENDEE", "mailto:dev@example.org")
                .with_param(Parameter::partstat("COMPLETED")),
        )
        .with_property(Property::raw("DTSTAMP", "20260320T083000Z"))
        .with_property(Property::text("UID", TODO_UID))
        .with_property(Property::integer("SEQUENCE", 1))
        .with_property(Property::integer("PERCENT-COMPLETE", 100))
        .with_property(Property::raw("DUE", "20260321T170000Z"))
}

/// ## Summary
/// The REQUEST the reply above answers.
pub fn original_request() -> Component {
    Component::todo()
        .with_property(Property::cal_address("ORGANIZER", "mailto:lead@example.org"))
        .with_property(Property::cal_address("ATTENDEE", "mailto:dev@example.org"))
        .with_property(Property::raw("DTSTAMP", "20260318T101500Z"))
        .with_property(Property::text("UID", TODO_UID))
        .with_property(Property::integer("SEQUENCE", 1))
        .with_property(Property::text("SUMMARY", "Rotate signing keys"))
}

pub fn reply_message(todos: Vec<Component>) -> ICalendar {
    let mut ical = ICalendar::new("-//Example Corp//Tasks 2.1//EN");
    ical.root.add_property(Property::text("METHOD", "REPLY"));
    for todo in todos {
        ical.add_component(todo);
    }
    ical
}
