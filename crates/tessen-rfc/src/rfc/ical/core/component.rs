//! Component tree (RFC 5545 §3.4-3.6).

use super::{Property, names};

/// Which component a [`Component`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
    Todo,
    Journal,
    FreeBusy,
    Timezone,
    /// Nested within VEVENT/VTODO.
    Alarm,
    /// Observance inside VTIMEZONE.
    Standard,
    /// Observance inside VTIMEZONE.
    Daylight,
    /// X- or IANA component the model has no variant for.
    Unknown,
}

const KNOWN_KINDS: [ComponentKind; 9] = [
    ComponentKind::Calendar,
    ComponentKind::Event,
    ComponentKind::Todo,
    ComponentKind::Journal,
    ComponentKind::FreeBusy,
    ComponentKind::Timezone,
    ComponentKind::Alarm,
    ComponentKind::Standard,
    ComponentKind::Daylight,
];

impl ComponentKind {
    /// Wire name, e.g. `VTODO`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Maps a wire name onto a kind, ignoring ASCII case. Anything
    /// unrecognised is [`ComponentKind::Unknown`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        KNOWN_KINDS
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component as handed over by a parser: ordered properties (duplicates
/// kept) and nested sub-components, e.g. a VTODO holding VALARMs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    pub kind: Option<ComponentKind>,
    /// Name as written; the only identity an X-component has.
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind: Some(kind),
            name: kind.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Builds a component from its wire name, keeping the name verbatim.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: Some(ComponentKind::parse(&name)),
            name,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    #[must_use]
    pub fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    #[must_use]
    pub fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    #[must_use]
    pub fn with_property(mut self, prop: Property) -> Self {
        self.add_property(prop);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Component) -> Self {
        self.add_child(child);
        self
    }

    /// Drops every occurrence of `name` and reports how many went.
    pub fn remove_properties(&mut self, name: &str) -> usize {
        let before = self.properties.len();
        self.properties.retain(|p| !p.is_named(name));
        before - self.properties.len()
    }

    /// First occurrence of `name`, matched case-insensitively.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is_named(name))
    }

    /// UID as text, or its raw value when the parser did not type it.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID).map(Property::text_value)
    }

    /// SEQUENCE as an integer, parsing a raw value if needed. `None` when
    /// absent or not a number.
    #[must_use]
    pub fn sequence(&self) -> Option<i32> {
        self.get_property(names::SEQUENCE)?.integer_value()
    }

    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children
            .iter()
            .filter(|c| c.kind == Some(kind))
            .collect()
    }
}

/// An iCalendar object: a VCALENDAR root carrying VERSION and PRODID.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let root = Component::calendar()
            .with_property(Property::text("VERSION", "2.0"))
            .with_property(Property::text("PRODID", prodid));
        Self { root }
    }

    /// Appends a component below the VCALENDAR root.
    pub fn add_component(&mut self, component: Component) {
        self.root.add_child(component);
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new("-//Tessen//Tessen iTIP Validator//EN")
    }
}
