use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use serde::Serialize;

use crate::lookup::PlaceKind;
use crate::typeahead::{Decoration, TypeaheadOption, TypeaheadState};

/// Which search the form is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Flights,
    Hotels,
    Cars,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Flights, SearchMode::Hotels, SearchMode::Cars];

    pub fn fields(self) -> &'static [FieldKind] {
        match self {
            SearchMode::Flights => &[FieldKind::Origin, FieldKind::Destination],
            SearchMode::Hotels => &[FieldKind::Stay],
            SearchMode::Cars => &[FieldKind::PickUp, FieldKind::DropOff],
        }
    }

    pub fn next(self) -> Self {
        match self {
            SearchMode::Flights => SearchMode::Hotels,
            SearchMode::Hotels => SearchMode::Cars,
            SearchMode::Cars => SearchMode::Flights,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SearchMode::Flights => "Flights",
            SearchMode::Hotels => "Hotels",
            SearchMode::Cars => "Cars",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Flights => write!(f, "flights"),
            SearchMode::Hotels => write!(f, "hotels"),
            SearchMode::Cars => write!(f, "cars"),
        }
    }
}

/// A location field of one of the search forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Origin,
    Destination,
    Stay,
    PickUp,
    DropOff,
}

impl FieldKind {
    pub fn title(self) -> &'static str {
        match self {
            FieldKind::Origin => "From",
            FieldKind::Destination => "To",
            FieldKind::Stay => "Destination",
            FieldKind::PickUp => "Pick-up",
            FieldKind::DropOff => "Drop-off",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Origin => "From",
            FieldKind::Destination => "To",
            FieldKind::Stay => "Where are you going?",
            FieldKind::PickUp => "Pick-up location",
            FieldKind::DropOff => "Drop-off location",
        }
    }

    /// Key of the search parameter the committed id is stored under
    pub fn param(self) -> &'static str {
        match self {
            FieldKind::Origin => "origin",
            FieldKind::Destination | FieldKind::Stay => "destination",
            FieldKind::PickUp => "pickup",
            FieldKind::DropOff => "dropoff",
        }
    }

    pub fn place_kinds(self) -> &'static [PlaceKind] {
        match self {
            FieldKind::Origin | FieldKind::Destination => &[PlaceKind::Airport],
            FieldKind::Stay => &[PlaceKind::City, PlaceKind::Hotel],
            FieldKind::PickUp | FieldKind::DropOff => &[PlaceKind::CarRental, PlaceKind::Airport],
        }
    }

    pub fn decoration(self) -> Decoration {
        match self {
            FieldKind::Origin => Decoration::Plane,
            FieldKind::Destination => Decoration::Pin,
            FieldKind::Stay => Decoration::Hotel,
            FieldKind::PickUp | FieldKind::DropOff => Decoration::Car,
        }
    }
}

/// One typeahead field plus the text and selection it controls
#[derive(Debug, Clone)]
pub struct SearchField {
    kind: FieldKind,
    pub value: String,
    pub selected: Option<TypeaheadOption>,
    pub typeahead: TypeaheadState,
    pub(super) pending_request: Option<u64>,
    pub(super) queued_lookup: Option<Instant>,
}

impl SearchField {
    pub fn new(kind: FieldKind, blur_grace: Duration) -> Self {
        Self {
            kind,
            value: String::new(),
            selected: None,
            typeahead: TypeaheadState::with_blur_grace(blur_grace),
            pending_request: None,
            queued_lookup: None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|option| option.id.as_str())
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.pending_request
    }

    pub fn has_queued_lookup(&self) -> bool {
        self.queued_lookup.is_some()
    }

    /// Forget any outstanding lookup; late responses will be discarded
    pub(super) fn cancel_lookup(&mut self) {
        self.pending_request = None;
        self.queued_lookup = None;
        self.typeahead.set_loading(false);
    }
}
