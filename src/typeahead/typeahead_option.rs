use std::fmt;

/// Presentational marker drawn before a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Plane,
    Pin,
    Hotel,
    Car,
}

impl Decoration {
    pub fn glyph(self) -> &'static str {
        match self {
            Decoration::Plane => "✈",
            Decoration::Pin => "•",
            Decoration::Hotel => "⌂",
            Decoration::Car => "▣",
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One selectable entry in the option panel
///
/// `id` only has to be unique within a single options list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadOption {
    pub id: String,
    pub label: String,
    pub secondary_label: Option<String>,
    pub decoration: Option<Decoration>,
}

impl TypeaheadOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            secondary_label: None,
            decoration: None,
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary_label = Some(secondary.into());
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }
}
