use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::{Deserialize, Serialize};

use crate::error::TripseekError;
use crate::typeahead::{Decoration, TypeaheadOption};

const BUILTIN_CATALOG: &str = include_str!("places.json");

/// Bonus that puts an exact code match ("lhr" for LHR) ahead of fuzzy hits
const EXACT_ID_BONUS: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Airport,
    City,
    Hotel,
    CarRental,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub kind: PlaceKind,
}

impl Place {
    /// Name as shown in an option row; airports carry their code
    pub fn display_name(&self) -> String {
        match self.kind {
            PlaceKind::Airport => format!("{} ({})", self.name, self.id),
            _ => self.name.clone(),
        }
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn to_option(&self, decoration: Decoration) -> TypeaheadOption {
        TypeaheadOption::new(self.id.clone(), self.display_name())
            .with_secondary(self.location())
            .with_decoration(decoration)
    }

    fn search_text(&self) -> String {
        format!("{} {} {} {}", self.name, self.id, self.city, self.country)
    }
}

/// Searchable set of places
pub struct Catalog {
    places: Vec<Place>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("places", &self.places.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    pub fn new(places: Vec<Place>) -> Result<Self, TripseekError> {
        if places.is_empty() {
            return Err(TripseekError::InvalidCatalog("no places".to_string()));
        }

        let mut seen = HashSet::new();
        for place in &places {
            if place.id.trim().is_empty() {
                return Err(TripseekError::InvalidCatalog(format!(
                    "place \"{}\" has an empty id",
                    place.name
                )));
            }
            if !seen.insert(place.id.as_str()) {
                return Err(TripseekError::InvalidCatalog(format!(
                    "duplicate place id \"{}\"",
                    place.id
                )));
            }
        }

        Ok(Self {
            places,
            matcher: SkimMatcherV2::default(),
        })
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self, TripseekError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(content: &str) -> Result<Self, TripseekError> {
        let places: Vec<Place> = serde_json::from_str(content)
            .map_err(|e| TripseekError::InvalidCatalog(e.to_string()))?;
        Self::new(places)
    }

    pub fn load(path: &Path) -> Result<Self, TripseekError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        log::debug!("Loaded {} places from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Best matches for `query` among places of the given kinds
    ///
    /// Every whitespace-separated term must match somewhere in the place's
    /// name, id, city or country. Ties are broken by name.
    pub fn search(&self, query: &str, kinds: &[PlaceKind], limit: usize) -> Vec<Place> {
        let query = query.trim().to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(i64, &Place)> = self
            .places
            .iter()
            .filter(|place| kinds.contains(&place.kind))
            .filter_map(|place| self.score(place, &query, &terms).map(|score| (score, place)))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, place)| place.clone())
            .collect()
    }

    fn score(&self, place: &Place, query: &str, terms: &[&str]) -> Option<i64> {
        let haystack = place.search_text();
        let mut total: i64 = 0;
        for term in terms {
            total += self.matcher.fuzzy_match(&haystack, term)?;
        }
        if place.id.eq_ignore_ascii_case(query) {
            total += EXACT_ID_BONUS;
        }
        Some(total)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
