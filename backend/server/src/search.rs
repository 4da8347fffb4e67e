//! # Listing Filter
//!
//! Turns the optional `category` and `search` query parameters of `GET /places`
//! into a predicate over stored places.
//!
//! - `category`: exact match, skipped when empty or `"all"`
//! - `search`: case-insensitive literal substring, matched against name OR description OR address
//! - Both present: both must hold
//! - Neither present: everything matches
//!
//! Results are ordered newest first by `createdAt`.
use std::cmp::Reverse;

use places::Place;
use serde::Deserialize;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Deserialize, Debug, Default)]
pub struct PlaceQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct PlaceFilter {
    category: Option<String>,
    needle: Option<String>,
}

impl From<PlaceQuery> for PlaceFilter {
    fn from(query: PlaceQuery) -> Self {
        let category = query
            .category
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);
        let needle = query
            .search
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase());

        Self { category, needle }
    }
}

impl PlaceFilter {
    pub fn matches(&self, place: &Place) -> bool {
        if let Some(category) = &self.category {
            if &place.category != category {
                return false;
            }
        }

        match &self.needle {
            Some(needle) => [
                &place.name,
                &place.description,
                &place.location.address,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str())),
            None => true,
        }
    }

    pub fn apply(&self, places: Vec<Place>) -> Vec<Place> {
        let mut places: Vec<Place> = places.into_iter().filter(|p| self.matches(p)).collect();
        places.sort_by_key(|p| Reverse(p.created_at));

        places
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use places::{Coordinates, Location, NewPlace};

    use super::*;

    fn place(name: &str, description: &str, category: &str, address: &str, age: i64) -> Place {
        let epoch = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        NewPlace {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            location: Location {
                address: address.into(),
                coordinates: Coordinates {
                    lat: 59.33,
                    lng: 18.07,
                },
                place_id: None,
            },
            images: vec![],
            submitted_by: "Anonymous".into(),
        }
        .into_place(name.to_lowercase(), epoch - Duration::days(age))
    }

    fn sample() -> Vec<Place> {
        vec![
            place("Vasamuseet", "Warship from 1628", "Museum", "Galärvarvsvägen 14", 3),
            place("Moderna Museet", "Modern art in STOCKHOLM", "Museum", "Exercisplan 4", 1),
            place("Tyresta", "Old-growth forest", "Forest", "Tyresta by, Haninge", 2),
            place("Kaffebar", "Espresso", "Cafe", "Södermalm, Stockholm", 0),
            place("museum shop", "Souvenirs", "Shopping", "Gamla stan", 4),
        ]
    }

    fn filter(category: Option<&str>, search: Option<&str>) -> PlaceFilter {
        PlaceQuery {
            category: category.map(String::from),
            search: search.map(String::from),
        }
        .into()
    }

    fn names(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_filter_newest_first() {
        let result = filter(None, None).apply(sample());

        assert_eq!(
            names(&result),
            ["Kaffebar", "Moderna Museet", "Tyresta", "Vasamuseet", "museum shop"]
        );
    }

    #[test]
    fn test_category_exact() {
        let result = filter(Some("Museum"), None).apply(sample());
        assert_eq!(names(&result), ["Moderna Museet", "Vasamuseet"]);

        assert!(filter(Some("museum"), None).apply(sample()).is_empty());
    }

    #[test]
    fn test_all_and_empty_are_no_filter() {
        assert_eq!(filter(Some("all"), None), PlaceFilter::default());
        assert_eq!(filter(Some(""), Some("")), PlaceFilter::default());
    }

    #[test]
    fn test_search_any_field_case_insensitive() {
        let result = filter(None, Some("Stockholm")).apply(sample());

        assert_eq!(names(&result), ["Kaffebar", "Moderna Museet"]);
    }

    #[test]
    fn test_search_is_literal() {
        assert!(filter(None, Some("Vasa.*")).apply(sample()).is_empty());
        assert_eq!(filter(None, Some("old-growth")).apply(sample()).len(), 1);
    }

    #[test]
    fn test_category_and_search() {
        let result = filter(Some("Museum"), Some("muse")).apply(sample());

        assert_eq!(names(&result), ["Moderna Museet", "Vasamuseet"]);
    }
}
