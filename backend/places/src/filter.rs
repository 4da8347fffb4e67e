use std::collections::HashSet;

use crate::{category::Category, place::Place};

/// Category checkboxes on the map.
///
/// Starts with every known category selected. The visible marker set is
/// derived from the fetched places on every call.
#[derive(Clone, Debug)]
pub struct CategoryFilter {
    categories: Vec<String>,
    selected: HashSet<String>,
}

impl CategoryFilter {
    pub fn new(categories: Vec<String>) -> Self {
        let selected = categories.iter().cloned().collect();

        Self {
            categories,
            selected,
        }
    }

    /// Used when the categories endpoint can't be reached.
    pub fn fallback() -> Self {
        Self::new(Category::names())
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    pub fn toggle(&mut self, category: &str, checked: bool) {
        if checked {
            self.selected.insert(category.to_string());
        } else {
            self.selected.remove(category);
        }
    }

    pub fn visible<'a>(&self, places: &'a [Place]) -> Vec<&'a Place> {
        places
            .iter()
            .filter(|place| self.selected.contains(&place.category))
            .collect()
    }

    pub fn count(places: &[Place], category: &str) -> usize {
        places
            .iter()
            .filter(|place| place.category == category)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::place::{Coordinates, Location, NewPlace};

    fn place(name: &str, category: &str) -> Place {
        NewPlace {
            name: name.into(),
            description: format!("{name} in Stockholm"),
            category: category.into(),
            location: Location {
                address: "Stockholm".into(),
                coordinates: Coordinates {
                    lat: 59.3293,
                    lng: 18.0686,
                },
                place_id: None,
            },
            images: vec![],
            submitted_by: "Anonymous".into(),
        }
        .into_place(name.to_lowercase(), Utc::now())
    }

    fn sample() -> Vec<Place> {
        vec![
            place("Vete-Katten", "Cafe"),
            place("Drop Coffee", "Cafe"),
            place("Vasamuseet", "Museum"),
            place("Humlegården", "Park"),
        ]
    }

    #[test]
    fn test_everything_selected_initially() {
        let places = sample();
        let filter = CategoryFilter::fallback();

        assert_eq!(filter.categories().len(), Category::ALL.len());
        assert_eq!(filter.visible(&places).len(), 4);
    }

    #[test]
    fn test_toggle_off_and_on() {
        let places = sample();
        let mut filter = CategoryFilter::fallback();

        filter.toggle("Cafe", false);
        let visible = filter.visible(&places);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category != "Cafe"));
        assert!(!filter.is_selected("Cafe"));

        filter.toggle("Cafe", true);
        assert_eq!(filter.visible(&places).len(), 4);
    }

    #[test]
    fn test_unknown_category_hidden() {
        let places = vec![place("Mystery", "Sauna")];
        let filter = CategoryFilter::fallback();

        assert!(filter.visible(&places).is_empty());
    }

    #[test]
    fn test_counts() {
        let places = sample();

        assert_eq!(CategoryFilter::count(&places, "Cafe"), 2);
        assert_eq!(CategoryFilter::count(&places, "Beach"), 0);
    }
}
