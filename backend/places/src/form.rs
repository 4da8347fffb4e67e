use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use crate::{
    category::Category,
    place::{ANONYMOUS, Coordinates, Location, NewPlace},
};

pub const MAX_NAME: usize = 100;
pub const MAX_DESCRIPTION: usize = 500;
pub const MAX_ADDRESS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Description,
    Category,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Category => "category",
            Field::Address => "address",
        })
    }
}

#[derive(Error, Debug, Default, PartialEq, Eq)]
#[error("{}", render(.0))]
pub struct FormErrors(pub BTreeMap<Field, &'static str>);

fn render(errors: &BTreeMap<Field, &'static str>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw values typed into the "add place" form.
#[derive(Clone, Debug, Default)]
pub struct PlaceForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub place_id: Option<String>,
    pub images: Vec<String>,
    pub submitted_by: Option<String>,
}

impl PlaceForm {
    /// Checks presence and length bounds, then builds the trimmed submission.
    pub fn validate(&self) -> Result<NewPlace, FormErrors> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        } else if self.name.chars().count() > MAX_NAME {
            errors.insert(Field::Name, "Name must be less than 100 characters");
        }

        if self.description.trim().is_empty() {
            errors.insert(Field::Description, "Description is required");
        } else if self.description.chars().count() > MAX_DESCRIPTION {
            errors.insert(
                Field::Description,
                "Description must be less than 500 characters",
            );
        }

        if self.category.is_empty() {
            errors.insert(Field::Category, "Please select a category");
        } else if self.category.parse::<Category>().is_err() {
            errors.insert(Field::Category, "Unknown category");
        }

        if self.address.trim().is_empty() {
            errors.insert(Field::Address, "Address is required");
        } else if self.address.chars().count() > MAX_ADDRESS {
            errors.insert(Field::Address, "Address must be less than 200 characters");
        }

        if !errors.is_empty() {
            return Err(FormErrors(errors));
        }

        Ok(NewPlace {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            location: Location {
                address: self.address.trim().to_string(),
                coordinates: Coordinates {
                    lat: self.lat,
                    lng: self.lng,
                },
                place_id: self.place_id.clone().filter(|id| !id.is_empty()),
            },
            images: self.images.clone(),
            submitted_by: self
                .submitted_by
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(ANONYMOUS)
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PlaceForm {
        PlaceForm {
            name: "  Rosendals Trädgård ".into(),
            description: "Garden café on Djurgården".into(),
            category: "Cafe".into(),
            address: "Rosendalsterrassen 12".into(),
            lat: 59.3267,
            lng: 18.1153,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_trims() {
        let place = form().validate().unwrap();

        assert_eq!(place.name, "Rosendals Trädgård");
        assert_eq!(place.submitted_by, "Anonymous");
        assert_eq!(place.location.place_id, None);
    }

    #[test]
    fn test_required_fields() {
        let errors = PlaceForm::default().validate().unwrap_err();

        assert_eq!(errors.0.len(), 4);
        assert_eq!(errors.0[&Field::Name], "Name is required");
        assert_eq!(errors.0[&Field::Category], "Please select a category");
    }

    #[test]
    fn test_whitespace_is_missing() {
        let mut form = form();
        form.description = "   ".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0[&Field::Description], "Description is required");
    }

    #[test]
    fn test_length_bounds() {
        let mut form = form();
        form.name = "a".repeat(MAX_NAME);
        form.description = "b".repeat(MAX_DESCRIPTION + 1);
        form.address = "c".repeat(MAX_ADDRESS + 1);

        let errors = form.validate().unwrap_err();
        assert!(!errors.0.contains_key(&Field::Name));
        assert_eq!(
            errors.0[&Field::Description],
            "Description must be less than 500 characters"
        );
        assert_eq!(
            errors.0[&Field::Address],
            "Address must be less than 200 characters"
        );
    }

    #[test]
    fn test_unknown_category() {
        let mut form = form();
        form.category = "Sauna".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0[&Field::Category], "Unknown category");
        assert_eq!(errors.to_string(), "category: Unknown category");
    }

    #[test]
    fn test_submitted_by_kept() {
        let mut form = form();
        form.submitted_by = Some(" Greta ".into());

        assert_eq!(form.validate().unwrap().submitted_by, "Greta");
    }
}
