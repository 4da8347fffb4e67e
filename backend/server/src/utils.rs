use axum::{Json, extract::rejection::JsonRejection};
use places::{Location, NewPlace, place::ANONYMOUS};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError::{self, MalformedPayload, MissingFields};

/// Body of `POST /places`. Every field is optional here so a missing one
/// turns into a 400 with the field list instead of a decode error.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<Location>,
    pub images: Option<Vec<String>>,
    pub submitted_by: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn get_new_place(
    payload: Result<Json<CreatePlaceRequest>, JsonRejection>,
) -> Result<NewPlace, AppError> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected place payload: {e}");
        MalformedPayload
    })?;

    let (Some(name), Some(description), Some(category), Some(location)) = (
        present(request.name),
        present(request.description),
        present(request.category),
        request.location,
    ) else {
        return Err(MissingFields);
    };

    Ok(NewPlace {
        name,
        description,
        category,
        location,
        images: request.images.unwrap_or_default(),
        submitted_by: present(request.submitted_by).unwrap_or_else(|| ANONYMOUS.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use places::Coordinates;

    use super::*;

    fn location() -> Location {
        Location {
            address: "Slottsbacken 1".into(),
            coordinates: Coordinates {
                lat: 59.3268,
                lng: 18.0717,
            },
            place_id: None,
        }
    }

    fn request() -> CreatePlaceRequest {
        CreatePlaceRequest {
            name: Some("Kungliga slottet".into()),
            description: Some("The Royal Palace".into()),
            category: Some("Museum".into()),
            location: Some(location()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let place = get_new_place(Ok(Json(request()))).unwrap();

        assert!(place.images.is_empty());
        assert_eq!(place.submitted_by, "Anonymous");
    }

    #[test]
    fn test_missing_or_empty_fields() {
        let mut missing_name = request();
        missing_name.name = None;
        assert!(matches!(get_new_place(Ok(Json(missing_name))), Err(MissingFields)));

        let mut empty_category = request();
        empty_category.category = Some(String::new());
        assert!(matches!(get_new_place(Ok(Json(empty_category))), Err(MissingFields)));

        let mut missing_location = request();
        missing_location.location = None;
        assert!(matches!(get_new_place(Ok(Json(missing_location))), Err(MissingFields)));
    }

    #[test]
    fn test_optional_fields_kept() {
        let mut request = request();
        request.images = Some(vec!["https://example.com/slottet.jpg".into()]);
        request.submitted_by = Some("Gustav".into());

        let place = get_new_place(Ok(Json(request))).unwrap();
        assert_eq!(place.images.len(), 1);
        assert_eq!(place.submitted_by, "Gustav");
    }
}
