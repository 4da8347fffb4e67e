use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

/// A stored place document.
///
/// `images` and `submittedBy` may be missing from older documents and fall
/// back to their defaults when read.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "anonymous")]
    pub submitted_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a place. The store assigns the id and timestamps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlace {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "anonymous")]
    pub submitted_by: String,
}

impl NewPlace {
    pub fn into_place(self, id: String, now: DateTime<Utc>) -> Place {
        Place {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            location: self.location,
            images: self.images,
            submitted_by: self.submitted_by,
            created_at: now,
            updated_at: now,
        }
    }
}

fn anonymous() -> String {
    ANONYMOUS.to_string()
}
