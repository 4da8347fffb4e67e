//! Response bodies shared by the server and the client.

use serde::{Deserialize, Serialize};

use crate::place::Place;

#[derive(Serialize, Deserialize, Debug)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PlaceResponse {
    pub place: Place,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeletedResponse {
    pub message: String,
    pub place: Place,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
