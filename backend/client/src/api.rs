use anyhow::{Context, Result, bail};
use places::{
    NewPlace, Place,
    payloads::{CategoriesResponse, DeletedResponse, ErrorResponse, PlaceResponse, PlacesResponse},
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

pub const DEFAULT_SERVER: &str = "http://localhost:8080";

pub struct PlacesApi {
    client: Client,
    base: String,
}

impl PlacesApi {
    pub fn new(base: &str) -> Self {
        Self {
            client: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        let res = self.client.get(self.url("/categories")).send().await?;

        Ok(read::<CategoriesResponse>(res).await?.categories)
    }

    pub async fn places(&self, category: Option<&str>, search: Option<&str>) -> Result<Vec<Place>> {
        let mut query = Vec::new();
        if let Some(category) = category {
            query.push(("category", category));
        }
        if let Some(search) = search {
            query.push(("search", search));
        }

        let res = self
            .client
            .get(self.url("/places"))
            .query(&query)
            .send()
            .await?;

        Ok(read::<PlacesResponse>(res).await?.places)
    }

    pub async fn place(&self, id: &str) -> Result<Place> {
        let res = self
            .client
            .get(self.url(&format!("/places/{id}")))
            .send()
            .await?;

        Ok(read::<PlaceResponse>(res).await?.place)
    }

    pub async fn create(&self, place: &NewPlace) -> Result<Place> {
        let res = self
            .client
            .post(self.url("/places"))
            .json(place)
            .send()
            .await?;

        Ok(read::<PlaceResponse>(res).await?.place)
    }

    pub async fn delete(&self, id: &str) -> Result<DeletedResponse> {
        let res = self
            .client
            .delete(self.url(&format!("/places/{id}")))
            .send()
            .await?;

        read(res).await
    }
}

async fn read<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|e| e.error)
            .unwrap_or(text);
        bail!("{status}: {message}");
    }

    serde_json::from_str(&text).with_context(|| format!("Unexpected response body: {text}"))
}
