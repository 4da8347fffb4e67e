//! # Places CLI
//!
//! Terminal client for the places service. Applies the same client-side
//! rules as the map page:
//!
//! - Category checkboxes start all ticked, `--hide` unticks one
//! - If `/categories` can't be reached the built-in category list is used
//! - The add form is validated locally before anything is sent
//! - After adding, the listing is fetched again
pub mod api;
pub mod utils;

use anyhow::{Result, bail};
use places::{filter::CategoryFilter, form::PlaceForm};

use api::PlacesApi;
use utils::{format_category, format_place};

pub async fn show_categories(api: &PlacesApi) -> Result<()> {
    for category in api.categories().await? {
        println!("{category}");
    }

    Ok(())
}

pub async fn load_filter(api: &PlacesApi) -> CategoryFilter {
    match api.categories().await {
        Ok(categories) => CategoryFilter::new(categories),
        Err(e) => {
            eprintln!("Error fetching categories, using built-in list: {e}");
            CategoryFilter::fallback()
        }
    }
}

pub async fn list_places(
    api: &PlacesApi,
    category: Option<&str>,
    search: Option<&str>,
    hidden: &[String],
) -> Result<()> {
    let mut filter = load_filter(api).await;
    for category in hidden {
        filter.toggle(category, false);
    }

    let places = api.places(category, search).await?;

    for category in filter.categories() {
        println!(
            "{}",
            format_category(
                category,
                CategoryFilter::count(&places, category),
                filter.is_selected(category),
            )
        );
    }

    let visible = filter.visible(&places);
    println!("\nShowing {} of {} places\n", visible.len(), places.len());

    for place in visible {
        println!("{}\n", format_place(place));
    }

    Ok(())
}

pub async fn show_place(api: &PlacesApi, id: &str) -> Result<()> {
    let place = api.place(id).await?;

    println!("{}", format_place(&place));
    println!("\n{}", place.description);

    for image in &place.images {
        println!("  {image}");
    }

    Ok(())
}

pub async fn add_place(api: &PlacesApi, form: &PlaceForm) -> Result<()> {
    let new_place = match form.validate() {
        Ok(place) => place,
        Err(errors) => {
            for (field, message) in &errors.0 {
                eprintln!("{field}: {message}");
            }
            bail!("Place not submitted: {} invalid field(s)", errors.0.len());
        }
    };

    let place = api.create(&new_place).await?;
    println!("Place added successfully!\n{}", format_place(&place));

    let total = api.places(None, None).await?.len();
    println!("\n{total} places listed");

    Ok(())
}

pub async fn delete_place(api: &PlacesApi, id: &str) -> Result<()> {
    let deleted = api.delete(id).await?;

    println!("{}: {}", deleted.message, deleted.place.name);

    Ok(())
}
