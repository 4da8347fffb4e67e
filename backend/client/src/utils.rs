use places::Place;

pub fn format_place(place: &Place) -> String {
    let coordinates = &place.location.coordinates;

    format!(
        "{} [{}] {}\n    {} ({:.4}, {:.4})\n    Added by {} on {}",
        place.name,
        place.category,
        place.id,
        place.location.address,
        coordinates.lat,
        coordinates.lng,
        place.submitted_by,
        place.created_at.format("%Y-%m-%d"),
    )
}

pub fn format_category(category: &str, count: usize, selected: bool) -> String {
    let mark = if selected { 'x' } else { ' ' };

    format!("[{mark}] {category} ({count})")
}
