use crate::core::parse_event_date;
use crate::models::{Event, EventListing};
use crate::views::favorites::FavoriteSet;

/// External map link centered on the event
pub fn map_url(event: &Event) -> String {
    format!(
        "https://www.google.com/maps?q={},{}",
        event.latitude, event.longitude
    )
}

/// `Aug 15, 2024`, or the raw value when it cannot be parsed
pub fn format_event_date(raw: &str) -> String {
    parse_event_date(raw)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `~1.4 km away`
pub fn format_distance(distance_km: f64) -> String {
    format!("~{:.1} km away", distance_km)
}

/// Render one event card as plain text
pub fn render_card(listing: &EventListing, favorites: &FavoriteSet) -> String {
    let event = &listing.event;
    let heart = if favorites.contains(&event.id) { "♥" } else { "♡" };

    let mut when = format!("  {}", format_event_date(&event.date));
    if !event.time.is_empty() {
        when.push_str(&format!(" · {}", event.time));
    }

    let mut lines = vec![format!("[{}] {} {}", event.category, heart, event.name)];
    if !event.description.is_empty() {
        lines.push(format!("  {}", event.description));
    }
    lines.push(when);
    lines.push(format!("  {}, {}", event.venue, event.city));
    if let Some(d) = listing.distance_km {
        lines.push(format!("  {}", format_distance(d)));
    }
    lines.push(format!("  Map: {}", map_url(event)));

    // Every line, the last included, ends in a newline
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
