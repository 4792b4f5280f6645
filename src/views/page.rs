use crate::core::{EventFinder, FindResult, SortError, SortKey};
use crate::models::{DiscoveryResponse, Event, LocationData};
use crate::views::{
    card::render_card,
    favorites::FavoriteSet,
    filters::{available_categories, available_cities, EventFilters},
};

/// The event list screen: catalog plus the user's current choices
#[derive(Debug, Clone)]
pub struct DiscoveryPage {
    events: Vec<Event>,
    finder: EventFinder,
    pub filters: EventFilters,
    pub sort_by: SortKey,
    pub favorites: FavoriteSet,
}

impl DiscoveryPage {
    pub fn new(events: Vec<Event>, finder: EventFinder) -> Self {
        Self {
            events,
            finder,
            filters: EventFilters::default(),
            sort_by: SortKey::default(),
            favorites: FavoriteSet::new(),
        }
    }

    pub fn available_categories(&self) -> Vec<String> {
        available_categories(&self.events)
    }

    pub fn available_cities(&self) -> Vec<String> {
        available_cities(&self.events)
    }

    /// Run discovery for the given location, if any
    pub fn results(&self, location: Option<&LocationData>) -> Result<FindResult, SortError> {
        let filters = &self.filters;
        self.finder.find(
            &self.events,
            location.map(LocationData::coordinate),
            self.sort_by,
            |event| filters.matches(event),
        )
    }

    pub fn response(&self, location: Option<&LocationData>) -> Result<DiscoveryResponse, SortError> {
        let result = self.results(location)?;
        Ok(DiscoveryResponse {
            total: result.events.len(),
            events: result.events,
            radius_km: self.finder.radius_km(),
            origin: location.map(LocationData::coordinate),
            sort_by: self.sort_by,
        })
    }

    /// Render the whole screen as text
    pub fn render(
        &self,
        location_status: &str,
        location: Option<&LocationData>,
    ) -> Result<String, SortError> {
        let result = self.results(location)?;
        let mut lines = vec![
            "EventSpot".to_string(),
            "Discover Amazing Events Near You".to_string(),
            String::new(),
            format!("Your Location: {}", location_status),
            format!(
                "Category: {} | City: {} | Sort: {}",
                self.filters.category, self.filters.city, self.sort_by
            ),
            String::new(),
        ];

        if result.events.is_empty() {
            lines.push("No Events Found".to_string());
        } else {
            lines.push(format!("Found {} Events", result.events.len()));
        }
        if location.is_some() {
            lines.push(format!(
                "Showing events within {}km of your location",
                self.finder.radius_km()
            ));
        }
        lines.push(String::new());

        if result.events.is_empty() {
            lines.push("Try adjusting your filters or check back later for new events.".to_string());
            if location.is_none() {
                lines.push("Enable location access to see events near you.".to_string());
            }
        } else {
            // Cards end in their own newline; the join adds the blank separator
            lines.extend(
                result
                    .events
                    .iter()
                    .map(|listing| render_card(listing, &self.favorites)),
            );
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_events;
    use crate::views::filters::Selection;

    fn new_york() -> LocationData {
        LocationData {
            latitude: 40.7128,
            longitude: -74.0060,
            city: Some("Current Location".to_string()),
        }
    }

    fn page() -> DiscoveryPage {
        DiscoveryPage::new(sample_events(), EventFinder::default())
    }

    #[test]
    fn test_without_location_lists_everything_by_date() {
        let result = page().results(None).unwrap();

        let ids: Vec<&str> = result.events.iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["3", "4", "6", "1", "8", "5", "2", "7"]);
    }

    #[test]
    fn test_location_limits_to_radius() {
        let result = page().results(Some(&new_york())).unwrap();

        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].id(), "1");
    }

    #[test]
    fn test_render_found_summary() {
        let text = page()
            .render("Current Location • 40.7128, -74.0060", Some(&new_york()))
            .unwrap();

        assert!(text.contains("Found 1 Events"));
        assert!(text.contains("Showing events within 100km of your location"));
        assert!(text.contains("Summer Music Festival 2024"));
    }

    #[test]
    fn test_render_empty_without_location() {
        let mut page = page();
        page.filters.category = Selection::Only("Theatre".to_string());

        let text = page.render("Detecting your location...", None).unwrap();

        assert!(text.contains("No Events Found"));
        assert!(text.contains("Enable location access to see events near you."));
        assert!(!text.contains("Showing events within"));
    }

    #[test]
    fn test_render_header_layout() {
        let text = page().render("Location detection skipped", None).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            &lines[..7],
            &[
                "EventSpot",
                "Discover Amazing Events Near You",
                "",
                "Your Location: Location detection skipped",
                "Category: all | City: all | Sort: date",
                "",
                "Found 8 Events",
            ]
        );
        assert_eq!(lines[7], "");
        assert!(lines[8].starts_with("[Food] "));
        // A blank line separates consecutive cards
        assert_eq!(text.matches("\n\n[").count(), 8);
    }

    #[test]
    fn test_response_carries_context() {
        let mut page = page();
        page.sort_by = SortKey::Distance;

        let response = page.response(Some(&new_york())).unwrap();

        assert_eq!(response.total, 1);
        assert_eq!(response.radius_km, 100.0);
        assert_eq!(response.sort_by, SortKey::Distance);
        assert!(response.origin.is_some());
    }
}
