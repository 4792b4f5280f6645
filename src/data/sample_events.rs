use crate::models::Event;

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    name: &str,
    description: &str,
    venue: &str,
    date: &str,
    time: &str,
    category: &str,
    city: &str,
    (latitude, longitude): (f64, f64),
    image_url: &str,
) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        venue: venue.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        category: category.to_string(),
        city: city.to_string(),
        latitude,
        longitude,
        image_url: Some(image_url.to_string()),
    }
}

/// Built-in catalog used when no catalog file is configured
pub fn sample_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Summer Music Festival 2024",
            "Join us for an amazing outdoor music festival featuring local and international artists across multiple genres.",
            "Central Park Amphitheater",
            "2024-08-15",
            "6:00 PM",
            "Music",
            "New York",
            (40.7829, -73.9654),
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=500&h=300&fit=crop",
        ),
        event(
            "2",
            "Tech Innovators Conference",
            "Discover the latest trends in technology, AI, and startup culture with industry leaders and entrepreneurs.",
            "Innovation Hub Convention Center",
            "2024-08-20",
            "9:00 AM",
            "Technology",
            "San Francisco",
            (37.7749, -122.4194),
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=500&h=300&fit=crop",
        ),
        event(
            "3",
            "Local Food Truck Rally",
            "Taste amazing street food from 20+ local food trucks, live cooking demos, and family fun activities.",
            "Downtown Plaza",
            "2024-08-10",
            "11:00 AM",
            "Food",
            "Austin",
            (30.2672, -97.7431),
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=500&h=300&fit=crop",
        ),
        event(
            "4",
            "Marathon Training Workshop",
            "Professional training session for marathon preparation with certified coaches and nutritionists.",
            "City Sports Complex",
            "2024-08-12",
            "7:00 AM",
            "Sports",
            "Chicago",
            (41.8781, -87.6298),
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=500&h=300&fit=crop",
        ),
        event(
            "5",
            "Contemporary Art Exhibition",
            "Explore modern art installations from emerging artists, interactive displays, and guided tours.",
            "Modern Art Gallery",
            "2024-08-18",
            "2:00 PM",
            "Art",
            "Los Angeles",
            (34.0522, -118.2437),
            "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=500&h=300&fit=crop",
        ),
        event(
            "6",
            "Business Networking Mixer",
            "Connect with local entrepreneurs, investors, and business professionals in a relaxed setting.",
            "Rooftop Lounge",
            "2024-08-14",
            "6:30 PM",
            "Business",
            "Miami",
            (25.7617, -80.1918),
            "https://images.unsplash.com/photo-1515187029135-18ee286d815b?w=500&h=300&fit=crop",
        ),
        event(
            "7",
            "Coding Bootcamp Workshop",
            "Learn web development fundamentals in this intensive 3-day workshop for beginners.",
            "Tech Academy",
            "2024-08-22",
            "10:00 AM",
            "Education",
            "Seattle",
            (47.6062, -122.3321),
            "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=500&h=300&fit=crop",
        ),
        event(
            "8",
            "Jazz Night at the Garden",
            "Smooth jazz performances under the stars with local musicians and special guest artists.",
            "Botanical Gardens",
            "2024-08-16",
            "7:30 PM",
            "Music",
            "Portland",
            (45.5152, -122.6784),
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=500&h=300&fit=crop",
        ),
    ]
}
