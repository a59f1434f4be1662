//! Sample activities listed under the placeholder results.
//!
//! The bundled list stores each activity as an offset from wherever the user
//! is exploring, so every search area has something nearby to show.

use std::io::Read;

use serde::Deserialize;

use crate::{
    errors::ActivityError,
    geo,
    types::{Category, Location},
    viewport::miles_to_meters,
};

const BUNDLED_ACTIVITIES: &str = include_str!("../data/activities.csv");
const NEARBY_METERS: f64 = 1000.0;
const HIGHLY_RATED: f32 = 4.7;

#[derive(Debug, Deserialize)]
struct ActivityRecord {
    name: String,
    category: String,
    #[serde(default)]
    address: String,
    lat_offset: f64,
    lon_offset: f64,
    price_level: Option<u8>,
    rating: Option<f32>,
    #[serde(default)]
    hours: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleActivity {
    pub name: String,
    pub category: Category,
    pub address: String,
    /// Degrees of latitude and longitude from the search location.
    pub offset: (f64, f64),
    pub price_level: Option<u8>,
    pub rating: Option<f32>,
    pub hours: String,
    pub description: String,
}

impl TryFrom<ActivityRecord> for SampleActivity {
    type Error = ActivityError;

    fn try_from(record: ActivityRecord) -> Result<Self, Self::Error> {
        let category = Category::from_id(&record.category)
            .ok_or(ActivityError::UnknownCategory(record.category))?;
        Ok(Self {
            name: record.name,
            category,
            address: record.address,
            offset: (record.lat_offset, record.lon_offset),
            price_level: record.price_level,
            rating: record.rating,
            hours: record.hours,
            description: record.description,
        })
    }
}

impl SampleActivity {
    pub fn located_near(&self, center: Location) -> Location {
        Location::new(
            center.lat + self.offset.0,
            geo::normalize_lon(center.lon + self.offset.1),
        )
    }
}

/// One row of the activities table, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub name: String,
    pub category: Category,
    pub address: String,
    pub location: Location,
    pub price: &'static str,
    pub rating: Option<f32>,
    pub hours: String,
    pub description: String,
    pub distance_meters: f64,
    pub distance: String,
    pub tags: Vec<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    activities: Vec<SampleActivity>,
}

impl ActivityCatalog {
    pub fn bundled() -> Result<Self, ActivityError> {
        Self::from_reader(BUNDLED_ACTIVITIES.as_bytes())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ActivityError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut activities = Vec::new();
        for record in reader.deserialize::<ActivityRecord>() {
            activities.push(record?.try_into()?);
        }

        Ok(Self { activities })
    }

    pub fn activities(&self) -> &[SampleActivity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activities within `radius_miles` of `center`, limited to `categories`
    /// unless that is empty. Keeps the catalog order.
    pub fn summarize(
        &self,
        center: Location,
        radius_miles: f64,
        categories: &[Category],
    ) -> Vec<ActivitySummary> {
        let radius_meters = miles_to_meters(radius_miles);
        let bounds = geo::circle_bounds(center, radius_meters);

        self.activities
            .iter()
            .filter(|activity| categories.is_empty() || categories.contains(&activity.category))
            .filter_map(|activity| {
                let location = activity.located_near(center);
                if !bounds.contains(location) {
                    return None;
                }
                let distance_meters = geo::haversine_meters(center, location);
                (distance_meters <= radius_meters)
                    .then(|| summary(activity, location, distance_meters))
            })
            .collect()
    }
}

fn summary(
    activity: &SampleActivity,
    location: Location,
    distance_meters: f64,
) -> ActivitySummary {
    ActivitySummary {
        name: activity.name.clone(),
        category: activity.category,
        address: activity.address.clone(),
        location,
        price: price_label(activity.price_level),
        rating: activity.rating,
        hours: hours_label(&activity.hours),
        description: activity.description.clone(),
        distance_meters,
        distance: distance_label(distance_meters),
        tags: tags(activity, distance_meters),
    }
}

pub fn price_label(level: Option<u8>) -> &'static str {
    match level {
        Some(0) => "Free",
        Some(1) => "$",
        Some(2) => "$$",
        Some(3) => "$$$",
        Some(4) => "$$$$",
        _ => "Unknown",
    }
}

/// Meters under a kilometer, kilometers with two decimals otherwise.
pub fn distance_label(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

fn hours_label(hours: &str) -> String {
    if hours.trim().is_empty() {
        "Hours not available".to_string()
    } else {
        hours.to_string()
    }
}

fn tags(activity: &SampleActivity, distance_meters: f64) -> Vec<&'static str> {
    let mut tags = vec![activity.category.label()];

    match activity.price_level {
        Some(0) => tags.push("Free"),
        Some(1) => tags.push("Budget-friendly"),
        Some(4) => tags.push("Luxury"),
        _ => {}
    }
    if activity.rating.is_some_and(|rating| rating >= HIGHLY_RATED) {
        tags.push("Highly rated");
    }
    if distance_meters < NEARBY_METERS {
        tags.push("Nearby");
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: Location = Location {
        lat: 37.7749,
        lon: -122.4194,
    };

    fn names(summaries: &[ActivitySummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = ActivityCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.activities().iter().all(|a| !a.name.is_empty()));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let csv = "name,category,address,lat_offset,lon_offset,price_level,rating,hours,description\n\
                   Bowling,bowling,1 Lane,0,0,1,4.0,,\n";
        assert!(matches!(
            ActivityCatalog::from_reader(csv.as_bytes()),
            Err(ActivityError::UnknownCategory(id)) if id == "bowling"
        ));
    }

    #[test]
    fn test_radius_limits_results() {
        let catalog = ActivityCatalog::bundled().unwrap();

        let within_a_mile = catalog.summarize(SF, 1.0, &[]);
        assert_eq!(
            names(&within_a_mile),
            vec![
                "Historic Park Walking Tour",
                "Fine Dining Restaurant",
                "Waterfront Trail"
            ]
        );
        assert!(within_a_mile
            .iter()
            .all(|s| s.distance_meters <= miles_to_meters(1.0)));

        assert_eq!(catalog.summarize(SF, 5.0, &[]).len(), catalog.len());
        assert!(catalog.summarize(SF, 0.0, &[]).is_empty());
    }

    #[test]
    fn test_categories_filter_results() {
        let catalog = ActivityCatalog::bundled().unwrap();

        let food = catalog.summarize(SF, 1.0, &[Category::Food]);
        assert_eq!(names(&food), vec!["Fine Dining Restaurant"]);

        let dinner = &food[0];
        assert_eq!(dinner.price, "$$$$");
        assert_eq!(dinner.distance, "1.19 km");
        assert_eq!(dinner.tags, vec!["Food & Drink", "Luxury", "Highly rated"]);

        let evening = catalog.summarize(SF, 5.0, &[Category::Nightlife, Category::Sports]);
        assert_eq!(names(&evening), vec!["Rooftop Bar", "Local Sports Game"]);
    }

    #[test]
    fn test_free_nearby_activity() {
        let catalog = ActivityCatalog::bundled().unwrap();
        let trail = catalog
            .summarize(SF, 1.0, &[Category::Outdoors])
            .into_iter()
            .find(|s| s.name == "Waterfront Trail")
            .unwrap();

        assert_eq!(trail.price, "Free");
        assert_eq!(trail.distance, "518 m");
        assert_eq!(trail.hours, "Hours not available");
        assert_eq!(trail.tags, vec!["Outdoors", "Free", "Nearby"]);
    }

    #[test]
    fn test_activities_across_antimeridian() {
        let catalog = ActivityCatalog::bundled().unwrap();
        let fiji = Location::new(-16.85, 179.99);

        let crossing = catalog.summarize(fiji, 2.5, &[]);
        let open_ocean = catalog.summarize(Location::new(-16.85, 170.0), 2.5, &[]);

        assert_eq!(names(&crossing), names(&open_ocean));
        assert!(crossing.iter().any(|s| s.location.lon < 0.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(price_label(Some(2)), "$$");
        assert_eq!(price_label(Some(9)), "Unknown");
        assert_eq!(price_label(None), "Unknown");
        assert_eq!(distance_label(999.4), "999 m");
        assert_eq!(distance_label(2394.0), "2.39 km");
    }
}
