use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{
    errors::{GazetteerError, GeocodeError},
    types::{Location, Place},
};

const BUNDLED_PLACES: &str = include_str!("../data/places.csv");

/// Turns what the user typed or picked into a location.
///
/// This is the seam to whatever answers address lookups; the explorer only
/// reacts to the outcome and never retries.
pub trait Geocoder {
    /// Resolves free text to a location.
    fn geocode(&self, address: &str) -> Result<Location, GeocodeError>;

    /// Autocomplete candidates for partially typed text, best first.
    fn suggest(&self, input: &str, limit: usize) -> Vec<Place>;

    /// Location of an autocomplete selection.
    fn resolve(&self, place: &Place) -> Result<Location, GeocodeError> {
        place
            .location
            .ok_or_else(|| GeocodeError::PlaceNotFound(place.name.clone()))
    }
}

#[derive(Debug, Deserialize)]
struct PlaceRecord {
    name: String,
    #[serde(default)]
    address: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        let location = match (record.lat, record.lon) {
            (Some(lat), Some(lon)) => Some(Location::new(lat, lon)),
            _ => None,
        };
        Place::new(record.name, record.address, location)
    }
}

/// An offline list of named places read from CSV (`name,address,lat,lon`).
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: Vec<Place>,
}

impl Gazetteer {
    /// The place list shipped with the explorer.
    pub fn bundled() -> Result<Self, GazetteerError> {
        Self::from_reader(BUNDLED_PLACES.as_bytes())
    }

    pub fn from_path(path: &Path) -> Result<Self, GazetteerError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GazetteerError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut places = Vec::new();
        for record in reader.deserialize::<PlaceRecord>() {
            places.push(record?.into());
        }

        Ok(Self { places })
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn ranked<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Place> + 'a {
        let exact = self.places.iter().filter(move |p| normalize(&p.name) == query);
        let prefix = self.places.iter().filter(move |p| {
            let name = normalize(&p.name);
            name != query && (name.starts_with(query) || normalize(&p.address).starts_with(query))
        });
        let partial = self.places.iter().filter(move |p| {
            let name = normalize(&p.name);
            let address = normalize(&p.address);
            !name.starts_with(query)
                && !address.starts_with(query)
                && (name.contains(query) || address.contains(query))
        });
        exact.chain(prefix).chain(partial)
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, address: &str) -> Result<Location, GeocodeError> {
        let query = normalize(address);
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let found = self.ranked(&query).find_map(|place| place.location);
        found.ok_or_else(|| GeocodeError::NotFound(address.trim().to_string()))
    }

    fn suggest(&self, input: &str, limit: usize) -> Vec<Place> {
        let query = normalize(input);
        if query.is_empty() {
            return Vec::new();
        }
        self.ranked(&query).take(limit).cloned().collect()
    }
}

/// Lowercases and collapses runs of whitespace.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
