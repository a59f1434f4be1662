use super::Location;

/// An autocomplete candidate. A place without a location is malformed and
/// cannot be selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub location: Option<Location>,
}

impl Place {
    pub fn new(name: String, address: String, location: Option<Location>) -> Self {
        Self {
            name,
            address,
            location,
        }
    }
}
