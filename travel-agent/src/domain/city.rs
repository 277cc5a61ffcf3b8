//! Cities and case-insensitive city identity.

use std::fmt;

/// A case-folded city name used for lookups and identity.
///
/// City names are matched case-insensitively everywhere: "Cairo", "cairo"
/// and "CAIRO" are the same place.
///
/// # Examples
///
/// ```
/// use travel_agent::domain::CityKey;
///
/// assert_eq!(CityKey::new("New York"), CityKey::new("new york"));
/// assert_eq!(CityKey::new("  Cairo ").as_str(), "cairo");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityKey(String);

impl CityKey {
    /// Fold a city name into its lookup key.
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Returns the folded name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityKey({})", self.0)
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A city with coordinates in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    /// Create a new city.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Returns the lookup key for this city.
    pub fn key(&self) -> CityKey {
        CityKey::new(&self.name)
    }
}
