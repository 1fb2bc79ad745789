use serde::{Deserialize, Serialize};

/// Kind of settlement shown on the coverage map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityKind {
    Capital,
    Regional,
    Major,
}

impl CityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CityKind::Capital => "capital",
            CityKind::Regional => "regional",
            CityKind::Major => "major",
        }
    }

    /// Human-readable name for the marker popup.
    pub fn label(&self) -> &'static str {
        match self {
            CityKind::Capital => "National Capital",
            CityKind::Regional => "Regional Capital",
            CityKind::Major => "Major City",
        }
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A city with registered businesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub position: LatLon,
    pub kind: CityKind,
    pub region: String,
}

impl City {
    /// Coordinates to four decimals, `"5.6037, -0.1870"`.
    pub fn coordinates_label(&self) -> String {
        format!("{:.4}, {:.4}", self.position.lat, self.position.lon)
    }
}

/// Latitude/longitude box used to project cities onto a flat canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Smallest box holding every city, grown by `padding` degrees on each
    /// side. `None` for an empty list.
    pub fn around(cities: &[City], padding: f64) -> Option<Self> {
        let first = cities.first()?.position;
        let mut bounds = GeoBounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for city in &cities[1..] {
            bounds.min_lat = bounds.min_lat.min(city.position.lat);
            bounds.max_lat = bounds.max_lat.max(city.position.lat);
            bounds.min_lon = bounds.min_lon.min(city.position.lon);
            bounds.max_lon = bounds.max_lon.max(city.position.lon);
        }
        bounds.min_lat -= padding;
        bounds.max_lat += padding;
        bounds.min_lon -= padding;
        bounds.max_lon += padding;
        Some(bounds)
    }

    pub fn center(&self) -> LatLon {
        LatLon::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Equirectangular projection into a `width` x `height` canvas with the
    /// origin top-left (north-west).
    pub fn project(&self, position: LatLon, width: f64, height: f64) -> (f64, f64) {
        let lon_span = non_zero(self.max_lon - self.min_lon);
        let lat_span = non_zero(self.max_lat - self.min_lat);
        let x = (position.lon - self.min_lon) / lon_span * width;
        let y = (self.max_lat - position.lat) / lat_span * height;
        (x, y)
    }
}

fn non_zero(span: f64) -> f64 {
    if span.abs() < f64::EPSILON {
        1.0
    } else {
        span
    }
}
