//! Mocked figures shown on the dashboard. Nothing here is fetched.

use shared_types::{City, CityKind, LatLon, Region};
use shared_ui::CardAccent;

/// One headline tile on the dashboard.
pub struct StatTile {
    pub title: &'static str,
    pub value: u64,
    pub subtitle: &'static str,
    /// Key understood by [`crate::icons::icon`].
    pub icon: &'static str,
    pub trend: &'static str,
    pub accent: CardAccent,
    pub progress: f64,
}

pub const STAT_TILES: &[StatTile] = &[
    StatTile {
        title: "Users",
        value: 12_023,
        subtitle: "Registered Businesses",
        icon: "users",
        trend: "+12.5%",
        accent: CardAccent::Green,
        progress: 75.0,
    },
    StatTile {
        title: "Revenue",
        value: 8_547,
        subtitle: "Active Inspections",
        icon: "file-text",
        trend: "+23.4%",
        accent: CardAccent::Blue,
        progress: 85.0,
    },
    StatTile {
        title: "",
        value: 312,
        subtitle: "Pending Approvals",
        icon: "clock",
        trend: "+8.7%",
        accent: CardAccent::Violet,
        progress: 92.0,
    },
    StatTile {
        title: "",
        value: 892_902,
        subtitle: "Total Revenue",
        icon: "dollar-sign",
        trend: "+8.7%",
        accent: CardAccent::Violet,
        progress: 65.0,
    },
    StatTile {
        title: "",
        value: 26,
        subtitle: "Compliance Rate",
        icon: "shield",
        trend: "+8.7%",
        accent: CardAccent::Teal,
        progress: 65.0,
    },
    StatTile {
        title: "",
        value: 17_290,
        subtitle: "Field Agents",
        icon: "briefcase",
        trend: "+8.7%",
        accent: CardAccent::Amber,
        progress: 65.0,
    },
];

pub fn regions() -> Vec<Region> {
    [
        (1, "Greater Accra", 5241, 78, 1_245_300),
        (2, "Ashanti", 4328, 71, 987_600),
        (3, "Western", 3126, 65, 724_500),
        (4, "Eastern", 2987, 68, 643_200),
        (5, "Central", 2156, 73, 522_400),
    ]
    .into_iter()
    .map(|(id, name, businesses, compliance, revenue_value)| Region {
        id,
        name: name.to_string(),
        businesses,
        compliance,
        revenue_value,
    })
    .collect()
}

const CITIES: &[(&str, f64, f64, CityKind, &str)] = &[
    ("Accra", 5.6037, -0.1870, CityKind::Capital, "Greater Accra"),
    ("Kumasi", 6.7000, -1.6167, CityKind::Regional, "Ashanti"),
    ("Tamale", 9.4000, -0.8500, CityKind::Regional, "Northern"),
    ("Sekondi-Takoradi", 4.9433, -1.7040, CityKind::Regional, "Western"),
    ("Sunyani", 7.3333, -2.3333, CityKind::Regional, "Bono"),
    ("Ho", 6.6000, 0.4667, CityKind::Regional, "Volta"),
    ("Bolgatanga", 10.7833, -0.8500, CityKind::Regional, "Upper East"),
    ("Wa", 10.0667, -2.5000, CityKind::Regional, "Upper West"),
    ("Cape Coast", 5.1000, -1.2500, CityKind::Regional, "Central"),
    ("Koforidua", 6.0833, -0.2500, CityKind::Regional, "Eastern"),
    ("Nkawkaw", 6.5500, -0.7667, CityKind::Major, "Eastern"),
    ("Techiman", 7.5833, -1.9333, CityKind::Regional, "Bono East"),
    ("Dambai", 8.0667, -0.1667, CityKind::Regional, "Oti"),
    ("Damongo", 9.0833, -1.8167, CityKind::Regional, "Savannah"),
    ("Goaso", 6.8000, -2.5167, CityKind::Regional, "Ahafo"),
    ("Sefwi Wiawso", 6.2000, -2.4833, CityKind::Regional, "Western North"),
    ("Tema", 5.6667, -0.0167, CityKind::Major, "Greater Accra"),
    ("Obuasi", 6.2000, -1.6667, CityKind::Major, "Ashanti"),
    ("Tarkwa", 5.3000, -1.9833, CityKind::Major, "Western"),
    ("Elmina", 5.0833, -1.3500, CityKind::Major, "Central"),
    ("Axim", 4.8667, -2.2333, CityKind::Major, "Western"),
    ("Berekum", 7.4500, -2.5833, CityKind::Major, "Bono"),
    ("Winneba", 5.3333, -0.6333, CityKind::Major, "Central"),
    ("Hohoe", 7.1500, 0.4667, CityKind::Major, "Volta"),
    ("Yendi", 9.4333, -0.0167, CityKind::Major, "Northern"),
    ("Bawku", 11.0500, -0.2333, CityKind::Major, "Upper East"),
    ("Navrongo", 10.8833, -1.0833, CityKind::Major, "Upper East"),
    ("Ejura", 7.3833, -1.3667, CityKind::Major, "Ashanti"),
    ("Konongo", 6.6167, -1.2167, CityKind::Major, "Ashanti"),
    ("Nsawam", 5.8000, -0.3500, CityKind::Major, "Eastern"),
    ("Akim Oda", 5.9167, -0.9833, CityKind::Major, "Eastern"),
    ("Asamankese", 5.8667, -0.6667, CityKind::Major, "Eastern"),
    ("Saltpond", 5.2000, -1.0667, CityKind::Major, "Central"),
    ("Dunkwa-on-Offin", 5.9667, -1.7833, CityKind::Major, "Central"),
    ("Prestea", 5.4333, -2.1500, CityKind::Major, "Western"),
    ("Bibiani", 6.4667, -2.3333, CityKind::Major, "Western North"),
    ("Suhum", 6.0333, -0.4500, CityKind::Major, "Eastern"),
    ("Agogo", 6.8000, -1.0833, CityKind::Major, "Ashanti"),
    ("Mampong", 7.0667, -1.4000, CityKind::Major, "Ashanti"),
    ("Effiduase", 6.2500, -0.6667, CityKind::Major, "Ashanti"),
    ("Akwatia", 6.0333, -0.8000, CityKind::Major, "Eastern"),
    ("Kintampo", 8.0500, -1.7333, CityKind::Major, "Bono East"),
    ("Atebubu", 7.7500, -0.9833, CityKind::Major, "Bono East"),
    ("Savelugu", 9.6167, -0.8167, CityKind::Major, "Northern"),
    ("Bimbilla", 9.6833, 0.1167, CityKind::Major, "Northern"),
    ("Salaga", 8.5500, -0.5167, CityKind::Major, "Savannah"),
    ("Sawla", 9.2167, -2.4833, CityKind::Major, "Savannah"),
    ("Nalerigu", 10.5167, -0.3667, CityKind::Major, "North East"),
    ("Walewale", 10.3500, -0.8167, CityKind::Major, "North East"),
];

pub fn cities() -> Vec<City> {
    CITIES
        .iter()
        .map(|(name, lat, lon, kind, region)| City {
            name: name.to_string(),
            position: LatLon::new(*lat, *lon),
            kind: *kind,
            region: region.to_string(),
        })
        .collect()
}
