use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, CoverageMap, RegionalPerformance, StatCard};

use crate::data::{cities, regions, STAT_TILES};
use crate::icons::icon;

const TILE_ICON_SIZE: u32 = 20;

/// Overview page: headline figures, regional breakdown and coverage map.
#[component]
pub fn Dashboard() -> Element {
    let config: AppConfig = use_context();
    let stats = config.stats;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div {
            class: "dashboard-page",

            h2 {
                class: "dashboard-title",
                "Dashboard"
            }

            div {
                class: "stats-grid",
                for tile in STAT_TILES.iter() {
                    StatCard {
                        key: "{tile.subtitle}",
                        value: tile.value,
                        title: tile.title,
                        subtitle: tile.subtitle,
                        icon: icon(tile.icon, TILE_ICON_SIZE),
                        trend: tile.trend.to_string(),
                        progress: tile.progress,
                        accent: tile.accent,
                        duration_ms: stats.duration_ms,
                        tick_ms: stats.tick_ms,
                        start_delay_ms: stats.start_delay_ms,
                    }
                }
            }

            div {
                class: "dashboard-panels",
                RegionalPerformance {
                    regions: regions(),
                    currency: config.app.currency.clone(),
                }
                Card {
                    class: "coverage-card",
                    CardHeader {
                        div {
                            CardTitle { "National Coverage" }
                            CardDescription { "Cities with registered businesses." }
                        }
                    }
                    CardContent {
                        CoverageMap { cities: cities() }
                    }
                }
            }
        }
    }
}
