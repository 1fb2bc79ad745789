use dioxus::prelude::*;
use shared_types::{City, CityKind, GeoBounds};

const MAP_WIDTH: f64 = 360.0;
const MAP_HEIGHT: f64 = 480.0;
/// Degrees added around the outermost cities.
const MAP_PADDING_DEG: f64 = 0.35;

fn marker_radius(kind: CityKind) -> f64 {
    match kind {
        CityKind::Capital => 7.0,
        CityKind::Regional => 5.0,
        CityKind::Major => 3.5,
    }
}

struct Marker {
    index: usize,
    kind: CityKind,
    name: String,
    cx: String,
    cy: String,
    r: String,
    /// Popup anchor as CSS percentages of the canvas.
    anchor: String,
}

/// Map of registered business locations.
///
/// The view is fitted to the cities it is given. Clicking a marker opens a
/// popup with the city's details; clicking it again closes the popup.
#[component]
pub fn CoverageMap(cities: Vec<City>) -> Element {
    let mut selected = use_signal(|| None::<usize>);

    let Some(bounds) = GeoBounds::around(&cities, MAP_PADDING_DEG) else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div { class: "coverage-map coverage-map-empty", "No locations to display." }
        };
    };

    let markers: Vec<Marker> = cities
        .iter()
        .enumerate()
        .map(|(index, city)| {
            let (x, y) = bounds.project(city.position, MAP_WIDTH, MAP_HEIGHT);
            Marker {
                index,
                kind: city.kind,
                name: city.name.clone(),
                cx: format!("{x:.1}"),
                cy: format!("{y:.1}"),
                r: format!("{:.1}", marker_radius(city.kind)),
                anchor: format!(
                    "left: {:.2}%; top: {:.2}%;",
                    x / MAP_WIDTH * 100.0,
                    y / MAP_HEIGHT * 100.0
                ),
            }
        })
        .collect();

    let center = bounds.center();
    let center_label = format!("Centered on {:.4}, {:.4}", center.lat, center.lon);
    let legend: Vec<(CityKind, usize)> = [CityKind::Capital, CityKind::Regional, CityKind::Major]
        .into_iter()
        .map(|kind| (kind, cities.iter().filter(|c| c.kind == kind).count()))
        .collect();
    let current = selected();
    let popup = current.and_then(|index| {
        let city = cities.get(index)?.clone();
        let anchor = markers.get(index)?.anchor.clone();
        Some((city, anchor))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "coverage-map",
            div { class: "coverage-map-canvas",
                svg {
                    view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                    role: "img",
                    "aria-label": "Business locations map",
                    rect { class: "coverage-map-backdrop", width: "{MAP_WIDTH}", height: "{MAP_HEIGHT}", rx: "12" }
                    for marker in markers {
                        circle {
                            key: "{marker.index}",
                            class: "coverage-marker",
                            "data-kind": marker.kind.as_str(),
                            "data-selected": if current == Some(marker.index) { "true" } else { "false" },
                            cx: "{marker.cx}",
                            cy: "{marker.cy}",
                            r: "{marker.r}",
                            onclick: move |_| {
                                let index = marker.index;
                                let next = if selected() == Some(index) { None } else { Some(index) };
                                tracing::debug!(city = index, open = next.is_some(), "Map marker clicked");
                                selected.set(next);
                            },
                            title { "{marker.name}" }
                        }
                    }
                }
                if let Some((city, anchor)) = popup {
                    div {
                        class: "coverage-popup",
                        role: "dialog",
                        style: "{anchor}",
                        h4 { class: "coverage-popup-title", "{city.name}" }
                        dl {
                            dt { "Region" }
                            dd { "{city.region}" }
                            dt { "Type" }
                            dd { "{city.kind.label()}" }
                            dt { "Coordinates" }
                            dd { "{city.coordinates_label()}" }
                        }
                        button {
                            class: "coverage-popup-close",
                            r#type: "button",
                            "aria-label": "Close",
                            onclick: move |_| selected.set(None),
                            "×"
                        }
                    }
                }
            }
            div { class: "coverage-map-legend",
                for (kind, count) in legend {
                    span { class: "coverage-legend-item", "data-kind": kind.as_str(),
                        "{kind.label()} ({count})"
                    }
                }
                span { class: "coverage-map-center", "{center_label}" }
            }
        }
    }
}
