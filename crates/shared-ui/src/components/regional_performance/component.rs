use dioxus::prelude::*;
use shared_types::format::{format_currency, format_thousands};
use shared_types::region::{axis_tick, bar_height, nice_ceiling, project, ALL_REGION_FILTERS};
use shared_types::{Region, RegionFilter, ViewMode};

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardAction, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::data_table::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
};
use crate::components::form_select::FormSelect;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 280.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 88.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 36.0;
const AXIS_TICKS: u64 = 4;
/// Compliance is a percentage and is drawn against a fixed 0..=100 scale.
const COMPLIANCE_MAX: u64 = 100;

/// Region comparison panel with a table/chart switch and a region filter.
///
/// Both views draw the same filtered projection of `regions`; switching
/// views or filters never touches the region list itself.
#[component]
pub fn RegionalPerformance(
    regions: Vec<Region>,
    #[props(default = "GHS".to_string())] currency: String,
    #[props(default)] initial_view: ViewMode,
    #[props(default)] initial_filter: RegionFilter,
) -> Element {
    let mut view = use_signal(|| initial_view);
    let mut filter = use_signal(|| initial_filter);

    let visible: Vec<Region> = project(&regions, filter()).into_iter().cloned().collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card {
            class: "regional-performance",
            "data-view": view().as_str(),
            CardHeader {
                div {
                    CardTitle { "Regional Performance" }
                    CardDescription { "Business registrations, compliance and revenue by region." }
                }
                CardAction {
                    FormSelect {
                        value: filter().as_str().to_string(),
                        aria_label: "Filter regions",
                        onchange: move |e: Event<FormData>| {
                            let next = RegionFilter::from_key(&e.value());
                            tracing::debug!(filter = next.as_str(), "Region filter changed");
                            filter.set(next);
                        },
                        for choice in ALL_REGION_FILTERS.iter() {
                            option { value: choice.as_str(), "{choice.label()}" }
                        }
                    }
                    div { class: "view-toggle", role: "group", "aria-label": "View mode",
                        for mode in [ViewMode::Table, ViewMode::Chart] {
                            Button {
                                variant: if view() == mode { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                                size: ButtonSize::Small,
                                pressed: view() == mode,
                                onclick: move |_| view.set(mode),
                                "{mode.label()}"
                            }
                        }
                    }
                }
            }
            CardContent {
                if visible.is_empty() {
                    p { class: "regional-empty", "No regional data available." }
                } else {
                    match view() {
                        ViewMode::Table => rsx! { RegionTable { rows: visible.clone(), currency: currency.clone() } },
                        ViewMode::Chart => rsx! { RegionChart { rows: visible.clone(), currency: currency.clone() } },
                    }
                }
            }
        }
    }
}

#[component]
fn RegionTable(rows: Vec<Region>, currency: String) -> Element {
    rsx! {
        DataTable { label: "Regional breakdown",
            DataTableHeader {
                DataTableColumn { "Region" }
                DataTableColumn { numeric: true, "Businesses" }
                DataTableColumn { "Compliance" }
                DataTableColumn { numeric: true, "Revenue" }
            }
            DataTableBody {
                for region in rows.iter() {
                    DataTableRow { key: "{region.id}", "data-region": "{region.id}",
                        DataTableCell { span { class: "region-name", "{region.name}" } }
                        DataTableCell { numeric: true, "{format_thousands(region.businesses)}" }
                        DataTableCell {
                            div { class: "compliance",
                                div {
                                    class: "compliance-track",
                                    div {
                                        class: "compliance-fill",
                                        "data-tone": region.compliance_tone().as_str(),
                                        style: "width: {region.compliance.min(100)}%",
                                    }
                                }
                                span { class: "compliance-value", "{region.compliance}%" }
                            }
                        }
                        DataTableCell { numeric: true, "{format_currency(&currency, region.revenue_value)}" }
                    }
                }
            }
        }
    }
}

/// Axis gridline with its left and right labels.
struct Tick {
    y: String,
    left: String,
    right: String,
}

/// Pre-computed geometry for one region's bar group.
struct BarGroup {
    id: u32,
    name: String,
    businesses: Bar,
    compliance: Bar,
    revenue: Bar,
    label_x: String,
    label_y: String,
}

struct Bar {
    x: String,
    y: String,
    height: String,
    tooltip: String,
}

impl Bar {
    fn new(x: f64, baseline: f64, height: f64, tooltip: String) -> Self {
        Self {
            x: format!("{x:.1}"),
            y: format!("{:.1}", baseline - height),
            height: format!("{height:.1}"),
            tooltip,
        }
    }
}

/// Grouped bar chart: businesses and compliance on the left axis, revenue on
/// the right.
#[component]
fn RegionChart(rows: Vec<Region>, currency: String) -> Element {
    let plot_width = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_height = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let baseline = PAD_TOP + plot_height;
    let right_edge = CHART_WIDTH - PAD_RIGHT;

    let business_max = nice_ceiling(rows.iter().map(|r| r.businesses).max().unwrap_or(0));
    let revenue_max = nice_ceiling(rows.iter().map(|r| r.revenue_value).max().unwrap_or(0));

    let group_width = plot_width / rows.len().max(1) as f64;
    let bar_width = group_width * 0.22;
    let group_pad = (group_width - bar_width * 3.0) / 2.0;
    let bar_width_attr = format!("{bar_width:.1}");
    let left_label_x = PAD_LEFT - 6.0;
    let right_label_x = right_edge + 6.0;

    let ticks: Vec<Tick> = (0..=AXIS_TICKS)
        .map(|i| Tick {
            y: format!("{:.1}", baseline - plot_height * i as f64 / AXIS_TICKS as f64),
            left: format_thousands(axis_tick(business_max, i, AXIS_TICKS)),
            right: format_thousands(axis_tick(revenue_max, i, AXIS_TICKS)),
        })
        .collect();

    let groups: Vec<BarGroup> = rows
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let x0 = PAD_LEFT + group_width * i as f64 + group_pad;
            BarGroup {
                id: region.id,
                name: region.name.clone(),
                businesses: Bar::new(
                    x0,
                    baseline,
                    bar_height(region.businesses, business_max, plot_height),
                    format!("Businesses: {}", format_thousands(region.businesses)),
                ),
                compliance: Bar::new(
                    x0 + bar_width,
                    baseline,
                    bar_height(u64::from(region.compliance), COMPLIANCE_MAX, plot_height),
                    format!("Compliance Rate: {}%", region.compliance),
                ),
                revenue: Bar::new(
                    x0 + bar_width * 2.0,
                    baseline,
                    bar_height(region.revenue_value, revenue_max, plot_height),
                    format!("Revenue: {}", format_currency(&currency, region.revenue_value)),
                ),
                label_x: format!("{:.1}", x0 + bar_width * 1.5),
                label_y: format!("{:.1}", baseline + 18.0),
            }
        })
        .collect();

    rsx! {
        figure { class: "region-chart",
            svg {
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                width: "100%",
                role: "img",
                "aria-label": "Regional performance chart",
                for tick in ticks.iter() {
                    g { class: "chart-gridline",
                        line { x1: "{PAD_LEFT}", x2: "{right_edge}", y1: "{tick.y}", y2: "{tick.y}" }
                        text {
                            class: "chart-axis-label",
                            x: "{left_label_x}",
                            y: "{tick.y}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{tick.left}"
                        }
                        text {
                            class: "chart-axis-label",
                            x: "{right_label_x}",
                            y: "{tick.y}",
                            text_anchor: "start",
                            dominant_baseline: "middle",
                            "{tick.right}"
                        }
                    }
                }
                for group in groups.iter() {
                    g { key: "{group.id}", class: "chart-group", "data-region": "{group.id}",
                        for (class, bar) in [
                            ("chart-bar businesses", &group.businesses),
                            ("chart-bar compliance", &group.compliance),
                            ("chart-bar revenue", &group.revenue),
                        ] {
                            rect {
                                class,
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar_width_attr}",
                                height: "{bar.height}",
                                title { "{bar.tooltip}" }
                            }
                        }
                        text {
                            class: "chart-category",
                            x: "{group.label_x}",
                            y: "{group.label_y}",
                            text_anchor: "middle",
                            "{group.name}"
                        }
                    }
                }
            }
            figcaption { class: "chart-legend",
                span { class: "legend-item businesses", "Businesses" }
                span { class: "legend-item compliance", "Compliance Rate (%)" }
                span { class: "legend-item revenue", "Revenue ({currency})" }
            }
        }
    }
}
