use dioxus::prelude::*;
use shared_types::{RegionFilter, ViewMode};
use shared_ui::RegionalPerformance;

use crate::common::*;

#[test]
fn table_is_the_default_view() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: sample_regions() } }
    }
    let html = render(app);

    assert!(html.contains("data-view=\"table\""));
    assert!(html.contains("<table"));
    assert!(!html.contains("<svg"));
    assert_eq!(count(&html, "data-table-row"), 6);
    assert!(html.contains("Greater Accra"));
    assert!(html.contains("5,241"));
    assert!(html.contains("GHS 1,245,300"));
    assert!(html.contains("78%"));
}

#[test]
fn compliance_bars_carry_tone() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: sample_regions() } }
    }
    let html = render(app);

    assert_eq!(count(&html, "data-tone=\"high\""), 3);
    assert_eq!(count(&html, "data-tone=\"medium\""), 2);
    assert_eq!(count(&html, "data-tone=\"low\""), 1);
    assert!(html.contains("width: 78%"));
}

#[test]
fn chart_view_draws_three_series() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: sample_regions(), initial_view: ViewMode::Chart } }
    }
    let html = render(app);

    assert!(html.contains("data-view=\"chart\""));
    assert!(html.contains("<svg"));
    assert!(!html.contains("<table"));
    assert!(html.contains("Businesses: 5,241"));
    assert!(html.contains("Compliance Rate: 78%"));
    assert!(html.contains("Revenue: GHS 1,245,300"));
}

#[test]
fn top_filter_drops_smallest_region() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: sample_regions(), initial_filter: RegionFilter::Top } }
    }
    let html = render(app);

    assert_eq!(count(&html, "data-table-row"), 5);
    assert!(html.contains("Greater Accra"));
    assert!(!html.contains("Upper East"));
}

#[test]
fn bottom_filter_drops_largest_region() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: sample_regions(), initial_filter: RegionFilter::Bottom } }
    }
    let html = render(app);

    assert_eq!(count(&html, "data-table-row"), 5);
    assert!(html.contains("Upper East"));
    assert!(!html.contains("Greater Accra"));
}

#[test]
fn currency_is_configurable() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: sample_regions(), currency: "USD" } }
    }
    let html = render(app);

    assert!(html.contains("USD 1,245,300"));
    assert!(!html.contains("GHS"));
}

#[test]
fn view_toggle_marks_current_mode() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: sample_regions() } }
    }
    let html = render(app);

    assert_eq!(count(&html, "aria-pressed=\"true\""), 1);
    assert_eq!(count(&html, "aria-pressed=\"false\""), 1);
    assert!(html.contains("All Regions"));
    assert!(html.contains("Top 5 Regions"));
    assert!(html.contains("Bottom 5 Regions"));
}

#[test]
fn empty_regions_show_placeholder() {
    fn app() -> Element {
        rsx! { RegionalPerformance { regions: Vec::new() } }
    }
    let html = render(app);

    assert!(html.contains("No regional data available."));
    assert!(!html.contains("<table"));
}

#[test]
fn chart_survives_extreme_totals() {
    fn app() -> Element {
        rsx! {
            RegionalPerformance {
                regions: vec![region(1, "Everywhere", u64::MAX, 100, u64::MAX), region(2, "Nowhere", 0, 0, 0)],
                initial_view: ViewMode::Chart,
            }
        }
    }
    let html = render(app);

    assert!(html.contains("Businesses: 18,446,744,073,709,551,615"));
    assert!(html.contains("Businesses: 0"));
}
