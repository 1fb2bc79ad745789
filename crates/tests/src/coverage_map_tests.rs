use dioxus::prelude::*;
use shared_ui::CoverageMap;

use crate::common::*;

#[test]
fn one_marker_per_city() {
    fn app() -> Element {
        rsx! { CoverageMap { cities: sample_cities() } }
    }
    let html = render(app);

    assert_eq!(count(&html, "<circle"), 4);
    assert_eq!(count(&html, "data-kind=\"capital\""), 2);
    assert_eq!(count(&html, "data-selected=\"true\""), 0);
    assert!(!html.contains("coverage-popup"));
}

#[test]
fn legend_counts_each_kind() {
    fn app() -> Element {
        rsx! { CoverageMap { cities: sample_cities() } }
    }
    let html = render(app);

    assert!(html.contains("National Capital (1)"));
    assert!(html.contains("Regional Capital (1)"));
    assert!(html.contains("Major City (2)"));
    assert!(html.contains("Centered on"));
}

#[test]
fn marker_titles_name_the_city() {
    fn app() -> Element {
        rsx! { CoverageMap { cities: sample_cities() } }
    }
    let html = render(app);

    assert!(html.contains("<title>Kumasi</title>"));
    assert!(html.contains("<title>Obuasi</title>"));
}

#[test]
fn empty_map_shows_placeholder() {
    fn app() -> Element {
        rsx! { CoverageMap { cities: Vec::new() } }
    }
    let html = render(app);

    assert!(html.contains("No locations to display."));
    assert!(!html.contains("<svg"));
}
