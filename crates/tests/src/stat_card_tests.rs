use std::cell::Cell;
use std::time::Duration;

use dioxus::prelude::*;
use shared_ui::{CardAccent, StatCard};

use crate::common::*;

#[test]
fn figure_starts_at_zero() {
    fn app() -> Element {
        rsx! {
            StatCard {
                value: 12_847,
                title: "Total Businesses",
                subtitle: "Registered entities",
                trend: "+12.5%".to_string(),
                accent: CardAccent::Blue,
            }
        }
    }
    let html = render(app);

    assert!(html.contains("<span class=\"stat-card-value\">0</span>"));
    assert!(!html.contains("12,847"));
    assert!(html.contains("Total Businesses"));
    assert!(html.contains("Registered entities"));
    assert!(html.contains("+12.5%"));
    assert!(html.contains("data-accent=\"blue\""));
    assert!(html.contains("data-hovered=\"false\""));
}

#[test]
fn optional_parts_are_omitted() {
    fn app() -> Element {
        rsx! { StatCard { value: 42, subtitle: "Pending reviews" } }
    }
    let html = render(app);

    assert!(html.contains("Pending reviews"));
    assert!(!html.contains("stat-card-icon"));
    assert!(!html.contains("card-title"));
    assert!(!html.contains("badge"));
}

#[test]
fn icon_slot_is_rendered() {
    fn app() -> Element {
        rsx! {
            StatCard {
                value: 7,
                subtitle: "Audits",
                icon: rsx! { i { "data-icon": "shield" } },
            }
        }
    }
    let html = render(app);

    assert!(html.contains("stat-card-icon"));
    assert!(html.contains("data-icon=\"shield\""));
}

// ── Count-up lifecycle ──────────────────────────────────────────────

thread_local! {
    static TARGET: Cell<Option<Signal<u64>>> = const { Cell::new(None) };
    static SHOWN: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
}

#[tokio::test]
async fn count_lands_exactly_on_target() {
    fn app() -> Element {
        rsx! {
            StatCard {
                value: 1_234,
                subtitle: "Registrations",
                duration_ms: 40,
                tick_ms: 5,
                start_delay_ms: 0,
            }
        }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();

    let done = drive_until(&mut dom, "stat-card-value\">1,234<", Duration::from_secs(3)).await;
    assert!(done, "count never reached the target");

    // Nothing moves past the target afterwards.
    drive_for(&mut dom, Duration::from_millis(60)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("stat-card-value\">1,234<"));
}

#[tokio::test]
async fn new_target_restarts_the_count() {
    fn app() -> Element {
        let target = use_signal(|| 10u64);
        use_hook(|| TARGET.with(|slot| slot.set(Some(target))));
        rsx! {
            StatCard {
                value: target(),
                subtitle: "Registrations",
                duration_ms: 20,
                tick_ms: 5,
                start_delay_ms: 0,
            }
        }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert!(drive_until(&mut dom, "stat-card-value\">10<", Duration::from_secs(3)).await);

    let target = TARGET.with(Cell::get).expect("target signal registered");
    dom.in_runtime(|| {
        let mut target = target;
        target.set(500);
    });
    assert!(drive_until(&mut dom, "stat-card-value\">500<", Duration::from_secs(3)).await);
}

#[tokio::test]
async fn unmounting_stops_the_count() {
    fn app() -> Element {
        let shown = use_signal(|| true);
        use_hook(|| SHOWN.with(|slot| slot.set(Some(shown))));
        rsx! {
            if shown() {
                StatCard {
                    value: 1_000_000,
                    subtitle: "Registrations",
                    duration_ms: 5_000,
                    tick_ms: 5,
                    start_delay_ms: 0,
                }
            } else {
                p { "gone" }
            }
        }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    drive_for(&mut dom, Duration::from_millis(30)).await;

    let shown = SHOWN.with(Cell::get).expect("visibility signal registered");
    dom.in_runtime(|| {
        let mut shown = shown;
        shown.set(false);
    });
    settle(&mut dom).await;

    // A task outliving its card would write to a dropped signal here.
    drive_for(&mut dom, Duration::from_millis(60)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("gone"));
    assert!(!html.contains("stat-card-value"));
}

#[tokio::test]
async fn unmounting_during_start_delay_is_quiet() {
    fn app() -> Element {
        let shown = use_signal(|| true);
        use_hook(|| SHOWN.with(|slot| slot.set(Some(shown))));
        rsx! {
            if shown() {
                StatCard { value: 50, subtitle: "Registrations", start_delay_ms: 200, tick_ms: 5, duration_ms: 20 }
            }
        }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom).await;

    let shown = SHOWN.with(Cell::get).expect("visibility signal registered");
    dom.in_runtime(|| {
        let mut shown = shown;
        shown.set(false);
    });
    settle(&mut dom).await;
    // Well past the start delay and the whole count.
    drive_for(&mut dom, Duration::from_millis(300)).await;
    assert!(!dioxus_ssr::render(&dom).contains("stat-card"));
}
