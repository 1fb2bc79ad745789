use std::cell::Cell;

use dioxus::prelude::*;
use pretty_assertions::{assert_eq, assert_ne};
use shared_types::nav::DEFAULT_MAX_DEPTH;
use shared_types::{ExpandState, MatchPolicy, NavIcon, NavItem, NavPath, NavTree};
use shared_ui::{NavLink, NavMain};

use crate::common::*;

// ── Active highlighting and seeded expansion ────────────────────────

#[test]
fn branch_containing_location_starts_open() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/analytics/overview" } }
    }
    let html = render_routed(app);

    assert_eq!(count(&html, "aria-expanded=\"true\""), 1);
    assert_eq!(count(&html, "aria-expanded=\"false\""), 1);
    assert_eq!(count(&html, "data-state=\"open\""), 1);
    assert_eq!(count(&html, "data-state=\"closed\""), 1);
    assert!(html.contains("All Users"));
    assert!(html.contains("User Roles"));
    assert!(!html.contains("Register Business"));
}

#[test]
fn active_flag_covers_branch_and_leaf() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/analytics/overview" } }
    }
    let html = render_routed(app);

    // User Management and All Users
    assert_eq!(count(&html, "data-active=\"true\""), 2);
}

#[test]
fn leaf_location_leaves_every_branch_closed() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/dashboard" } }
    }
    let html = render_routed(app);

    assert_eq!(count(&html, "aria-expanded=\"true\""), 0);
    assert_eq!(count(&html, "data-active=\"true\""), 1);
    assert!(!html.contains("All Users"));
    assert!(!html.contains("Register Business"));
}

#[test]
fn unknown_location_activates_nothing() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/nowhere" } }
    }
    let html = render_routed(app);

    assert_eq!(count(&html, "data-active=\"true\""), 0);
    assert_eq!(count(&html, "data-state=\"open\""), 0);
}

#[test]
fn prefix_location_activates_parent_entry() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/businessRegistration/new" } }
    }
    let html = render_routed(app);

    assert_eq!(count(&html, "data-active=\"true\""), 1);
    assert_eq!(count(&html, "aria-expanded=\"true\""), 1);
    assert!(html.contains("Register Business"));
}

// ── Match policy ────────────────────────────────────────────────────

fn rooted_menu() -> Vec<NavItem> {
    vec![
        NavItem::link("Home", "/"),
        NavItem::link("Dashboard", "/dashboard"),
    ]
}

#[test]
fn root_entry_is_exact_by_default() {
    fn app() -> Element {
        rsx! { NavMain { items: rooted_menu(), current_url: "/dashboard" } }
    }
    assert_eq!(count(&render_routed(app), "data-active=\"true\""), 1);
}

#[test]
fn literal_policy_keeps_root_entry_active_everywhere() {
    fn app() -> Element {
        rsx! {
            NavMain { items: rooted_menu(), current_url: "/dashboard", policy: MatchPolicy::Literal }
        }
    }
    assert_eq!(count(&render_routed(app), "data-active=\"true\""), 2);
}

// ── Leaf link flavours ──────────────────────────────────────────────

#[test]
fn inert_and_external_entries() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/dashboard" } }
    }
    let html = render_routed(app);

    assert_eq!(count(&html, "aria-disabled=\"true\""), 1);
    assert!(html.contains("Coming Soon"));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(html.contains("href=\"https://example.org/handbook\""));
    assert!(!html.contains("href=\"\""));
}

#[test]
fn internal_link_prefetches_by_default() {
    fn app() -> Element {
        rsx! { NavLink { to: "/reports", "Reports" } }
    }
    let html = render_routed(app);

    assert!(html.contains("href=\"/reports\""));
    assert!(html.contains("data-prefetch=\"true\""));
    assert!(!html.contains("target=\"_blank\""));
}

#[test]
fn prefetch_can_be_disabled() {
    fn app() -> Element {
        rsx! { NavLink { to: "/reports", prefetch: false, "Reports" } }
    }
    assert!(render_routed(app).contains("data-prefetch=\"false\""));
}

#[test]
fn external_link_opens_new_tab_without_prefetch_hint() {
    fn app() -> Element {
        rsx! { NavLink { to: "https://example.org/handbook", external: true, "Handbook" } }
    }
    let html = render_routed(app);

    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(!html.contains("data-prefetch"));
}

#[test]
fn link_keeps_caller_attributes() {
    fn app() -> Element {
        rsx! { NavLink { to: "/reports", "data-testid": "reports-link", "Reports" } }
    }
    let html = render_routed(app);

    assert!(html.contains("data-testid=\"reports-link\""));
    assert!(html.contains("class=\"nav-link"));
}

// ── Structure ───────────────────────────────────────────────────────

#[test]
fn group_label_and_paths() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/analytics/overview", label: "Registry" } }
    }
    let html = render_routed(app);

    assert!(html.contains("Registry"));
    assert!(!html.contains("Platform"));
    assert_eq!(count(&html, "data-branch=\"true\""), 2);
    assert!(html.contains("data-path=\"1.0\""));
}

#[test]
fn empty_label_hides_group_label() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/dashboard", label: "" } }
    }
    assert!(!render_routed(app).contains("sidebar-group-label"));
}

#[test]
fn nested_entries_use_small_buttons() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/analytics/overview" } }
    }
    // All Users and User Roles
    assert_eq!(count(&render_routed(app), "data-size=\"sm\""), 2);
}

#[test]
fn entries_past_depth_cap_are_not_rendered() {
    fn app() -> Element {
        let items = vec![NavItem::link("Settings", "/settings").with_children(vec![
            NavItem::link("Profile", "/settings/profile").with_children(vec![
                NavItem::link("Avatar", "/settings/profile/avatar"),
            ]),
        ])];
        rsx! { NavMain { items, current_url: "/settings/profile/avatar", max_depth: 2 } }
    }
    let html = render_routed(app);

    assert!(html.contains("Profile"));
    assert!(!html.contains("Avatar"));
    // Profile lost its children and renders as a leaf.
    assert_eq!(count(&html, "data-branch=\"true\""), 1);
}

#[test]
fn duplicate_titles_expand_independently() {
    fn app() -> Element {
        let items = vec![
            NavItem::link("Reports", "/reports/a")
                .with_children(vec![NavItem::link("Monthly", "/reports/a/monthly")]),
            NavItem::link("Reports", "/reports/b")
                .with_children(vec![NavItem::link("Yearly", "/reports/b/yearly")]),
        ];
        rsx! { NavMain { items, current_url: "/reports/b/yearly" } }
    }
    let html = render_routed(app);

    assert_eq!(count(&html, "data-state=\"open\""), 1);
    assert_eq!(count(&html, "data-state=\"closed\""), 1);
    assert!(html.contains("Yearly"));
    assert!(!html.contains("Monthly"));
}

#[test]
fn icon_resolver_and_extra_class() {
    fn app() -> Element {
        let items = vec![NavItem::link("Dashboard", "/dashboard")
            .with_icon("layout-grid")
            .with_class("text-emphasis")];
        rsx! {
            NavMain {
                items,
                current_url: "/dashboard",
                icon_resolver: move |name: NavIcon| rsx! { i { "data-icon": name.as_str().to_string() } },
            }
        }
    }
    let html = render_routed(app);

    assert!(html.contains("data-icon=\"layout-grid\""));
    assert!(html.contains("nav-title text-emphasis"));
}

#[test]
fn icons_are_skipped_without_resolver() {
    fn app() -> Element {
        rsx! { NavMain { items: sample_menu(), current_url: "/dashboard" } }
    }
    assert!(!render_routed(app).contains("nav-icon"));
}

// ── After mount ─────────────────────────────────────────────────────

thread_local! {
    static LOCATION: Cell<Option<Signal<String>>> = const { Cell::new(None) };
    static STORE: Cell<Option<Signal<ExpandState>>> = const { Cell::new(None) };
}

fn menu_at_moving_location() -> Element {
    let location = use_signal(|| "/analytics/overview".to_string());
    use_hook(|| LOCATION.with(|slot| slot.set(Some(location))));
    rsx! { NavMain { items: sample_menu(), current_url: location() } }
}

#[tokio::test]
async fn navigating_away_keeps_branches_open() {
    let mut dom = routed_dom(menu_at_moving_location);
    dom.rebuild_in_place();
    let before = dioxus_ssr::render(&dom);
    assert_eq!(count(&before, "aria-expanded=\"true\""), 1);
    assert_eq!(count(&before, "data-active=\"true\""), 2);

    let location = LOCATION.with(Cell::get).expect("location signal registered");
    dom.in_runtime(|| {
        let mut location = location;
        location.set("/dashboard".to_string());
    });
    settle(&mut dom).await;
    let after = dioxus_ssr::render(&dom);

    // User Management stays open although only Dashboard is active now.
    assert_eq!(count(&after, "aria-expanded=\"true\""), 1);
    assert!(after.contains("All Users"));
    assert_eq!(count(&after, "data-active=\"true\""), 1);
    assert_ne!(before, after);
}

fn menu_with_shared_store() -> Element {
    let items = sample_menu();
    let store = use_signal(|| {
        let tree = NavTree::build(&items, MatchPolicy::default(), DEFAULT_MAX_DEPTH);
        ExpandState::seeded(&tree, "/analytics/overview")
    });
    use_hook(|| STORE.with(|slot| slot.set(Some(store))));
    rsx! { NavMain { items, current_url: "/analytics/overview", store } }
}

#[tokio::test]
async fn toggling_branches_redraws_only_that_branch() {
    let mut dom = routed_dom(menu_with_shared_store);
    dom.rebuild_in_place();
    let store = STORE.with(Cell::get).expect("store signal registered");

    // Same write the branch header performs on click.
    let closed = dom.in_runtime(|| {
        let mut store = store;
        store.write().toggle(&NavPath::root(1))
    });
    assert_eq!(closed, Some(false));
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);
    assert_eq!(count(&html, "aria-expanded=\"true\""), 0);
    assert!(!html.contains("All Users"));
    // Active highlight does not depend on expansion.
    assert_eq!(count(&html, "data-active=\"true\""), 1);

    let opened = dom.in_runtime(|| {
        let mut store = store;
        store.write().toggle(&NavPath::root(2))
    });
    assert_eq!(opened, Some(true));
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);
    assert_eq!(count(&html, "aria-expanded=\"true\""), 1);
    assert!(html.contains("Register Business"));
}

#[tokio::test]
async fn leaf_paths_never_enter_the_store() {
    let mut dom = routed_dom(menu_with_shared_store);
    dom.rebuild_in_place();
    let store = STORE.with(Cell::get).expect("store signal registered");

    let (toggled, entries) = dom.in_runtime(|| {
        let mut store = store;
        let toggled = store.write().toggle(&NavPath::root(0));
        (toggled, store.peek().len())
    });
    assert_eq!(toggled, None);
    // One entry per branch: User Management and Business Registry.
    assert_eq!(entries, 2);
    settle(&mut dom).await;
    assert_eq!(count(&dioxus_ssr::render(&dom), "aria-expanded=\"true\""), 1);
}
