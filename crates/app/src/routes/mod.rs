pub mod dashboard;
pub mod not_found;
pub mod placeholder;

use dioxus::prelude::*;
use shared_types::{AppConfig, NavTree};
use shared_ui::{SidebarInset, SidebarProvider, SidebarTrigger};

use crate::sidebar::{main_menu, AppSidebar};
use dashboard::Dashboard;
use not_found::NotFound;
use placeholder::PlaceholderPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/usermanagement")]
    UserManagement {},
    #[route("/analytics/overview")]
    AllUsers {},
    #[route("/analytics/reports")]
    UserRoles {},
    #[route("/businessRegistration")]
    BusinessRegistry {},
    #[route("/settings/profile")]
    RegisterBusiness {},
    #[route("/revenue")]
    RevenueTracking {},
    #[route("/reports")]
    ReportsAnalytics {},
    #[route("/system/settings")]
    SystemSettings {},
    #[route("/system/logs")]
    SystemLogs {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Sidebar shell plus a header with the sidebar toggle and breadcrumbs.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let config: AppConfig = use_context();
    let current_url = route.to_string();

    let tree = NavTree::build(
        &main_menu(),
        config.navigation.match_policy(),
        config.navigation.max_depth,
    );
    let crumbs: Vec<String> = tree
        .active_trail(&current_url)
        .iter()
        .map(|node| node.title().to_string())
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            AppSidebar { current_url: current_url.clone() }

            SidebarInset {
                header { class: "app-header",
                    SidebarTrigger {
                        span { class: "app-header-trigger-icon", "\u{2630}" }
                    }
                    nav { class: "breadcrumbs", "aria-label": "Breadcrumb",
                        ol {
                            li { class: "breadcrumb-root", "{config.app.name}" }
                            for (i, crumb) in crumbs.iter().enumerate() {
                                li {
                                    class: "breadcrumb-item",
                                    "aria-current": if i + 1 == crumbs.len() { "page" } else { "false" },
                                    "{crumb}"
                                }
                            }
                        }
                    }
                }
                div { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn UserManagement() -> Element {
    rsx! {
        PlaceholderPage {
            title: "User Management",
            description: "Manage administrator accounts and their access.",
        }
    }
}

#[component]
fn AllUsers() -> Element {
    rsx! {
        PlaceholderPage {
            title: "All Users",
            description: "Every account with access to the registry.",
        }
    }
}

#[component]
fn UserRoles() -> Element {
    rsx! {
        PlaceholderPage {
            title: "User Roles",
            description: "Roles and the permissions they grant.",
        }
    }
}

#[component]
fn BusinessRegistry() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Business Registry",
            description: "Registered businesses across all regions.",
        }
    }
}

#[component]
fn RegisterBusiness() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Register Business",
            description: "Submit a new business registration.",
        }
    }
}

#[component]
fn RevenueTracking() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Revenue Tracking",
            description: "Registration fees and levies collected.",
        }
    }
}

#[component]
fn ReportsAnalytics() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Reports & Analytics",
            description: "Periodic reports on registrations and compliance.",
        }
    }
}

#[component]
fn SystemSettings() -> Element {
    rsx! {
        PlaceholderPage {
            title: "System Settings",
            description: "Platform-wide configuration.",
        }
    }
}

#[component]
fn SystemLogs() -> Element {
    rsx! {
        PlaceholderPage {
            title: "System Logs",
            description: "Audit trail of administrative actions.",
        }
    }
}
