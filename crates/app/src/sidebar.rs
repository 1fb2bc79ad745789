use dioxus::prelude::*;
use shared_types::{AppConfig, NavIcon, NavItem};
use shared_ui::{
    NavLink, NavMain, Sidebar, SidebarCollapsible, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarRail, SidebarSeparator, UserAvatar,
    MenuButtonSize,
};

use crate::icons::icon;

const MENU_ICON_SIZE: u32 = 18;

/// Signed-in administrator shown in the sidebar footer. There is no session
/// layer; the dashboard always runs as this user.
const PROFILE_NAME: &str = "Registry Admin";
const PROFILE_EMAIL: &str = "admin@registry.gov.gh";

/// The primary navigation menu.
pub fn main_menu() -> Vec<NavItem> {
    vec![
        NavItem::link("Dashboard", "/dashboard").with_icon("layout-grid"),
        NavItem::link("User Management", "/usermanagement")
            .with_icon("users")
            .with_children(vec![
                NavItem::link("All Users", "/analytics/overview").with_icon("user-check"),
                NavItem::link("User Roles", "/analytics/reports").with_icon("shield"),
            ]),
        NavItem::link("Business Registry", "/businessRegistration")
            .with_icon("file-text")
            .with_children(vec![
                NavItem::link("Register Business", "/settings/profile").with_icon("plus"),
            ]),
        NavItem::link("Revenue Tracking", "/revenue").with_icon("dollar-sign"),
        NavItem::link("Reports & Analytics", "/reports").with_icon("book-open"),
        NavItem::link("System Settings", "/system/settings").with_icon("settings"),
        NavItem::link("System Logs", "/system/logs").with_icon("database"),
    ]
}

/// Sidebar with the brand link, the main menu and the signed-in user.
#[component]
pub fn AppSidebar(current_url: String) -> Element {
    let config: AppConfig = use_context();
    let nav = &config.navigation;

    rsx! {
        Sidebar { collapsible: SidebarCollapsible::Icon,
            SidebarHeader {
                SidebarMenu {
                    SidebarMenuItem {
                        NavLink { to: config.app.home.clone(),
                            SidebarMenuButton { size: MenuButtonSize::Large,
                                span { class: "sidebar-brand-mark", "BR" }
                                span { class: "sidebar-brand-name", "{config.app.name}" }
                            }
                        }
                    }
                }
            }

            SidebarSeparator {}

            SidebarContent {
                NavMain {
                    items: main_menu(),
                    current_url,
                    label: nav.group_label.clone(),
                    policy: nav.match_policy(),
                    max_depth: nav.max_depth,
                    icon_resolver: move |name: NavIcon| icon(name.as_str(), MENU_ICON_SIZE),
                }
            }

            SidebarFooter {
                NavUser { name: PROFILE_NAME, email: PROFILE_EMAIL }
            }

            SidebarRail {}
        }
    }
}

/// Avatar, name and email of the signed-in user.
#[component]
fn NavUser(name: String, email: String) -> Element {
    rsx! {
        SidebarMenu {
            SidebarMenuItem {
                SidebarMenuButton { size: MenuButtonSize::Large,
                    UserAvatar { name: name.clone() }
                    div { class: "nav-user-details",
                        span { class: "nav-user-name", "{name}" }
                        span { class: "nav-user-email", "{email}" }
                    }
                }
            }
        }
    }
}
