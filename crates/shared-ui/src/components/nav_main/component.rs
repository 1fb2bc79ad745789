use dioxus::prelude::*;
use shared_types::nav::DEFAULT_MAX_DEPTH;
use shared_types::{ExpandState, MatchPolicy, NavIcon, NavItem, NavTree};

use crate::components::sidebar::{
    MenuButtonSize, SidebarGroup, SidebarGroupLabel, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarMenuSub,
};

/// Router `Link` for sidebar entries.
///
/// An empty `to` renders an inert span. External destinations open in a new
/// tab. Clicks with a modifier key are left to the browser by `Link`.
#[component]
pub fn NavLink(
    to: String,
    #[props(default = false)] external: bool,
    #[props(default = true)] prefetch: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if to.is_empty() {
        let base = vec![Attribute::new("class", "nav-link", None, false)];
        let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
        return rsx! {
            span {
                "aria-disabled": "true",
                ..merged,
                {children}
            }
        };
    }

    let mut extra = attributes;
    if !external {
        extra.push(Attribute::new(
            "data-prefetch",
            if prefetch { "true" } else { "false" },
            None,
            false,
        ));
    }
    let target = to.clone();

    rsx! {
        Link {
            to,
            class: "nav-link",
            new_tab: external,
            rel: if external { Some("noopener noreferrer".to_string()) } else { None },
            onclick: move |_| tracing::debug!(to = %target, external, "Navigating"),
            ..extra,
            {children}
        }
    }
}

/// Collapsible navigation menu for the sidebar.
///
/// Branches the current location falls under start expanded. After mount the
/// open/closed state changes only when the user toggles a branch; moving to
/// another page never collapses anything.
#[component]
pub fn NavMain(
    items: Vec<NavItem>,
    /// Location the active highlight is computed against.
    current_url: String,
    #[props(default = "Platform".to_string())] label: String,
    #[props(default)] policy: MatchPolicy,
    #[props(default = DEFAULT_MAX_DEPTH)] max_depth: usize,
    /// Maps an icon name to the element drawn before the title.
    #[props(default)]
    icon_resolver: Option<Callback<NavIcon, Element>>,
    /// Expansion state owned by the caller, for keeping branches open across
    /// remounts of the menu. Without it the menu seeds its own on mount.
    #[props(default)]
    store: Option<Signal<ExpandState>>,
) -> Element {
    let tree = NavTree::build(&items, policy, max_depth);
    let own = use_signal(|| ExpandState::seeded(&tree, &current_url));
    let expanded = store.unwrap_or(own);

    let ctx = NavRenderCtx {
        tree: &tree,
        current_url: &current_url,
        expanded,
        icon_resolver,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        SidebarGroup {
            class: "nav-main",
            if !label.is_empty() {
                SidebarGroupLabel { "{label}" }
            }
            SidebarMenu {
                for index in tree.roots().iter().copied() {
                    {render_node(&ctx, index)}
                }
            }
        }
    }
}

struct NavRenderCtx<'a> {
    tree: &'a NavTree,
    current_url: &'a str,
    expanded: Signal<ExpandState>,
    icon_resolver: Option<Callback<NavIcon, Element>>,
}

fn render_node(ctx: &NavRenderCtx<'_>, index: usize) -> Element {
    let Some(node) = ctx.tree.node(index) else {
        return rsx! {};
    };
    let item = &node.item;
    let active = ctx.tree.is_active(index, ctx.current_url);
    let size = if node.path.depth() > 1 {
        MenuButtonSize::Small
    } else {
        MenuButtonSize::Default
    };
    let icon = match (ctx.icon_resolver, item.icon.clone()) {
        (Some(resolver), Some(name)) => Some(resolver.call(name)),
        _ => None,
    };
    let title_class = match &item.class {
        Some(extra) => format!("nav-title {extra}"),
        None => "nav-title".to_string(),
    };
    let path_key = node.path.to_string();

    if !node.is_branch() {
        return rsx! {
            SidebarMenuItem {
                "data-path": "{path_key}",
                NavLink {
                    to: item.href.clone(),
                    external: item.external,
                    SidebarMenuButton {
                        active,
                        size,
                        if let Some(icon) = icon {
                            span { class: "nav-icon", {icon} }
                        }
                        span { class: "{title_class}", "{item.title}" }
                    }
                }
            }
        };
    }

    let open = ctx.expanded.read().is_open(&node.path);
    let mut expanded = ctx.expanded;
    let path = node.path.clone();
    let title = item.title.clone();

    rsx! {
        SidebarMenuItem {
            "data-path": "{path_key}",
            "data-branch": "true",
            SidebarMenuButton {
                active,
                size,
                expanded: open,
                onclick: move |_| {
                    let now_open = expanded.write().toggle(&path);
                    tracing::debug!(path = %path, title = %title, open = ?now_open, "Toggled navigation branch");
                },
                if let Some(icon) = icon {
                    span { class: "nav-icon", {icon} }
                }
                span { class: "{title_class}", "{item.title}" }
                svg {
                    class: "nav-chevron",
                    "data-state": if open { "open" } else { "closed" },
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M6 9l6 6 6-6" }
                }
            }
            if open {
                SidebarMenuSub {
                    for child in node.children.iter().copied() {
                        {render_node(ctx, child)}
                    }
                }
            }
        }
    }
}
