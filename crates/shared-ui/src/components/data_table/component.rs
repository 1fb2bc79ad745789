use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
///
/// A non-empty `label` is rendered as the table's `<caption>`.
#[component]
pub fn DataTable(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                if !label.is_empty() {
                    caption { class: "data-table-caption", "{label}" }
                }
                {children}
            }
        }
    }
}

/// Header row; wraps `th` cells in `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header. Numeric columns are right-aligned.
#[component]
pub fn DataTableColumn(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        th {
            scope: "col",
            class: if numeric { "numeric" } else { "" },
            {children}
        }
    }
}

#[component]
pub fn DataTableRow(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "data-table-row", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        tr {
            ..merged,
            {children}
        }
    }
}

/// Body cell. Numeric cells are right-aligned with tabular figures.
#[component]
pub fn DataTableCell(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        td {
            class: if numeric { "numeric" } else { "" },
            {children}
        }
    }
}
