//! Lucide icons by name, so menus and tiles can refer to them as data.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdClock, LdDatabase, LdDollarSign, LdFileText, LdLayoutGrid, LdPlus,
    LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;

/// Render the icon registered under `name`, or nothing for an unknown name.
pub fn icon(name: &str, size: u32) -> Element {
    match name {
        "layout-grid" => rsx! { Icon::<LdLayoutGrid> { icon: LdLayoutGrid, width: size, height: size } },
        "users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        "user-check" => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: size, height: size } },
        "shield" => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        "file-text" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        "plus" => rsx! { Icon::<LdPlus> { icon: LdPlus, width: size, height: size } },
        "dollar-sign" => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: size, height: size } },
        "book-open" => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: size, height: size } },
        "settings" => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        "database" => rsx! { Icon::<LdDatabase> { icon: LdDatabase, width: size, height: size } },
        "clock" => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        "briefcase" => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: size, height: size } },
        other => {
            tracing::debug!(icon = other, "No icon registered under this name");
            rsx! {}
        }
    }
}
