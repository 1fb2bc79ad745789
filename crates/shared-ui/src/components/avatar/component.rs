use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;
use shared_types::format::initials;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Avatar for a named person: the picture when `src` loads, their initials
/// otherwise.
#[component]
pub fn UserAvatar(name: String, #[props(default)] src: Option<String>) -> Element {
    let fallback = initials(&name);

    rsx! {
        Avatar {
            if let Some(url) = src {
                AvatarImage { src: url }
            }
            AvatarFallback { "{fallback}" }
        }
    }
}
