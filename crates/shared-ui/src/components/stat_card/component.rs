use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_primitives::progress as prim;
use shared_types::count_up::{DEFAULT_DURATION_MS, DEFAULT_START_DELAY_MS, DEFAULT_TICK_MS};
use shared_types::format::{clamp_percent, format_thousands};
use shared_types::CountUp;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::{Card, CardAccent, CardAction, CardContent, CardHeader, CardTitle};
use crate::timer::sleep_ms;

/// Headline figure that counts up from zero after mounting.
///
/// The count starts once `start_delay_ms` has elapsed and advances every
/// `tick_ms` until it lands exactly on `value`. A new `value` or timing
/// cancels the running count and starts over from zero. The timer belongs to
/// the card's scope and is cancelled when the card unmounts, even if the
/// delay has not elapsed yet.
#[component]
pub fn StatCard(
    /// Final figure the count settles on.
    value: u64,
    #[props(default)] title: String,
    subtitle: String,
    #[props(default)] icon: Option<Element>,
    /// Change label such as `"+12.5%"`.
    #[props(default)]
    trend: Option<String>,
    /// Fill of the bar under the figure, in percent.
    #[props(default = 75.0)]
    progress: f64,
    #[props(default)] accent: CardAccent,
    #[props(default = DEFAULT_DURATION_MS)] duration_ms: u64,
    #[props(default = DEFAULT_TICK_MS)] tick_ms: u64,
    #[props(default = DEFAULT_START_DELAY_MS)] start_delay_ms: u64,
) -> Element {
    let mut count = use_signal(|| 0u64);
    let mut hovered = use_signal(|| false);

    // Restart the count whenever the target or timing changes.
    let running = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    let slot = running.clone();
    use_effect(use_reactive!(|(value, duration_ms, tick_ms, start_delay_ms)| {
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        let task = spawn(async move {
            if *count.peek() != 0 {
                count.set(0);
            }
            sleep_ms(start_delay_ms).await;
            let mut animation = CountUp::new(value, duration_ms, tick_ms);
            while !animation.is_done() {
                sleep_ms(tick_ms.max(1)).await;
                count.set(animation.tick());
            }
            tracing::debug!(value, "Stat count-up finished");
        });
        slot.set(Some(task));
    }));
    use_drop(move || {
        if let Some(task) = running.take() {
            task.cancel();
        }
    });

    let display = format_thousands(count());
    let fill = clamp_percent(progress);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "stat-card-shell",
            "data-hovered": if hovered() { "true" } else { "false" },
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            Card {
                accent,
                class: "stat-card",
                CardHeader {
                    div { class: "stat-card-heading",
                        if !title.is_empty() {
                            CardTitle { "{title}" }
                        }
                        p { class: "stat-card-subtitle", "{subtitle}" }
                    }
                    if let Some(icon) = icon {
                        CardAction {
                            span { class: "stat-card-icon", {icon} }
                        }
                    }
                }
                CardContent {
                    div { class: "stat-card-figure",
                        span { class: "stat-card-value", "{display}" }
                        if let Some(trend) = trend {
                            Badge { variant: BadgeVariant::Success, class: "stat-card-trend", "{trend}" }
                        }
                    }
                    prim::Progress {
                        class: "stat-card-progress",
                        value: Some(fill),
                        prim::ProgressIndicator { class: "stat-card-progress-indicator" }
                    }
                }
            }
        }
    }
}
