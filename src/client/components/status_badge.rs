use dioxus::prelude::*;

use crate::model::display::StatusTone;

/// Colored badge for a free-form status string
#[component]
pub fn StatusBadge(status: String) -> Element {
    let badge_class = StatusTone::from_status(&status).badge_class();

    rsx!(
        span { class: "badge badge-sm {badge_class}",
            "{status}"
        }
    )
}
