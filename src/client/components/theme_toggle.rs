use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;

/// Button that flips the color theme and persists the choice
#[component]
pub fn ThemeToggle() -> Element {
    let mut dark = use_signal(|| true);

    // Sync the toggle with whatever theme the stored preference resolves to
    #[cfg(feature = "web")]
    {
        use crate::client::util::theme;

        use_effect(move || {
            spawn(async move {
                if let Some(applied_dark) = theme::apply_stored_theme().await {
                    dark.set(applied_dark);
                }
            });
        });
    }

    rsx!(
        button {
            class: "btn btn-ghost btn-circle",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                let next = !dark();
                dark.set(next);

                #[cfg(feature = "web")]
                crate::client::util::theme::set_theme(next);
            },
            if dark() {
                Icon { width: 20, height: 20, icon: FaSun }
            } else {
                Icon { width: 20, height: 20, icon: FaMoon }
            }
        }
    )
}
