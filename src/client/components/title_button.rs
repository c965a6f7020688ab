use dioxus::prelude::*;

use crate::client::router::Route;

/// Brand button shown in both navbars
///
/// Defaults to the public home page; the signed-in navbar points it at the
/// dashboard instead.
#[component]
pub fn TankWikiTitleButton(to: Option<Route>) -> Element {
    let to = to.unwrap_or(Route::Home {});

    rsx!(
        Link {
            to,
            div { class: "flex items-center gap-2",
                p { class: "text-xl font-bold",
                    "🐠 TankWiki"
                }
                p { class: "text-xs opacity-60",
                    "v0.1.0"
                }
            }
        }
    )
}
