use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                h1 { class: "text-4xl font-bold", "404" }
                p { "No page at /{path}" }
                Link {
                    to: Route::Home {},
                    class: "btn btn-primary",
                    "Back to Home"
                }
            }
        }
    )
}
