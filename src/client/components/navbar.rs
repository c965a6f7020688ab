use dioxus::prelude::*;

use crate::client::components::{TankWikiTitleButton, ThemeToggle};
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let signed_in = user_store.read().user.is_some();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                TankWikiTitleButton {}
            }
            div {
                class: "navbar-end gap-2",
                ThemeToggle {}
                if signed_in {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary",
                        "Dashboard"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary",
                        "Sign In"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
