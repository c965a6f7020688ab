use dioxus::prelude::*;

use crate::client::components::{TankWikiTitleButton, ThemeToggle};
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn AuthNavbar() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let email = user_store
        .read()
        .user
        .as_ref()
        .map(|user| user.email.clone());

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                TankWikiTitleButton { to: Route::Dashboard {} }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li {
                        Link {
                            to: Route::Dashboard {},
                            active_class: "menu-active",
                            "Dashboard"
                        }
                    }
                    li {
                        Link {
                            to: Route::Aquariums {},
                            active_class: "menu-active",
                            "Aquariums"
                        }
                    }
                    li {
                        Link {
                            to: Route::Tanks {},
                            active_class: "menu-active",
                            "Tanks"
                        }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(email) = email {
                    p { class: "text-sm opacity-70 hidden md:block",
                        "{email}"
                    }
                }
                ThemeToggle {}
                div { class: "h-10",
                    a { href: "/api/auth/logout",
                        button {
                            class: "btn btn-outline",
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
