use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaDroplet, FaFish, FaFlask};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn LoginButton() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    rsx!(
        ul { class: "flex gap-2",
            if user_store.read().user.is_some() {
                li {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary w-40",
                        "Go to Dashboard"
                    }
                }
                li {
                    a { href: "/api/docs",
                        button {
                            class: "btn btn-secondary w-28",
                            "API Docs"
                        }
                    }
                }
            } else if user_store.read().fetched {
                li {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-40",
                        "Get Started"
                    }
                }
            }
        }
    )
}

#[component]
pub fn FeatureCard(title: &'static str, description: &'static str, icon: Element) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm w-full max-w-80",
            div { class: "card-body items-center text-center",
                {icon}
                h2 { class: "card-title", "{title}" }
                p { "{description}" }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "TankWiki" }
        Meta {
            name: "description",
            content: "Aquarium management for tracking tanks, livestock, equipment, and water tests."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 py-10",
                div { class: "badge badge-outline", "Aquarium Management" }
                h1 { class: "text-5xl font-bold", "🐠 TankWiki" }
                p { class: "text-lg text-center max-w-xl",
                    "Track your aquariums, tanks, livestock, equipment, and water tests in one place."
                }
                LoginButton { }
                div { class: "flex flex-wrap justify-center gap-4 pt-6",
                    FeatureCard {
                        title: "Tank Tracking",
                        description: "Every tank with its volume, type, and equipment, grouped by aquarium.",
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaFish })
                    }
                    FeatureCard {
                        title: "Livestock Records",
                        description: "Species, headcounts, and health status for everything in your tanks.",
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaDroplet })
                    }
                    FeatureCard {
                        title: "Maintenance & Tests",
                        description: "Recent maintenance work and water test results at a glance.",
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaFlask })
                    }
                }
            }
        }
    )
}
