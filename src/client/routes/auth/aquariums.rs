use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::aquarium::AquariumDto;
use crate::model::display::format_date;

#[component]
pub fn Aquariums() -> Element {
    let mut aquariums = use_signal(Vec::<AquariumDto>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use crate::client::util::get_aquariums::get_aquariums;

        let future = use_resource(move || {
            let _attempt = reload();
            async move { get_aquariums().await }
        });

        match &*future.read_unchecked() {
            Some(result) => {
                if *loading.peek() {
                    match result {
                        Ok(items) => aquariums.set(items.clone()),
                        Err(err) => load_error.set(Some(err.clone())),
                    }
                    loading.set(false);
                }
            }
            None => (),
        }
    }

    let retry = move |_| {
        load_error.set(None);
        loading.set(true);
        reload += 1;
    };

    let aquarium_list = aquariums.read().clone();

    rsx!(
        Title { "Aquariums | TankWiki" }
        Meta {
            name: "description",
            content: "All of your aquariums."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-6",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    h1 { class: "text-3xl font-bold", "Aquariums" }
                    Link {
                        to: Route::NewAquarium {},
                        class: "btn btn-primary flex gap-2",
                        Icon { width: 16, height: 16, icon: FaPlus }
                        p { "New Aquarium" }
                    }
                }

                if loading() {
                    div { class: "flex justify-center py-16",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                } else if let Some(message) = load_error() {
                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body items-center text-center",
                            p { class: "text-error", "{message}" }
                            button { class: "btn btn-outline", onclick: retry,
                                "Try Again"
                            }
                        }
                    }
                } else if aquarium_list.is_empty() {
                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body items-center text-center",
                            p { "No aquariums yet. Create one to start adding tanks." }
                            Link {
                                to: Route::NewAquarium {},
                                class: "btn btn-primary",
                                "Create Aquarium"
                            }
                        }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        {aquarium_list.iter().map(|aquarium| {
                            let units_label = aquarium.preferred_units.label();
                            let added = format_date(aquarium.created_at.date());

                            rsx!(
                                div {
                                    key: "{aquarium.id}",
                                    class: "card bg-base-200 shadow-sm",
                                    div { class: "card-body",
                                        h2 { class: "card-title", "{aquarium.name}" }
                                        p { "Units: {units_label}" }
                                        p { class: "text-sm opacity-70", "Added {added}" }
                                    }
                                }
                            )
                        })}
                    }
                }
            }
        }
    )
}
