use std::collections::HashMap;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::aquarium::AquariumDto;
use crate::model::compose::{livestock_totals, tanks_by_aquarium};
use crate::model::livestock::LivestockSummaryDto;
use crate::model::tank::TankDto;

#[component]
pub fn Dashboard() -> Element {
    let mut aquariums = use_signal(Vec::<AquariumDto>::new);
    let mut tanks = use_signal(Vec::<TankDto>::new);
    let mut livestock = use_signal(Vec::<LivestockSummaryDto>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::{
            get_aquariums::get_aquariums, get_livestock_summary::get_livestock_summary,
            get_tanks::get_tanks,
        };

        let future = use_resource(move || {
            let _attempt = reload();
            async move {
                (
                    get_aquariums().await,
                    get_tanks().await,
                    get_livestock_summary().await,
                )
            }
        });

        match &*future.read_unchecked() {
            Some((aquarium_result, tank_result, livestock_result)) => {
                if *loading.peek() {
                    // Aquariums are the primary collection, the rest degrade
                    // to empty on failure
                    match aquarium_result {
                        Ok(items) => aquariums.set(items.clone()),
                        Err(err) => load_error.set(Some(err.clone())),
                    }
                    match tank_result {
                        Ok(items) => tanks.set(items.clone()),
                        Err(err) => tracing::error!("Failed to fetch tanks: {err}"),
                    }
                    match livestock_result {
                        Ok(items) => livestock.set(items.clone()),
                        Err(err) => tracing::error!("Failed to fetch livestock summary: {err}"),
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
    let grouped = tanks_by_aquarium(&tanks.read());
    let totals = livestock_totals(&livestock.read());

    rsx!(
        Title { "Dashboard | TankWiki" }
        Meta {
            name: "description",
            content: "Your aquariums and tanks at a glance."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-6",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    h1 { class: "text-3xl font-bold", "Dashboard" }
                    div { class: "flex gap-2",
                        Link {
                            to: Route::NewAquarium {},
                            class: "btn btn-outline flex gap-2",
                            Icon { width: 16, height: 16, icon: FaPlus }
                            p { "New Aquarium" }
                        }
                        Link {
                            to: Route::NewTank {},
                            class: "btn btn-primary flex gap-2",
                            Icon { width: 16, height: 16, icon: FaPlus }
                            p { "New Tank" }
                        }
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
                    {aquarium_list.iter().map(|aquarium| {
                        let aquarium_tanks = grouped.get(&aquarium.id).cloned().unwrap_or_default();

                        rsx!(
                            AquariumSection {
                                key: "{aquarium.id}",
                                aquarium: aquarium.clone(),
                                tanks: aquarium_tanks,
                                totals: totals.clone(),
                            }
                        )
                    })}
                }
            }
        }
    )
}

#[component]
pub fn AquariumSection(
    aquarium: AquariumDto,
    tanks: Vec<TankDto>,
    totals: HashMap<i32, i64>,
) -> Element {
    let units_label = aquarium.preferred_units.label();
    let tank_count = tanks.len();

    rsx!(
        section { class: "flex flex-col gap-3",
            div { class: "flex flex-wrap items-baseline gap-3",
                h2 { class: "text-2xl font-semibold", "{aquarium.name}" }
                p { class: "text-sm opacity-70", "Units: {units_label}" }
                p { class: "text-sm opacity-70", "Tanks: {tank_count}" }
            }
            if tanks.is_empty() {
                p { class: "opacity-70", "No tanks in this aquarium yet." }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                    {tanks.iter().map(|tank| {
                        let type_label = tank.type_label();
                        let volume_unit = tank.volume_unit();
                        let total = totals.get(&tank.id).copied().unwrap_or(0);

                        rsx!(
                            Link {
                                key: "{tank.id}",
                                to: Route::TankDetail { id: tank.id },
                                class: "card bg-base-200 shadow-sm hover:shadow-md transition-shadow",
                                div { class: "card-body",
                                    h3 { class: "card-title", "{tank.name}" }
                                    p { "Type: {type_label}" }
                                    p { "Volume: {tank.volume} {volume_unit}" }
                                    p { "Livestock: {total}" }
                                }
                            }
                        )
                    })}
                }
            }
        }
    )
}
