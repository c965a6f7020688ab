use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

use crate::client::components::{Page, StatusBadge};
use crate::client::router::Route;
use crate::model::display::{format_date, format_date_time, livestock_display_name, title_case};
use crate::model::equipment::EquipmentDto;
use crate::model::livestock::LivestockDto;
use crate::model::maintenance::MaintenanceLogDto;
use crate::model::tank::TankDto;
use crate::model::test_result::TestResultDto;

#[component]
pub fn TankDetail(id: i32) -> Element {
    let mut tank = use_signal(|| None::<TankDto>);
    let mut equipment = use_signal(Vec::<EquipmentDto>::new);
    let mut livestock = use_signal(Vec::<LivestockDto>::new);
    let mut maintenance = use_signal(Vec::<MaintenanceLogDto>::new);
    let mut test_results = use_signal(Vec::<TestResultDto>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut missing = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::get_tank_records::{
            get_tank_equipment, get_tank_livestock, get_tank_maintenance, get_tank_test_results,
        };
        use crate::client::util::get_tanks::get_tank;

        let future = use_resource(move || {
            let _attempt = reload();
            async move {
                (
                    get_tank(id).await,
                    get_tank_equipment(id).await,
                    get_tank_livestock(id).await,
                    get_tank_maintenance(id).await,
                    get_tank_test_results(id).await,
                )
            }
        });

        match &*future.read_unchecked() {
            Some((tank_result, equipment_result, livestock_result, logs_result, tests_result)) => {
                if *loading.peek() {
                    // The tank row is the primary fetch, record collections
                    // degrade to empty on failure
                    match tank_result {
                        Ok(Some(found)) => tank.set(Some(found.clone())),
                        Ok(None) => missing.set(true),
                        Err(err) => load_error.set(Some(err.clone())),
                    }
                    match equipment_result {
                        Ok(items) => equipment.set(items.clone()),
                        Err(err) => tracing::error!("Failed to fetch equipment: {err}"),
                    }
                    match livestock_result {
                        Ok(items) => livestock.set(items.clone()),
                        Err(err) => tracing::error!("Failed to fetch livestock: {err}"),
                    }
                    match logs_result {
                        Ok(items) => maintenance.set(items.clone()),
                        Err(err) => tracing::error!("Failed to fetch maintenance logs: {err}"),
                    }
                    match tests_result {
                        Ok(items) => test_results.set(items.clone()),
                        Err(err) => tracing::error!("Failed to fetch test results: {err}"),
                    }
                    loading.set(false);
                }
            }
            None => (),
        }
    }

    let retry = move |_| {
        load_error.set(None);
        missing.set(false);
        loading.set(true);
        reload += 1;
    };

    rsx!(
        Title { "Tank Details | TankWiki" }
        Meta {
            name: "description",
            content: "Equipment, livestock, maintenance, and test results for a tank."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-6",
                if loading() {
                    div { class: "flex flex-col items-center gap-4 py-16",
                        span { class: "loading loading-spinner loading-lg" }
                        p { "Loading tank details..." }
                    }
                } else if let Some(message) = load_error() {
                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body items-center text-center",
                            p { class: "text-error", "{message}" }
                            div { class: "flex gap-2",
                                button { class: "btn btn-outline", onclick: retry,
                                    "Try Again"
                                }
                                Link {
                                    to: Route::Dashboard {},
                                    class: "btn btn-primary",
                                    "Back to Dashboard"
                                }
                            }
                        }
                    }
                } else if missing() {
                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body items-center text-center",
                            h2 { class: "card-title", "Tank not found" }
                            p { "This tank doesn't exist or belongs to another account." }
                            Link {
                                to: Route::Dashboard {},
                                class: "btn btn-primary",
                                "Back to Dashboard"
                            }
                        }
                    }
                } else if let Some(tank) = tank() {
                    TankHeader { tank: tank.clone() }
                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                        EquipmentCard { equipment: equipment.read().clone() }
                        LivestockCard { livestock: livestock.read().clone() }
                        MaintenanceCard { maintenance: maintenance.read().clone() }
                        TestResultsCard { test_results: test_results.read().clone() }
                    }
                }
            }
        }
    )
}

#[component]
pub fn TankHeader(tank: TankDto) -> Element {
    let type_label = tank.type_label();
    let volume_unit = tank.volume_unit();

    rsx!(
        div { class: "flex flex-col gap-2",
            Link {
                to: Route::Dashboard {},
                class: "link link-hover flex items-center gap-1 w-fit",
                Icon { width: 14, height: 14, icon: FaArrowLeft }
                "Back to Dashboard"
            }
            h1 { class: "text-3xl font-bold", "{tank.name}" }
            p { class: "opacity-70", "{tank.volume} {volume_unit} • {type_label}" }
        }
    )
}

#[component]
pub fn EquipmentCard(equipment: Vec<EquipmentDto>) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Equipment" }
                if equipment.is_empty() {
                    p { class: "opacity-70", "No equipment added yet" }
                } else {
                    ul { class: "flex flex-col gap-3",
                        {equipment.iter().map(|item| {
                            let equipment_type = title_case(&item.equipment_type);
                            let installed = format_date(item.install_date);

                            rsx!(
                                li {
                                    key: "{item.id}",
                                    class: "flex items-center justify-between gap-2",
                                    div {
                                        p { class: "font-semibold", "{item.name}" }
                                        p { class: "text-sm opacity-70",
                                            "{equipment_type} • Installed {installed}"
                                        }
                                    }
                                    StatusBadge { status: item.status.clone() }
                                }
                            )
                        })}
                    }
                }
            }
        }
    )
}

#[component]
pub fn LivestockCard(livestock: Vec<LivestockDto>) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Livestock" }
                if livestock.is_empty() {
                    p { class: "opacity-70", "No livestock added yet" }
                } else {
                    ul { class: "flex flex-col gap-3",
                        {livestock.iter().map(|animal| {
                            let display_name =
                                livestock_display_name(animal.common_name.as_deref(), &animal.species)
                                    .to_string();
                            let has_common_name = animal
                                .common_name
                                .as_deref()
                                .is_some_and(|name| !name.is_empty());
                            let added = format_date(animal.date_added);

                            rsx!(
                                li {
                                    key: "{animal.id}",
                                    class: "flex items-center justify-between gap-2",
                                    div {
                                        p { class: "font-semibold",
                                            "{display_name} ({animal.quantity}x)"
                                        }
                                        if has_common_name {
                                            p { class: "text-sm italic opacity-70",
                                                "Species: {animal.species}"
                                            }
                                        }
                                        p { class: "text-sm opacity-70", "Added {added}" }
                                    }
                                    StatusBadge { status: animal.health_status.clone() }
                                }
                            )
                        })}
                    }
                }
            }
        }
    )
}

#[component]
pub fn MaintenanceCard(maintenance: Vec<MaintenanceLogDto>) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Recent Maintenance" }
                if maintenance.is_empty() {
                    p { class: "opacity-70", "No maintenance records yet" }
                } else {
                    ul { class: "flex flex-col gap-3",
                        {maintenance.iter().map(|entry| {
                            let performed = format_date_time(entry.performed_at);

                            rsx!(
                                li { key: "{entry.id}",
                                    p { class: "font-semibold", "{entry.task}" }
                                    p { class: "text-sm opacity-70", "{performed}" }
                                    if let Some(notes) = &entry.notes {
                                        p { class: "text-sm opacity-70", "{notes}" }
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

#[component]
pub fn TestResultsCard(test_results: Vec<TestResultDto>) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Recent Test Results" }
                if test_results.is_empty() {
                    p { class: "opacity-70", "No test results yet" }
                } else {
                    ul { class: "flex flex-col gap-3",
                        {test_results.iter().map(|result| {
                            let test_type = title_case(&result.test_type);
                            let tested = format_date_time(result.tested_at);

                            rsx!(
                                li { key: "{result.id}",
                                    p { class: "font-semibold",
                                        "{test_type}: {result.value} {result.unit}"
                                    }
                                    p { class: "text-sm opacity-70", "{tested}" }
                                }
                            )
                        })}
                    }
                }
            }
        }
    )
}
