use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::aquarium::AquariumDto;
use crate::model::tank::{TankKind, TANK_KINDS};
use crate::model::validate::{validate_tank_form, TankForm};

#[component]
pub fn NewTank() -> Element {
    let nav = use_navigator();

    let mut aquariums = use_signal(Vec::<AquariumDto>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut reload = use_signal(|| 0u32);

    let mut form = use_signal(TankForm::default);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

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

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let dto = match validate_tank_form(&form.peek()) {
            Ok(dto) => dto,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };

        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::create_tank::create_tank;

            match create_tank(&dto).await {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    form_error.set(Some(err));
                    submitting.set(false);
                }
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = dto;
    };

    let aquarium_list = aquariums.read().clone();
    let current = form.read().clone();

    // Volume is labeled in the selected aquarium's units
    let volume_unit = current
        .aquarium_id
        .parse::<i32>()
        .ok()
        .and_then(|id| {
            aquarium_list
                .iter()
                .find(|aquarium| aquarium.id == id)
                .map(|aquarium| aquarium.preferred_units)
        })
        .unwrap_or_default()
        .volume_unit();

    rsx!(
        Title { "New Tank | TankWiki" }
        Meta {
            name: "description",
            content: "Create a new tank."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-xl p-6 flex flex-col gap-6",
                h1 { class: "text-3xl font-bold", "Create New Tank" }

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
                            p { "You need to create an aquarium first before adding tanks." }
                            Link {
                                to: Route::NewAquarium {},
                                class: "btn btn-primary",
                                "Create Aquarium"
                            }
                        }
                    }
                } else {
                    form { class: "flex flex-col gap-4", onsubmit: on_submit,
                        label { class: "flex flex-col gap-1",
                            span { class: "text-sm font-medium", "Aquarium" }
                            select {
                                class: "select select-bordered w-full",
                                value: "{current.aquarium_id}",
                                oninput: move |event| form.write().aquarium_id = event.value(),
                                option { value: "", "Select an aquarium" }
                                {aquarium_list.iter().map(|aquarium| {
                                    rsx!(
                                        option {
                                            key: "{aquarium.id}",
                                            value: "{aquarium.id}",
                                            "{aquarium.name}"
                                        }
                                    )
                                })}
                            }
                        }
                        label { class: "flex flex-col gap-1",
                            span { class: "text-sm font-medium", "Tank Name" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "e.g. Display Tank",
                                value: "{current.name}",
                                oninput: move |event| form.write().name = event.value(),
                            }
                        }
                        label { class: "flex flex-col gap-1",
                            span { class: "text-sm font-medium", "Volume ({volume_unit})" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "number",
                                min: "0",
                                step: "any",
                                placeholder: "e.g. 75",
                                value: "{current.volume}",
                                oninput: move |event| form.write().volume = event.value(),
                            }
                        }
                        label { class: "flex flex-col gap-1",
                            span { class: "text-sm font-medium", "Tank Type" }
                            select {
                                class: "select select-bordered w-full",
                                value: "{current.tank_type}",
                                oninput: move |event| form.write().tank_type = event.value(),
                                option { value: "", "Select a tank type" }
                                {TANK_KINDS.iter().map(|kind| {
                                    let value = kind.as_str();
                                    let label = kind.label();

                                    rsx!(option { key: "{value}", value: "{value}", "{label}" })
                                })}
                            }
                        }
                        if current.tank_type == TankKind::Other.as_str() {
                            label { class: "flex flex-col gap-1",
                                span { class: "text-sm font-medium", "Custom Tank Type" }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "text",
                                    placeholder: "e.g. Jellyfish Kreisel",
                                    value: "{current.custom_type}",
                                    oninput: move |event| form.write().custom_type = event.value(),
                                }
                            }
                        }
                        if let Some(message) = form_error() {
                            p { class: "text-error text-sm", "{message}" }
                        }
                        div { class: "flex gap-2",
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm" }
                                    "Creating..."
                                } else {
                                    "Create Tank"
                                }
                            }
                            Link {
                                to: Route::Dashboard {},
                                class: "btn btn-ghost",
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    )
}
