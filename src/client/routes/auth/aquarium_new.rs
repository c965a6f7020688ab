use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::aquarium::UnitSystem;
use crate::model::validate::{validate_aquarium_form, AquariumForm};

#[component]
pub fn NewAquarium() -> Element {
    let nav = use_navigator();

    let mut form = use_signal(AquariumForm::default);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let dto = match validate_aquarium_form(&form.peek()) {
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
            use crate::client::util::create_aquarium::create_aquarium;

            match create_aquarium(&dto).await {
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

    let current = form.read().clone();

    rsx!(
        Title { "New Aquarium | TankWiki" }
        Meta {
            name: "description",
            content: "Create a new aquarium."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-xl p-6 flex flex-col gap-6",
                h1 { class: "text-3xl font-bold", "Create New Aquarium" }
                form { class: "flex flex-col gap-4", onsubmit: on_submit,
                    label { class: "flex flex-col gap-1",
                        span { class: "text-sm font-medium", "Aquarium Name" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "e.g. Living Room Reef",
                            value: "{current.name}",
                            oninput: move |event| form.write().name = event.value(),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { class: "text-sm font-medium", "Preferred Units" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{current.preferred_units}",
                            oninput: move |event| form.write().preferred_units = event.value(),
                            option { value: "", "Select your preferred units" }
                            {[UnitSystem::Imperial, UnitSystem::Metric].iter().map(|units| {
                                let value = units.as_str();
                                let label = units.label();

                                rsx!(option { key: "{value}", value: "{value}", "{label}" })
                            })}
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
                                "Create Aquarium"
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
    )
}
