use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::tank::TankDto;

#[component]
pub fn Tanks() -> Element {
    let mut tanks = use_signal(Vec::<TankDto>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use crate::client::util::get_tanks::get_tanks;

        let future = use_resource(move || {
            let _attempt = reload();
            async move { get_tanks().await }
        });

        match &*future.read_unchecked() {
            Some(result) => {
                if *loading.peek() {
                    match result {
                        Ok(items) => tanks.set(items.clone()),
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

    let tank_list = tanks.read().clone();

    rsx!(
        Title { "Tanks | TankWiki" }
        Meta {
            name: "description",
            content: "All of your tanks."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-6",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    h1 { class: "text-3xl font-bold", "Tanks" }
                    Link {
                        to: Route::NewTank {},
                        class: "btn btn-primary flex gap-2",
                        Icon { width: 16, height: 16, icon: FaPlus }
                        p { "New Tank" }
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
                } else if tank_list.is_empty() {
                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body items-center text-center",
                            p { "No tanks yet." }
                            Link {
                                to: Route::NewTank {},
                                class: "btn btn-primary",
                                "Create Tank"
                            }
                        }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        {tank_list.iter().map(|tank| {
                            let type_label = tank.type_label();
                            let volume_unit = tank.volume_unit();

                            rsx!(
                                Link {
                                    key: "{tank.id}",
                                    to: Route::TankDetail { id: tank.id },
                                    class: "card bg-base-200 shadow-sm hover:shadow-md transition-shadow",
                                    div { class: "card-body",
                                        h2 { class: "card-title", "{tank.name}" }
                                        p { "Type: {type_label}" }
                                        p { "Volume: {tank.volume} {volume_unit}" }
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
