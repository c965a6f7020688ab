use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::user::UserState;
use crate::model::validate::validate_email;

#[component]
pub fn Login() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut callback_link = use_signal(|| None::<String>);

    // Signed-in visitors have no business here
    use_effect(move || {
        let state = user_store.read();
        if state.fetched && state.user.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let address = match validate_email(&email.peek()) {
            Ok(address) => address,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };

        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::sign_in::request_sign_in;

            match request_sign_in(&address).await {
                Ok(link) => callback_link.set(Some(link.callback)),
                Err(err) => form_error.set(Some(format!("Failed to request sign-in link: {err}"))),
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = address;
    };

    rsx!(
        Title { "Sign In | TankWiki" }
        Meta {
            name: "description",
            content: "Sign in to TankWiki with an emailed link."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-200 shadow-sm w-full max-w-96",
                div { class: "card-body",
                    if let Some(link) = callback_link() {
                        h2 { class: "card-title", "Check your email" }
                        p { "We sent a sign-in link to the address you entered." }
                        p { class: "text-sm opacity-70",
                            "Mail delivery is not wired up yet, use the link below to finish signing in."
                        }
                        a { class: "link link-primary break-all", href: "{link}",
                            "{link}"
                        }
                    } else {
                        h2 { class: "card-title", "Sign in to TankWiki" }
                        p { "Enter your email and we'll send you a sign-in link." }
                        form { class: "flex flex-col gap-3", onsubmit: on_submit,
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: "{email}",
                                oninput: move |event| email.set(event.value()),
                            }
                            if let Some(message) = form_error() {
                                p { class: "text-error text-sm", "{message}" }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm" }
                                    "Sending..."
                                } else {
                                    "Send sign-in link"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
