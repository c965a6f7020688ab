use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn AuthCallback(token: String) -> Element {
    let mut user_store = use_context::<Signal<UserState>>();
    let nav = use_navigator();

    let mut sign_in_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        use crate::client::util::sign_in::complete_sign_in;

        let future = use_resource(move || {
            let token = token.clone();
            async move { complete_sign_in(&token).await }
        });

        match &*future.read_unchecked() {
            Some(Ok(user)) => {
                if user_store.peek().user.is_none() {
                    user_store.set(UserState {
                        user: Some(user.clone()),
                        fetched: true,
                    });
                }
                nav.replace(Route::Dashboard {});
            }
            Some(Err(err)) => {
                if sign_in_error.peek().is_none() {
                    sign_in_error.set(Some(err.clone()));
                }
            }
            None => (),
        }
    }

    rsx!(
        Title { "Signing In | TankWiki" }
        Meta {
            name: "description",
            content: "Completing TankWiki sign-in."
        }
        Page { class: "flex items-center justify-center",
            if let Some(message) = sign_in_error() {
                div { class: "card bg-base-200 shadow-sm w-full max-w-96",
                    div { class: "card-body items-center text-center",
                        h2 { class: "card-title text-error", "Authentication Error" }
                        p { "{message}" }
                        div { class: "flex gap-2",
                            Link {
                                to: Route::Login {},
                                class: "btn btn-primary",
                                "Try Again"
                            }
                            Link {
                                to: Route::Home {},
                                class: "btn btn-outline",
                                "Go to Home"
                            }
                        }
                    }
                }
            } else {
                div { class: "flex flex-col items-center gap-4",
                    span { class: "loading loading-spinner loading-lg" }
                    p { class: "text-lg", "Signing you in..." }
                    p { class: "opacity-70", "Please wait while we complete your authentication." }
                }
            }
        }
    )
}
