use dioxus::prelude::*;

use crate::client::components::auth::AuthNavbar;
use crate::client::router::Route;
use crate::client::store::user::UserState;

/// Layout wrapping every route that requires a session
///
/// Holds a spinner until the root session check settles, then either renders
/// the protected content or sends the visitor to the login page. Fetch
/// failures count as signed out, they never surface here as errors.
#[component]
pub fn AuthLayout() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let nav = use_navigator();

    use_effect(move || {
        let state = user_store.read();
        if state.fetched && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let state = user_store.read();

    // Spinner covers both the pending check and the instant before redirect
    if !state.fetched || state.user.is_none() {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    rsx! {
        AuthNavbar {}

        Outlet::<Route> {}
    }
}
