use dioxus::document::Stylesheet;
use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::user::UserState;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Root component, provides the shared session identity and mounts the router
#[component]
pub fn App() -> Element {
    let mut user_store = use_context_provider(|| Signal::new(UserState::default()));

    // Resolve the session once for the whole app; views read the shared state
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::get_user::get_user;

        let future = use_resource(|| async move { get_user().await });

        match &*future.read_unchecked() {
            Some(result) => {
                if !user_store.peek().fetched {
                    let user = match result {
                        Ok(user) => user.clone(),
                        Err(err) => {
                            tracing::error!("Failed to fetch session user: {err}");
                            None
                        }
                    };
                    user_store.set(UserState {
                        user,
                        fetched: true,
                    });
                }
            }
            None => (),
        }
    }

    rsx!(
        Stylesheet { href: TAILWIND_CSS }
        Router::<Route> {}
    )
}
