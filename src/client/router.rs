use dioxus::prelude::*;

use crate::client::{
    components::{auth::AuthLayout, Navbar},
    routes::{
        auth::{Aquariums, Dashboard, NewAquarium, NewTank, TankDetail, Tanks},
        AuthCallback, Home, Login, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/auth/callback?:token")]
    AuthCallback { token: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[layout(AuthLayout)]

    #[route("/dashboard")]
    Dashboard {},

    #[route("/aquariums")]
    Aquariums {},

    #[route("/aquariums/new")]
    NewAquarium {},

    #[route("/tanks")]
    Tanks {},

    #[route("/tanks/new")]
    NewTank {},

    #[route("/tanks/:id")]
    TankDetail { id: i32 },
}
