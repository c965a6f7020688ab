pub mod auth;
pub mod auth_callback;
pub mod home;
pub mod login;
pub mod not_found;

pub use auth_callback::AuthCallback;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
