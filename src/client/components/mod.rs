pub mod auth;
pub mod navbar;
pub mod page;
pub mod status_badge;
pub mod theme_toggle;
pub mod title_button;

pub use navbar::Navbar;
pub use page::Page;
pub use status_badge::StatusBadge;
pub use theme_toggle::ThemeToggle;
pub use title_button::TankWikiTitleButton;
