/// localStorage key holding the chosen color theme
#[cfg(feature = "web")]
pub const THEME_STORAGE_KEY: &str = "tankwiki-theme";

/// Apply the stored theme preference to the document
///
/// Falls back to the OS color scheme when nothing valid is stored. Returns
/// whether the applied theme is dark, or None when the script fails.
#[cfg(feature = "web")]
pub async fn apply_stored_theme() -> Option<bool> {
    use dioxus_logger::tracing;

    let script = format!(
        "const stored = localStorage.getItem('{THEME_STORAGE_KEY}');\n\
         const prefers_dark = window.matchMedia('(prefers-color-scheme: dark)').matches;\n\
         const theme = stored === 'light' || stored === 'dark' ? stored : prefers_dark ? 'dark' : 'light';\n\
         document.documentElement.setAttribute('data-theme', theme);\n\
         return theme;"
    );

    match dioxus::document::eval(&script).await {
        Ok(value) => value.as_str().map(|theme| theme == "dark"),
        Err(err) => {
            tracing::error!("Failed to apply stored theme: {err:?}");
            None
        }
    }
}

/// Apply and persist a theme choice
#[cfg(feature = "web")]
pub fn set_theme(dark: bool) {
    let theme = if dark { "dark" } else { "light" };
    let script = format!(
        "document.documentElement.setAttribute('data-theme', '{theme}');\n\
         localStorage.setItem('{THEME_STORAGE_KEY}', '{theme}');"
    );

    dioxus::document::eval(&script);
}
