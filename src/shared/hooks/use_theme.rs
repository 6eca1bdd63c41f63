use dioxus::prelude::*;

pub use crate::domain::models::Theme;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "theme";

/// Theme hook: current theme signal, restored from localStorage on mount.
///
/// Follows a `Signal<Theme>` context when an ancestor provides one.
pub fn use_theme() -> Signal<Theme> {
    let own_theme = use_signal(Theme::default);
    let current_theme = use_hook(try_consume_context::<Signal<Theme>>).unwrap_or(own_theme);

    // Storage and media queries only exist in the browser
    #[cfg(target_arch = "wasm32")]
    {
        let mut current_theme = current_theme;
        use_effect(move || {
            let restored = load_saved_theme().unwrap_or_else(|| Theme::system_default(prefers_dark()));
            current_theme.set(restored);
            apply_theme_css(restored);
        });
    }

    current_theme
}

/// Switch the theme: update the signal, the root CSS class and localStorage.
///
/// The shell renders the signal as a class on every renderer; the root
/// class only exists in the browser, where it also themes the page body.
pub fn apply_theme(mut current_theme: Signal<Theme>, theme: Theme) {
    current_theme.set(theme);
    apply_theme_css(theme);
    save_theme(theme);
}

#[cfg(target_arch = "wasm32")]
fn load_saved_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item(STORAGE_KEY).ok()??;
    saved.parse::<Theme>().ok()
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Apply theme CSS class to document element
#[cfg(target_arch = "wasm32")]
fn apply_theme_css(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
    let _ = classes.add_1(theme.as_str());
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_css(_theme: Theme) {
    // No-op on server
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
fn save_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_theme(_theme: Theme) {
    // No-op on server
}
