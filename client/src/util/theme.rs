//! Theme initialization and toggle.
//!
//! Reads the stored theme from `localStorage` and applies it as a class on
//! the `<html>` element. The stored value is `"dark"` or `"light"`; anything
//! else falls back to dark. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "hirehub-ui-theme";

#[must_use]
pub fn parse_stored(raw: Option<&str>) -> bool {
    !matches!(raw, Some("light"))
}

#[must_use]
pub fn class_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the stored preference. Returns `true` for dark.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        parse_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        parse_stored(None)
    }
}

/// Put the theme class on `<html>`, replacing the other one.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let list = el.class_list();
            let _ = list.remove_1(class_name(!dark));
            let _ = list.add_1(class_name(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, class_name(next));
        }
    }
    next
}
