//! Tests for the browser session backend.

#[cfg(test)]
mod tests {
    use crate::storage::token_cookie;

    #[test]
    fn token_cookie_is_site_wide_and_lax() {
        let cookie = token_cookie(Some("abc"));
        assert!(cookie.starts_with("token=abc"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Max-Age"));
    }

    #[test]
    fn cleared_token_cookie_expires_immediately() {
        let cookie = token_cookie(None);
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser {
    use crate::storage::BrowserStorage;
    use shared::session::{API_KEY_KEY, Session, SessionStorage, SessionStore, TOKEN_KEY};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlDocument;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document_cookie() -> String {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn values_are_stored_as_raw_strings() {
        let storage = BrowserStorage;
        storage.set(API_KEY_KEY, "plain-key").unwrap();

        let raw = gloo_storage::LocalStorage::raw()
            .get_item(API_KEY_KEY)
            .unwrap();
        assert_eq!(raw.as_deref(), Some("plain-key"));
        assert_eq!(storage.get(API_KEY_KEY).as_deref(), Some("plain-key"));

        storage.remove(API_KEY_KEY).unwrap();
        assert_eq!(storage.get(API_KEY_KEY), None);
    }

    #[wasm_bindgen_test]
    fn session_writes_mirror_the_token_cookie() {
        let store = SessionStore::load(BrowserStorage);
        store.set(Session::new("browser-token", "K")).unwrap();
        assert!(document_cookie().contains("token=browser-token"));
        assert_eq!(BrowserStorage.get(TOKEN_KEY).as_deref(), Some("browser-token"));

        store.clear().unwrap();
        assert!(!document_cookie().contains("token=browser-token"));
        assert_eq!(BrowserStorage.get(TOKEN_KEY), None);
    }
}
