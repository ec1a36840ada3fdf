//! Browser-backed [`SessionStorage`].
//!
//! Keys are kept as raw strings in `localStorage`. The token is also mirrored
//! into a cookie so the server-side gate sees the same session as the SPA.

use cookie::{Cookie, SameSite};
use gloo_storage::{LocalStorage, Storage};
use shared::{
    gate::DEFAULT_TOKEN_COOKIE,
    session::{SessionStorage, StorageError, TOKEN_KEY},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

/// `localStorage` plus the token cookie.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn mirror_token(key: &str, token: Option<&str>) -> Result<(), StorageError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| StorageError::new(key, "document is not available"))?;
        document
            .set_cookie(&token_cookie(token))
            .map_err(|err| js_error(key, &err))
    }
}

/// `Set-Cookie`-style string for the token mirror. `None` expires it.
pub(crate) fn token_cookie(token: Option<&str>) -> String {
    let mut cookie = Cookie::build((DEFAULT_TOKEN_COOKIE, token.unwrap_or_default()))
        .path("/")
        .same_site(SameSite::Lax)
        .build();
    if token.is_none() {
        cookie.make_removal();
    }
    cookie.to_string()
}

fn js_error(key: &str, err: &JsValue) -> StorageError {
    StorageError::new(key, err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| js_error(key, &err))?;
        if key == TOKEN_KEY {
            Self::mirror_token(key, Some(value))?;
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| js_error(key, &err))?;
        if key == TOKEN_KEY {
            Self::mirror_token(key, None)?;
        }
        Ok(())
    }
}
