//! Hooks tying page work to the component lifetime.

use client::{
    TaskScope,
    flows::{CartNotice, PageLoad},
};
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::{services::Services, state::AppState};

/// A [`TaskScope`] that lives as long as the component and is cancelled on
/// unmount.
#[hook]
pub fn use_task_scope() -> TaskScope {
    let scope = use_memo((), |_| TaskScope::new());
    {
        let scope = (*scope).clone();
        use_effect_with((), move |_| move || scope.cancel());
    }
    (*scope).clone()
}

/// Run `load` once per distinct `deps` and expose its result.
///
/// `None` while the load is in flight. A load still running when `deps`
/// change or the component unmounts is cancelled and its result dropped.
/// A redirect to login also marks the app signed out.
#[hook]
pub fn use_page_load<T, D, F, Fut>(deps: D, load: F) -> Option<PageLoad<T>>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = PageLoad<T>> + 'static,
{
    let state = use_state(|| None::<PageLoad<T>>);
    let dispatch = use_dispatch::<AppState>();
    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            let scope = TaskScope::new();
            state.set(None);
            let future = load(deps.clone());
            let task_scope = scope.clone();
            spawn_local(async move {
                if let Ok(result) = task_scope.run(async move { Ok(future.await) }).await {
                    if let Some(signed_out) = AppState::after_load(&result) {
                        dispatch.set(signed_out);
                    }
                    state.set(Some(result));
                }
            });
            move || scope.cancel()
        });
    }
    (*state).clone()
}

/// Notice from the most recent add-to-cart click, and the click handler.
#[hook]
pub fn use_add_to_cart(services: &Services) -> (Option<CartNotice>, Callback<String>) {
    let notice = use_state(|| None::<CartNotice>);
    let scope = use_task_scope();
    let dispatch = use_dispatch::<AppState>();

    let on_add = {
        let notice = notice.clone();
        let services = services.clone();
        Callback::from(move |category_id: String| {
            let notice = notice.clone();
            let services = services.clone();
            let scope = scope.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let result = scope
                    .run(async move { Ok(services.pages().add_to_cart(&category_id).await) })
                    .await;
                if let Ok(result) = result {
                    if let Some(signed_out) = AppState::after_cart(result) {
                        dispatch.set(signed_out);
                    }
                    notice.set(Some(result));
                }
            });
        })
    };

    (*notice, on_add)
}
