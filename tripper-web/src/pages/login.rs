use client::flows::SubmitState;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use super::{PageProps, bind_input};
use crate::{
    components::{Notice, NoticeKind},
    hooks::use_task_scope,
    routes::MainRoute,
    state::AppState,
};

#[function_component(LoginPage)]
pub fn login_page(props: &PageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let state = use_state(SubmitState::default);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();
    let scope = use_task_scope();

    {
        let authenticated = props.services.session().is_authenticated();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.set(AppState { authenticated });
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let state = state.clone();
        let services = props.services.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if state.is_submitting() {
                return;
            }
            state.set(SubmitState::Submitting);

            let request = LoginRequest::new((*email).clone(), (*password).clone());
            let state = state.clone();
            let services = services.clone();
            let scope = scope.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let Ok(result) = scope
                    .run(async move { Ok(services.login().submit(&request).await) })
                    .await
                else {
                    return;
                };
                let redirect = result.redirect().map(MainRoute::from_path);
                state.set(result);
                if let Some(route) = redirect {
                    dispatch.set(AppState {
                        authenticated: true,
                    });
                    if let Some(navigator) = &navigator {
                        navigator.push(&route);
                    }
                }
            });
        })
    };

    let is_busy = state.is_submitting();
    let disable_submit = email.is_empty() || password.is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    if let Some(message) = state.error() {
                        <Notice kind={NoticeKind::Error} message={message.to_string()} />
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"No account yet? "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {"Register"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
