use client::flows::{SubmitState, register};
use shared::models::{RegisterForm, Role, Upload};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{PageProps, bind_input};
use crate::{
    components::{Notice, NoticeKind},
    hooks::use_task_scope,
    routes::MainRoute,
};

/// Read a picked file into memory for the multipart upload.
async fn read_upload(file: File) -> Result<Upload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("Could not read {}: {err:?}", file.name()))?;
    Ok(Upload {
        file_name: file.name(),
        content_type: Some(file.type_()).filter(|content_type| !content_type.is_empty()),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[function_component(RegisterPage)]
pub fn register_page(props: &PageProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let password_repeat = use_state(String::new);
    let phone_number = use_state(String::new);
    let role = use_state(Role::default);
    let picture = use_state(|| None::<File>);
    let state = use_state(SubmitState::default);
    let navigator = use_navigator();
    let scope = use_task_scope();

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                role.set(select.value().parse().unwrap_or_default());
            }
        })
    };

    let on_picture_change = {
        let picture = picture.clone();
        Callback::from(move |event: Event| {
            let file = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            picture.set(file);
        })
    };

    let onsubmit = {
        let state = state.clone();
        let services = props.services.clone();
        let fields = (
            name.clone(),
            email.clone(),
            password.clone(),
            password_repeat.clone(),
            phone_number.clone(),
        );
        let role = role.clone();
        let picture = picture.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if state.is_submitting() {
                return;
            }

            let (name, email, password, password_repeat, phone_number) = &fields;
            let mut form = RegisterForm {
                name: (**name).clone(),
                email: (**email).clone(),
                password: (**password).clone(),
                password_repeat: (**password_repeat).clone(),
                role: *role,
                phone_number: (**phone_number).clone(),
                profile_picture: None,
            };
            if let Some(message) = register::validate(&form) {
                state.set(SubmitState::Failed {
                    message: message.to_string(),
                });
                return;
            }
            state.set(SubmitState::Submitting);

            let file = (*picture).clone();
            let state = state.clone();
            let services = services.clone();
            let scope = scope.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = scope
                    .run(async move {
                        if let Some(file) = file {
                            match read_upload(file).await {
                                Ok(upload) => form.profile_picture = Some(upload),
                                Err(message) => return Ok(SubmitState::Failed { message }),
                            }
                        }
                        Ok(services.register().submit(&form).await)
                    })
                    .await;
                let Ok(result) = result else {
                    return;
                };
                let redirect = result.redirect().map(MainRoute::from_path);
                state.set(result);
                if let (Some(route), Some(navigator)) = (redirect, &navigator) {
                    navigator.push(&route);
                }
            });
        })
    };

    let is_busy = state.is_submitting();
    let text_field = |id: &'static str, label: &'static str, kind: &'static str, handle: &UseStateHandle<String>| {
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    {id}
                    class="input input-bordered"
                    type={kind}
                    required=true
                    value={(**handle).clone()}
                    oninput={bind_input(handle)}
                />
            </div>
        }
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    if let Some(message) = state.error() {
                        <Notice kind={NoticeKind::Error} message={message.to_string()} />
                    }
                    { text_field("name", "Name", "text", &name) }
                    { text_field("email", "Email", "email", &email) }
                    { text_field("password", "Password", "password", &password) }
                    { text_field("password-repeat", "Repeat password", "password", &password_repeat) }
                    <div class="form-control">
                        <label class="label" for="role">
                            <span class="label-text">{"Role"}</span>
                        </label>
                        <select id="role" class="select select-bordered" onchange={on_role_change}>
                            <option value={Role::User.as_str()} selected={*role == Role::User}>{"User"}</option>
                            <option value={Role::Admin.as_str()} selected={*role == Role::Admin}>{"Admin"}</option>
                        </select>
                    </div>
                    { text_field("phone-number", "Phone number", "tel", &phone_number) }
                    <div class="form-control">
                        <label class="label" for="profile-picture">
                            <span class="label-text">{"Profile picture"}</span>
                        </label>
                        <input
                            id="profile-picture"
                            class="file-input file-input-bordered"
                            type="file"
                            accept="image/*"
                            onchange={on_picture_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
