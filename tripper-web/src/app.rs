use crate::{
    components::{Notice, NoticeKind},
    routes::{MainRoute, switch},
    services::Services,
    state::AppState,
};
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let services = Services::shared();
    let (_, dispatch) = use_store::<AppState>();

    {
        let authenticated = services
            .as_ref()
            .is_ok_and(|services| services.session().is_authenticated());
        use_effect_with((), move |_| {
            dispatch.set(AppState { authenticated });
            || ()
        });
    }

    match services {
        Ok(services) => html! {
            <BrowserRouter>
                <Switch<MainRoute> render={move |route| switch(route, services.clone())} />
            </BrowserRouter>
        },
        Err(message) => html! {
            <div class="p-8">
                <Notice kind={NoticeKind::Error} message={format!("Tripper could not start: {message}")} />
            </div>
        },
    }
}
