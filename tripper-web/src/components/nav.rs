use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::{routes::MainRoute, services::Services, state::AppState};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: MainRoute,
    pub services: Services,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();

    let on_logout = {
        let services = props.services.clone();
        Callback::from(move |_: MouseEvent| {
            let to = services.pages().logout();
            dispatch.set(AppState {
                authenticated: false,
            });
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::from_path(&to));
            }
        })
    };

    let links = MainRoute::iter().filter_map(|route| {
        let label = route.nav_label()?;
        let class = if route == props.current {
            "btn btn-ghost btn-active"
        } else {
            "btn btn-ghost"
        };
        Some(html! {
            <li><Link<MainRoute> to={route} classes={classes!(class)}>{label}</Link<MainRoute>></li>
        })
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="h-5 w-5" />
                {"Tripper"}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal px-1">{ for links }</ul>
            if state.authenticated {
                <button class="btn btn-outline btn-sm" onclick={on_logout}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="h-4 w-4" />
                    {"Logout"}
                </button>
            }
        </nav>
    }
}
