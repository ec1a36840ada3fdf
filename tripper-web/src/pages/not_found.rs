use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Root} classes="btn btn-primary">{"Go home"}</Link<MainRoute>>
        </div>
    }
}
