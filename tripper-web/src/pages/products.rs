use yew::prelude::*;
use yew_router::prelude::*;

use super::PageProps;
use crate::{components::page_view, hooks::use_page_load, routes::MainRoute};

#[function_component(ProductsPage)]
pub fn products_page(props: &PageProps) -> Html {
    let services = props.services.clone();
    let load = use_page_load((), move |()| async move { services.pages().products().await });

    page_view(load, |products| {
        html! {
            <main class="p-4 space-y-4">
                <h1 class="text-2xl font-bold">{"Products"}</h1>
                <ul class="menu bg-base-200 rounded-box">
                    { for products.into_iter().map(|product| html! {
                        <li key={product.id}>
                            <Link<MainRoute> to={MainRoute::Product { id: product.id }}>
                                <span class="flex-1">{product.title}</span>
                                <span class="badge">{format!("${:.2}", product.price)}</span>
                            </Link<MainRoute>>
                        </li>
                    }) }
                </ul>
            </main>
        }
    })
}
