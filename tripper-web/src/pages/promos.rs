use yew::prelude::*;

use super::PageProps;
use crate::{
    components::{PromoCard, page_view},
    hooks::use_page_load,
};

#[function_component(PromosPage)]
pub fn promos_page(props: &PageProps) -> Html {
    let services = props.services.clone();
    let load = use_page_load((), move |()| async move { services.pages().promos().await });

    page_view(load, |promos| {
        html! {
            <main class="p-4 space-y-4">
                <h1 class="text-2xl font-bold">{"Promotions"}</h1>
                if promos.is_empty() {
                    <p class="opacity-70">{"No promotions right now."}</p>
                }
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for promos.into_iter().map(|promo| {
                        let key = promo.id.clone();
                        html! { <PromoCard key={key} {promo} /> }
                    }) }
                </div>
            </main>
        }
    })
}
