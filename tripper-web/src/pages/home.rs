use yew::prelude::*;
use yew_router::prelude::*;

use super::{PageProps, cart_banner};
use crate::{
    components::{CategoryCard, Notice, NoticeKind, PromoCard, page_view},
    hooks::{use_add_to_cart, use_page_load},
    routes::MainRoute,
};

#[function_component(HomePage)]
pub fn home_page(props: &PageProps) -> Html {
    let services = props.services.clone();
    let load = use_page_load((), move |()| async move { services.pages().home().await });
    let (notice, on_add) = use_add_to_cart(&props.services);

    page_view(load, |content| {
        html! {
            <main class="p-4 space-y-8">
                { cart_banner(notice) }
                { for content.errors.into_iter().map(|message| html! {
                    <Notice kind={NoticeKind::Error} {message} />
                }) }
                <section class="space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-2xl font-bold">{"Promotions"}</h2>
                        <Link<MainRoute> to={MainRoute::Promos} classes="link">{"See all"}</Link<MainRoute>>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for content.promos.into_iter().map(|promo| {
                            let key = promo.id.clone();
                            html! { <PromoCard key={key} {promo} /> }
                        }) }
                    </div>
                </section>
                <section class="space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-2xl font-bold">{"Categories"}</h2>
                        <Link<MainRoute> to={MainRoute::Categories} classes="link">{"See all"}</Link<MainRoute>>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for content.categories.into_iter().map(|category| {
                            let key = category.id.clone();
                            html! { <CategoryCard key={key} {category} on_add={on_add.clone()} /> }
                        }) }
                    </div>
                </section>
            </main>
        }
    })
}
