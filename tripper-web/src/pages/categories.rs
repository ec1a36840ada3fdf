use yew::prelude::*;

use super::{PageProps, cart_banner};
use crate::{
    components::{CategoryCard, page_view},
    hooks::{use_add_to_cart, use_page_load},
};

#[function_component(CategoriesPage)]
pub fn categories_page(props: &PageProps) -> Html {
    let services = props.services.clone();
    let load = use_page_load((), move |()| async move { services.pages().categories().await });
    let (notice, on_add) = use_add_to_cart(&props.services);

    page_view(load, |categories| {
        html! {
            <main class="p-4 space-y-4">
                <h1 class="text-2xl font-bold">{"Categories"}</h1>
                { cart_banner(notice) }
                if categories.is_empty() {
                    <p class="opacity-70">{"No categories yet."}</p>
                }
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for categories.into_iter().map(|category| {
                        let key = category.id.clone();
                        html! { <CategoryCard key={key} {category} on_add={on_add.clone()} /> }
                    }) }
                </div>
            </main>
        }
    })
}
