use yew::prelude::*;
use yew_router::prelude::*;

use super::DetailPageProps;
use crate::{components::page_view, hooks::use_page_load, routes::MainRoute};

#[function_component(ProductDetailPage)]
pub fn product_detail_page(props: &DetailPageProps) -> Html {
    let services = props.services.clone();
    let load = use_page_load(props.id, move |id| async move { services.pages().product(id).await });

    page_view(load, |product| {
        html! {
            <main class="p-4">
                <div class="card lg:card-side bg-base-200 shadow-xl">
                    if let Some(image) = product.image {
                        <figure class="p-6"><img src={image} alt={product.title.clone()} class="h-64 object-contain" /></figure>
                    }
                    <div class="card-body">
                        <h1 class="card-title text-2xl">{product.title}</h1>
                        if let Some(category) = product.category {
                            <span class="badge badge-outline">{category}</span>
                        }
                        <p class="text-xl font-semibold">{format!("${:.2}", product.price)}</p>
                        if let Some(description) = product.description {
                            <p>{description}</p>
                        }
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Products} classes="btn btn-ghost">
                                {"Back to products"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </main>
        }
    })
}
