use shared::models::Category;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct CategoryCardProps {
    pub category: Category,
    pub on_add: Callback<String>,
}

#[function_component(CategoryCard)]
pub fn category_card(props: &CategoryCardProps) -> Html {
    let category = &props.category;
    let onclick = {
        let on_add = props.on_add.clone();
        let id = category.id.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(id.clone()))
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            if let Some(url) = &category.image_url {
                <figure><img src={url.clone()} alt={category.name.clone()} class="h-40 w-full object-cover" /></figure>
            }
            <div class="card-body">
                <h2 class="card-title">{category.name.clone()}</h2>
                if let Some(description) = &category.description {
                    <p>{description.clone()}</p>
                }
                <div class="card-actions justify-end">
                    <button class="btn btn-primary btn-sm" {onclick}>
                        <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="h-4 w-4" />
                        {"Add to cart"}
                    </button>
                </div>
            </div>
        </div>
    }
}
