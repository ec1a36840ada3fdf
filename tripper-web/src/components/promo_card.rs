use shared::models::Promo;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct PromoCardProps {
    pub promo: Promo,
}

#[function_component(PromoCard)]
pub fn promo_card(props: &PromoCardProps) -> Html {
    let promo = &props.promo;
    html! {
        <div class="card bg-base-200 shadow-xl">
            if let Some(url) = &promo.image_url {
                <figure><img src={url.clone()} alt={promo.title.clone()} class="h-40 w-full object-cover" /></figure>
            }
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlineTag} class="h-5 w-5" />
                    {promo.title.clone()}
                </h2>
                if let Some(description) = &promo.description {
                    <p>{description.clone()}</p>
                }
                <div class="flex flex-wrap gap-2 text-sm">
                    if let Some(code) = &promo.promo_code {
                        <span class="badge badge-secondary">{code.clone()}</span>
                    }
                    if let Some(discount) = promo.promo_discount_price {
                        <span class="badge badge-outline">{format!("Save {discount:.0}")}</span>
                    }
                    if let Some(minimum) = promo.minimum_claim_price {
                        <span class="badge badge-ghost">{format!("Min. {minimum:.0}")}</span>
                    }
                </div>
                if let Some(until) = &promo.valid_until {
                    <p class="text-xs opacity-70">{format!("Valid until {until}")}</p>
                }
            </div>
        </div>
    }
}
