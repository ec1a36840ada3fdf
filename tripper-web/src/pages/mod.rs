mod categories;
mod home;
mod login;
mod not_found;
mod product_detail;
mod products;
mod promos;
mod register;
mod todo;

pub use categories::CategoriesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
pub use promos::PromosPage;
pub use register::RegisterPage;
pub use todo::TodoPage;

use client::flows::CartNotice;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Redirect;

use crate::{
    components::{Notice, NoticeKind},
    routes::MainRoute,
    services::Services,
};

/// Props shared by pages that only need the services.
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub services: Services,
}

/// Props for pages addressed by a numeric id.
#[derive(Properties, PartialEq)]
pub struct DetailPageProps {
    pub services: Services,
    pub id: u64,
}

/// Input handler writing the field value into `handle`.
fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

/// Banner for the latest add-to-cart result.
fn cart_banner(notice: Option<CartNotice>) -> Html {
    match notice {
        None => html! {},
        Some(CartNotice::LoginRequired) => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
        Some(notice) => {
            let kind = if notice.is_success() {
                NoticeKind::Success
            } else {
                NoticeKind::Error
            };
            html! { <Notice {kind} message={notice.message()} /> }
        }
    }
}
