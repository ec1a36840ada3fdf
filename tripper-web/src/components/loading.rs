use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center py-16">
            <span class="loading loading-dots loading-lg"></span>
            <span class="sr-only">{"Loading"}</span>
        </div>
    }
}
