use yew::prelude::*;

use super::DetailPageProps;
use crate::{components::page_view, hooks::use_page_load};

#[function_component(TodoPage)]
pub fn todo_page(props: &DetailPageProps) -> Html {
    let services = props.services.clone();
    let load = use_page_load(props.id, move |id| async move { services.pages().todo(id).await });

    page_view(load, |todo| {
        html! {
            <main class="p-4">
                <div class="card bg-base-200 shadow-xl max-w-xl">
                    <div class="card-body">
                        <h1 class="card-title">{todo.title}</h1>
                        <p class="text-sm opacity-70">{format!("Todo #{} for user {}", todo.id, todo.user_id)}</p>
                        <span class={if todo.completed { "badge badge-success" } else { "badge badge-warning" }}>
                            {if todo.completed { "Completed" } else { "Open" }}
                        </span>
                    </div>
                </div>
            </main>
        }
    })
}
