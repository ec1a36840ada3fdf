use client::flows::PageLoad;
use yew::prelude::*;
use yew_router::prelude::Redirect;

use super::{Loading, Notice, NoticeKind};
use crate::routes::MainRoute;

/// Render a page load: spinner while pending, redirect when the session is
/// missing, inline message on failure, otherwise `ready`.
pub fn page_view<T>(load: Option<PageLoad<T>>, ready: impl FnOnce(T) -> Html) -> Html {
    match load {
        None => html! { <Loading /> },
        Some(PageLoad::Redirect { to }) => {
            html! { <Redirect<MainRoute> to={MainRoute::from_path(&to)} /> }
        }
        Some(PageLoad::Failed { message }) => {
            html! { <Notice kind={NoticeKind::Error} message={message} /> }
        }
        Some(PageLoad::Ready(records)) => ready(records),
    }
}
