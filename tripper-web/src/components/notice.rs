use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: AttrValue,
}

/// Inline banner for page and form messages.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let (class, icon) = match props.kind {
        NoticeKind::Success => ("alert alert-success", IconId::HeroiconsSolidCheckCircle),
        NoticeKind::Error => ("alert alert-error", IconId::HeroiconsSolidExclamationTriangle),
    };
    html! {
        <div {class} role="alert">
            <Icon icon_id={icon} class="h-5 w-5" />
            <span>{props.message.clone()}</span>
        </div>
    }
}
