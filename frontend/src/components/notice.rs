use yew::prelude::*;

use crate::waitlist::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };
    let class = match notice.kind {
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Error => "toast toast-error",
    };
    let on_dismiss = props.on_dismiss.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(()));

    html! {
        <div class={class} role="status" data-testid="form-notice">
            <span>{ notice.message.clone() }</span>
            <button type="button" class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}
