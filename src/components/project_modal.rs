use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::project;

fn lock_body_scroll(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    /// Key into the project table; `None` keeps the modal closed.
    pub project_id: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let detail = props.project_id.as_deref().and_then(project);
    let is_open = detail.is_some();

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    use_effect_with_deps(
        move |open: &bool| {
            lock_body_scroll(*open);
            || lock_body_scroll(false)
        },
        is_open,
    );

    let Some(detail) = detail else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop open" onclick={close.clone()}>
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title" onclick={stop}>
                <button class="modal-close" onclick={close} aria-label="Close">
                    <i class="fas fa-xmark"></i>
                </button>
                <h2 id="modal-title">{detail.title}</h2>
                <div class="modal-tags">
                    { for detail.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
                <div class="modal-body">
                    { for detail.content.iter().map(|para| html! { <p>{*para}</p> }) }
                </div>
            </div>
        </div>
    }
}
