use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::scroll::{back_to_top_visible, smooth_scroll_to};

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <button
            class={classes!("back-to-top", back_to_top_visible(scroll_y).then_some("visible"))}
            onclick={onclick}
            aria-label="Back to top"
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
