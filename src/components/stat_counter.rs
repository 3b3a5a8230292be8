use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::animation::counter::{CounterAnimation, CounterSpec};
use crate::animation::reveal::COUNTER_THRESHOLDS;
use crate::animation::use_reveal;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Final display text, e.g. "87%" or "4.9".
    pub value: AttrValue,
    pub label: AttrValue,
}

type FrameCallback = Closure<dyn FnMut(f64)>;

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), COUNTER_THRESHOLDS);
    let display = use_state(|| props.value.to_string());

    {
        let display = display.clone();
        let value = props.value.clone();
        use_effect_with_deps(
            move |revealed: &bool| {
                let pending_frame = Rc::new(RefCell::new(None::<i32>));
                let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
                let spec = if *revealed { CounterSpec::parse(&value) } else { None };

                if let (Some(spec), Some(win)) = (spec, window()) {
                    let mut animation = CounterAnimation::new(spec);
                    let next_tick = tick.clone();
                    let frame_win = win.clone();
                    let frame_slot = pending_frame.clone();

                    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let frame = animation.frame(now);
                        display.set(frame.text);
                        if frame.finished {
                            *frame_slot.borrow_mut() = None;
                            // Breaks the self-reference so the closure is freed.
                            let _ = next_tick.borrow_mut().take();
                            return;
                        }
                        if let Some(callback) = next_tick.borrow().as_ref() {
                            *frame_slot.borrow_mut() = frame_win
                                .request_animation_frame(callback.as_ref().unchecked_ref())
                                .ok();
                        }
                    }) as Box<dyn FnMut(f64)>));

                    if let Some(callback) = tick.borrow().as_ref() {
                        *pending_frame.borrow_mut() = win
                            .request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok();
                    }
                }

                move || {
                    if let (Some(id), Some(win)) = (pending_frame.borrow_mut().take(), window()) {
                        let _ = win.cancel_animation_frame(id);
                    }
                    let _ = tick.borrow_mut().take();
                }
            },
            revealed,
        );
    }

    html! {
        <div ref={node} class="stat">
            <span class="stat-value">{ (*display).clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
