use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// When an observed element counts as visible. Shared by every element of one
/// animator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityThresholds {
    pub ratio: f64,
    pub root_margin: &'static str,
}

/// Fires slightly before the element reaches the bottom edge of the viewport.
pub const REVEAL_THRESHOLDS: VisibilityThresholds = VisibilityThresholds {
    ratio: 0.15,
    root_margin: "0px 0px -80px 0px",
};

/// Counters wait until a third of the figure is on screen.
pub const COUNTER_THRESHOLDS: VisibilityThresholds = VisibilityThresholds {
    ratio: 0.3,
    root_margin: "0px",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Mark as animated and stop observing.
    Reveal,
    Ignore,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ObservedElement {
    animated: bool,
}

impl ObservedElement {
    #[cfg(test)]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn on_visibility(
        &mut self,
        is_intersecting: bool,
        ratio: f64,
        thresholds: &VisibilityThresholds,
    ) -> RevealOutcome {
        if self.animated || !is_intersecting || ratio < thresholds.ratio {
            return RevealOutcome::Ignore;
        }
        self.animated = true;
        RevealOutcome::Reveal
    }
}

struct Registration {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn observe(
    element: &Element,
    thresholds: VisibilityThresholds,
    on_reveal: Callback<()>,
) -> Result<Registration, JsValue> {
    let state = Rc::new(RefCell::new(ObservedElement::default()));

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let outcome = state.borrow_mut().on_visibility(
                entry.is_intersecting(),
                entry.intersection_ratio(),
                &thresholds,
            );
            if outcome == RevealOutcome::Reveal {
                observer.unobserve(&entry.target());
                on_reveal.emit(());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(thresholds.ratio));
    init.root_margin(thresholds.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Registration {
        observer,
        _callback: callback,
    })
}

/// True once the referenced element has become visible; never goes back to
/// false.
#[hook]
pub fn use_reveal(node: NodeRef, thresholds: VisibilityThresholds) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let registration = node.cast::<Element>().and_then(|element| {
                    let on_reveal = Callback::from(move |_| revealed.set(true));
                    match observe(&element, thresholds, on_reveal) {
                        Ok(registration) => Some(registration),
                        Err(e) => {
                            warn!("IntersectionObserver unavailable, skipping reveal: {:?}", e);
                            None
                        }
                    }
                });

                move || {
                    if let Some(registration) = registration {
                        registration.observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Stagger for siblings revealed together.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLDS);

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("visible"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_threshold_is_reached() {
        let mut el = ObservedElement::default();
        assert_eq!(el.on_visibility(true, 0.05, &REVEAL_THRESHOLDS), RevealOutcome::Ignore);
        assert!(!el.is_animated());
        assert_eq!(el.on_visibility(true, 0.15, &REVEAL_THRESHOLDS), RevealOutcome::Reveal);
        assert!(el.is_animated());
    }

    #[test]
    fn reveal_happens_at_most_once() {
        let mut el = ObservedElement::default();
        let reveals = [0.2, 0.9, 0.0, 0.5, 1.0]
            .iter()
            .map(|ratio| el.on_visibility(*ratio > 0.0, *ratio, &REVEAL_THRESHOLDS))
            .filter(|outcome| *outcome == RevealOutcome::Reveal)
            .count();
        assert_eq!(reveals, 1);
    }

    #[test]
    fn scrolling_away_does_not_unreveal() {
        let mut el = ObservedElement::default();
        el.on_visibility(true, 0.6, &REVEAL_THRESHOLDS);
        el.on_visibility(false, 0.0, &REVEAL_THRESHOLDS);
        assert!(el.is_animated());
    }

    #[test]
    fn non_intersecting_entry_is_ignored_even_with_ratio() {
        let mut el = ObservedElement::default();
        assert_eq!(el.on_visibility(false, 0.5, &REVEAL_THRESHOLDS), RevealOutcome::Ignore);
        assert!(!el.is_animated());
    }

    #[test]
    fn reveal_fires_before_the_viewport_edge() {
        assert_eq!(REVEAL_THRESHOLDS.ratio, 0.15);
        assert_eq!(REVEAL_THRESHOLDS.root_margin, "0px 0px -80px 0px");
    }

    #[test]
    fn counters_need_more_of_the_element_visible() {
        assert_eq!(COUNTER_THRESHOLDS.root_margin, "0px");
        let mut el = ObservedElement::default();
        assert_eq!(el.on_visibility(true, 0.2, &COUNTER_THRESHOLDS), RevealOutcome::Ignore);
        assert_eq!(el.on_visibility(true, 0.3, &COUNTER_THRESHOLDS), RevealOutcome::Reveal);
    }

    #[test]
    fn thresholds_are_per_animator() {
        let strict = VisibilityThresholds {
            ratio: 0.5,
            root_margin: "0px",
        };
        let mut el = ObservedElement::default();
        assert_eq!(el.on_visibility(true, 0.3, &strict), RevealOutcome::Ignore);
        assert_eq!(el.on_visibility(true, 0.5, &strict), RevealOutcome::Reveal);
    }
}
