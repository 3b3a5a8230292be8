use web_sys::MouseEvent;
use yew::prelude::*;

fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: Vec<(&'static str, &'static str)>,
}

/// At most one answer open at a time.
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="accordion">
            { for props.items.iter().enumerate().map(|(index, (question, answer))| {
                let is_open = *open == Some(index);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggled(*open, index));
                    })
                };
                html! {
                    <div class={classes!("accordion-item", is_open.then_some("open"))}>
                        <button class="accordion-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                            <span class="question-text">{*question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div class="accordion-answer">
                            <p>{*answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggled;

    #[test]
    fn opening_one_closes_the_other() {
        assert_eq!(toggled(Some(1), 3), Some(3));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggled(Some(2), 2), None);
        assert_eq!(toggled(None, 2), Some(2));
    }
}
