use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub body: Html,
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub items: Vec<TabItem>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let active = use_state(|| 0usize);

    let buttons = props.items.iter().enumerate().map(|(index, item)| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                active.set(index);
            })
        };
        let selected = *active == index;
        html! {
            <button
                class={classes!("tab-button", selected.then_some("active"))}
                role="tab"
                id={format!("tab-{}", item.id)}
                aria-selected={selected.to_string()}
                onclick={onclick}
            >
                <i class={item.icon}></i>
                {item.label}
            </button>
        }
    });

    let panel = props.items.get(*active).map(|item| html! {
        <div class="tab-panel active" role="tabpanel" aria-labelledby={format!("tab-{}", item.id)}>
            { item.body.clone() }
        </div>
    });

    html! {
        <div class="tabs">
            <div class="tab-list" role="tablist">
                { for buttons }
            </div>
            { panel.unwrap_or_default() }
        </div>
    }
}
