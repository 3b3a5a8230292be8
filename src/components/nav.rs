use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::scroll::{active_section, nav_is_scrolled, scroll_to_section, section_offsets};
use crate::theme::Theme;
use crate::Route;

pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("services", "Services"),
    ("results", "Results"),
    ("projects", "Work"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active = use_state(|| None::<&'static str>);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let ids: Vec<&'static str> = NAV_SECTIONS.iter().map(|(id, _)| *id).collect();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(nav_is_scrolled(scroll_y));
                active.set(active_section(&section_offsets(&ids), scroll_y));
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let section_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            let on_page = window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
                .is_some();
            // Off the home page the plain href navigates there instead.
            if on_page {
                e.prevent_default();
                scroll_to_section(id);
            }
        });
        let class = classes!("nav-link", (*active == Some(id)).then_some("active"));
        html! {
            <a href={format!("/#{}", id)} class={class} onclick={onclick}>{label}</a>
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Northwind Advisory"}
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then_some("open"))} onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| section_link(*id, *label)) }
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle colour theme">
                        <i class={theme.icon()}></i>
                    </button>
                </div>
            </div>
        </nav>
    }
}
