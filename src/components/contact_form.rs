use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{submit, ContactMessage};
use crate::content::SERVICES;

fn notify(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactMessage::default);
    let is_submitting = use_state(|| false);

    let update = |apply: fn(&mut ContactMessage, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_company = {
        let set = update(|f, v| f.company = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_service = {
        let set = update(|f, v| f.service = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let message = (*form).clone();
            if let Err(e) = message.validate() {
                notify(&e.to_string());
                return;
            }

            is_submitting.set(true);
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            spawn_local(async move {
                match submit(config::get_form_endpoint(), &message).await {
                    Ok(()) => {
                        notify("Thank you! Your message has been sent. We'll be in touch within two working days.");
                        form.set(ContactMessage::default());
                    }
                    Err(e) => notify(&e.to_string()),
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-row">
                <label>
                    {"Name"}
                    <input type="text" name="name" value={form.name.clone()} oninput={on_name} required=true />
                </label>
                <label>
                    {"Email"}
                    <input type="email" name="email" value={form.email.clone()} oninput={on_email} required=true />
                </label>
            </div>
            <div class="form-row">
                <label>
                    {"Company"}
                    <input type="text" name="company" value={form.company.clone()} oninput={on_company} />
                </label>
                <label>
                    {"Interested in"}
                    <select name="service" onchange={on_service}>
                        <option value="" selected={form.service.is_empty()}>{"Not sure yet"}</option>
                        { for SERVICES.iter().map(|s| html! {
                            <option value={s.id} selected={form.service == s.id}>{s.label}</option>
                        }) }
                    </select>
                </label>
            </div>
            <label>
                {"Message"}
                <textarea name="message" rows="5" value={form.message.clone()} oninput={on_message} required=true />
            </label>
            <button type="submit" class="contact-submit" disabled={*is_submitting}>
                { if *is_submitting { "Sending..." } else { "Send message" } }
            </button>
        </form>
    }
}
