use yew::prelude::*;
use yew_router::prelude::*;

use crate::storage::{CONSENT_KEY, THEME_KEY};
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="section legal-page">
            <h1>{"Privacy Policy"}</h1>
            <p>{"Last updated: October 2026"}</p>

            <h2>{"What we collect"}</h2>
            <p>{"When you use the contact form we receive your name, email address, company and message. These are delivered to us by our form provider and used only to reply to you."}</p>

            <h2>{"What stays in your browser"}</h2>
            <p>{"This site stores two small values in your browser's local storage and nothing else:"}</p>
            <ul>
                <li><code>{THEME_KEY}</code>{" remembers whether you prefer the dark or light theme."}</li>
                <li><code>{CONSENT_KEY}</code>{" remembers whether you accepted or declined cookies, so we do not ask again."}</li>
            </ul>
            <p>{"You can remove them at any time by clearing site data in your browser settings."}</p>

            <h2>{"Contact"}</h2>
            <p>{"Questions about this policy can be sent to hello@northwind.example."}</p>

            <Link<Route> to={Route::Home} classes="hero-cta">{"Back to home"}</Link<Route>>
        </div>
    }
}
