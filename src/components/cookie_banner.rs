use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::{Consent, ConsentBanner, BANNER_DELAY_MS};
use crate::storage::BrowserStorage;
use crate::Route;

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let banner = use_state(|| ConsentBanner::load(&BrowserStorage));

    {
        let banner = banner.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = banner.is_pending().then(|| {
                    let banner = banner.clone();
                    Timeout::new(BANNER_DELAY_MS, move || banner.set(banner.delay_elapsed()))
                });
                // Dropping the handle cancels the timer if we unmount first.
                move || drop(timeout)
            },
            (),
        );
    }

    let decide = |consent: Consent| {
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Cookie consent {}", consent.as_str());
            banner.set(banner.decide(consent, &BrowserStorage));
        })
    };

    html! {
        <div class={classes!("cookie-banner", banner.visible().then_some("show"))} role="dialog" aria-live="polite" aria-hidden={(!banner.visible()).to_string()}>
            <p>
                {"We use cookies to understand how the site is used. See our "}
                <Link<Route> to={Route::Privacy}>{"privacy policy"}</Link<Route>>
                {"."}
            </p>
            <div class="cookie-actions">
                <button class="cookie-decline" onclick={decide(Consent::Declined)}>{"Decline"}</button>
                <button class="cookie-accept" onclick={decide(Consent::Accepted)}>{"Accept"}</button>
            </div>
        </div>
    }
}
