use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <span>{format!("© {} Northwind Advisory Ltd.", year)}</span>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy"}</Link<Route>>
                    <a class="footer-link" href="mailto:hello@northwind.example">{"hello@northwind.example"}</a>
                    <a class="footer-link" href="https://www.linkedin.com" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <i class="fab fa-linkedin"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
