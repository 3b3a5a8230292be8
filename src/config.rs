
#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("FORM_ENDPOINT") {
        Some(url) => url,
        None => "http://localhost:3001/contact", // Local mock when running with trunk serve
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("FORM_ENDPOINT") {
        Some(url) => url,
        None => "https://formspree.io/f/northwind-contact",
    }
}
