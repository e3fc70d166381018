// Pension & ISA landing page - browser build (trunk serve / trunk build)
// Built by the Pension & ISA Web Team (c)2025

use leptos::prelude::*;
use pension_site::App;
use pension_site::styles::SITE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| {
        view! {
            <style>{SITE_CSS}</style>
            <App />
        }
    });
}
