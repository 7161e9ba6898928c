// Orion Labs marketing site, Leptos 0.8 Edition

mod navigation;
mod sections;

use leptos::prelude::*;
use navigation::{NavContext, SectionRefs};
use orion_ui::Section;
use orion_ui::content::SiteContent;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    log_boot_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let refs = SectionRefs::new();
    provide_context(NavContext::new(refs));
    provide_context(SiteContent::default());

    view! {
        <Nav />
        <main>
            <Home anchor=refs.node_ref(Section::Home) />
            <Vision anchor=refs.node_ref(Section::Vision) />
            <About anchor=refs.node_ref(Section::About) />
            <Contact anchor=refs.node_ref(Section::Contact) />
        </main>
        <Footer />
    }
}

/// One styled line to the browser console on boot
fn log_boot_banner() {
    web_sys::console::log_2(
        &JsValue::from_str("%cOrion Labs | predictive logistics, built in the open"),
        &JsValue::from_str("color: #60a5fa; font-weight: bold; font-family: monospace;"),
    );
}
