use leptos::html;
use leptos::prelude::*;
use orion_ui::content::SiteContent;

#[component]
pub fn Vision(anchor: NodeRef<html::Section>) -> impl IntoView {
    let content = expect_context::<SiteContent>();

    view! {
        <section node_ref=anchor id="vision" class="section">
            <div class="container">
                <h2 class="section-title">"Our Vision"</h2>
                <p class="section-body">{content.vision}</p>
            </div>
        </section>
    }
}
