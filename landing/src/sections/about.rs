use leptos::html;
use leptos::prelude::*;
use orion_ui::content::SiteContent;

#[component]
pub fn About(anchor: NodeRef<html::Section>) -> impl IntoView {
    let content = expect_context::<SiteContent>();

    view! {
        <section node_ref=anchor id="about" class="section section-alt">
            <div class="container">
                <h2 class="section-title">"About Us"</h2>
                <p class="section-body">{content.about}</p>
            </div>
        </section>
    }
}
