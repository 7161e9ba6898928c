use leptos::html;
use leptos::prelude::*;
use orion_ui::Section;
use orion_ui::content::SiteContent;

use crate::navigation::NavContext;

#[component]
pub fn Home(anchor: NodeRef<html::Section>) -> impl IntoView {
    let ctx = expect_context::<NavContext>();
    let content = expect_context::<SiteContent>();
    let title = format!("Welcome to {}", content.company);

    view! {
        <section node_ref=anchor id="home" class="hero">
            <div class="container">
                <h1 class="hero-title">{title}</h1>
                <p class="hero-description">{content.tagline}</p>
                <ul class="hero-list">
                    {content
                        .value_props
                        .into_iter()
                        .map(|prop| view! { <li>{prop.text}</li> })
                        .collect_view()}
                </ul>
                <div class="hero-actions">
                    <a
                        href="#contact"
                        class="btn btn-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate_to(Section::Contact);
                        }
                    >
                        "Get in Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
