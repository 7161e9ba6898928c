use leptos::prelude::*;
use orion_ui::Section;
use orion_ui::content::SiteContent;

use crate::navigation::NavContext;

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = expect_context::<NavContext>();
    let content = expect_context::<SiteContent>();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a
                    href="#home"
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate_to(Section::Home);
                    }
                >
                    <div class="nav-logo">
                        <img src="assets/orion-labs.svg" alt="Orion Labs Logo" />
                    </div>
                    <span class="nav-title">{content.company}</span>
                </a>
                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section /> })
                        .collect_view()}
                </div>
                <button
                    class=move || if ctx.menu_open() { "nav-menu-btn active" } else { "nav-menu-btn" }
                    on:click=move |_| ctx.toggle_menu()
                >
                    {move || if ctx.menu_open() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Mobile drawer, collapsed again by any navigation
            <Show when=move || ctx.menu_open()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section=section /> })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(section: Section) -> impl IntoView {
    let ctx = expect_context::<NavContext>();
    let href = format!("#{}", section.id());

    view! {
        <a
            href=href
            class=move || if ctx.is_current(section) { "nav-link active" } else { "nav-link" }
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate_to(section);
            }
        >
            {section.label()}
        </a>
    }
}
