use leptos::prelude::*;
use orion_ui::content::SiteContent;

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let line = format!(
        "© {} {}. All rights reserved.",
        content.copyright_year, content.company
    );

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{line}</p>
            </div>
        </footer>
    }
}
