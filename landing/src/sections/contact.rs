use leptos::html;
use leptos::prelude::*;
use orion_ui::content::SiteContent;

#[component]
pub fn Contact(anchor: NodeRef<html::Section>) -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let mailto = format!("mailto:{}", content.contact.email);

    view! {
        <section node_ref=anchor id="contact" class="section">
            <div class="container">
                <h2 class="section-title">"Contact Us"</h2>
                <p class="section-body">
                    "Reach out to us for inquiries, partnerships, or further information:"
                </p>
                <ul class="contact-list">
                    <li>
                        "Email: "
                        <a href=mailto class="contact-link">{content.contact.email}</a>
                    </li>
                    <li>"Phone: " {content.contact.phone}</li>
                    <li>"Address: " {content.contact.address}</li>
                </ul>
                <ContactForm />
            </div>
        </section>
    }
}

// Presentational only. There is nothing to submit to yet, so the button
// is type="button" and no handler is wired.
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <form class="contact-form">
            <label class="form-label">
                "Name"
                <input class="form-input" type="text" name="name" placeholder="Your name" />
            </label>
            <label class="form-label">
                "Email"
                <input class="form-input" type="email" name="email" placeholder="you@company.com" />
            </label>
            <label class="form-label">
                "Message"
                <textarea
                    class="form-textarea"
                    name="message"
                    rows="5"
                    placeholder="How can we help?"
                ></textarea>
            </label>
            <button type="button" class="btn btn-primary">"Send Message"</button>
        </form>
    }
}
