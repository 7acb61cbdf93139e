use leptos::prelude::*;
use portfolio_core::content::{self, CONTACT_INTRO, EMAIL};
use portfolio_core::ContentBlock;

use crate::components::contact_button::ContactButton;

#[component]
pub fn ContactBlock() -> impl IntoView {
    view! {
        <div class="block contact-block">
            <h2>{ContentBlock::Contact.heading()}</h2>
            <p class="intro">{CONTACT_INTRO}</p>
            <div class="contact-details">
                <p class="email">
                    <strong>"Email:"</strong>
                    " "
                    <a href=content::mailto() class="underline">{EMAIL}</a>
                </p>
                <div class="contact-buttons">
                    {ContentBlock::Contact
                        .links()
                        .iter()
                        .map(|&link| view! { <ContactButton link=link /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
