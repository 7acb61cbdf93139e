use leptos::prelude::*;
use portfolio_core::ExternalLink;

#[component]
pub fn ContactButton(link: ExternalLink) -> impl IntoView {
    view! {
        <a href=link.href target=ExternalLink::TARGET rel=ExternalLink::REL>
            <button class="contact-button">{link.label}</button>
        </a>
    }
}
