use leptos::prelude::*;
use portfolio_core::content::{BIO, PRONOUNS};
use portfolio_core::ContentBlock;

#[component]
pub fn HomeBlock() -> impl IntoView {
    view! {
        <div class="block home-block">
            <div class="name-card">
                <h1>{ContentBlock::Home.heading()}</h1>
                <span class="pronouns">{PRONOUNS}</span>
            </div>
            <p class="bio">{BIO}</p>
        </div>
    }
}
