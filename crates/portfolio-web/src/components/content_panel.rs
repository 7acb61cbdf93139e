use leptos::prelude::*;
use portfolio_core::ContentBlock;

use crate::pages::{contact::ContactBlock, home::HomeBlock, skills::SkillsBlock};
use crate::state::PortfolioState;

#[component]
pub fn ContentPanel() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let shown = Memo::new(move |_| state.shown());
    let motion_vars = state.motion().css_vars();

    view! {
        <div
            class=move || format!("tab-panel {}", state.phase().css_class())
            style=motion_vars
            data-tab=move || shown.get().slug()
        >
            {move || match ContentBlock::for_tab(shown.get()) {
                ContentBlock::Home => view! { <HomeBlock /> }.into_any(),
                ContentBlock::Skills => view! { <SkillsBlock /> }.into_any(),
                ContentBlock::Contact => view! { <ContactBlock /> }.into_any(),
            }}
        </div>
    }
}
