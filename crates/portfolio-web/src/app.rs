use leptos::prelude::*;
use portfolio_core::PortfolioConfig;

use crate::components::content_panel::ContentPanel;
use crate::components::nav::NavStrip;
use crate::state::PortfolioState;

#[component]
pub fn App(config: PortfolioConfig) -> impl IntoView {
    provide_context(PortfolioState::new(config.motion));

    view! {
        <div class="app">
            <NavStrip />
            <main class="content">
                <ContentPanel />
            </main>
        </div>
    }
}
