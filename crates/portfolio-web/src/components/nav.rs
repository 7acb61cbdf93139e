use leptos::prelude::*;
use portfolio_core::NavItem;

use crate::state::PortfolioState;

#[component]
pub fn NavStrip() -> impl IntoView {
    let state = expect_context::<PortfolioState>();

    view! {
        <nav class="nav-strip">
            <ul>
                // Keyed on the active flag so only the two affected labels re-render.
                <For
                    each=move || state.nav_items()
                    key=|item| (item.tab, item.active)
                    children=move |item: NavItem| {
                        view! {
                            <li>
                                <button
                                    class="nav-tab"
                                    class:active=item.active
                                    data-tab=item.tab.slug()
                                    on:click=move |_| state.select(item.tab)
                                >
                                    {item.label}
                                    {item.active.then(|| view! { <span class="nav-underline"></span> })}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </nav>
    }
}
