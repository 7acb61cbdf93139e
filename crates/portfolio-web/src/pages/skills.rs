use leptos::prelude::*;
use portfolio_core::content::SKILLS;
use portfolio_core::ContentBlock;

#[component]
pub fn SkillsBlock() -> impl IntoView {
    view! {
        <div class="block skills-block">
            <h2 class="dashed">{ContentBlock::Skills.heading()}</h2>
            <p class="skills">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, group)| {
                        // Breaks go between lines only.
                        let last = i + 1 == SKILLS.len();
                        view! {
                            <strong>{group.category}":"</strong>
                            " "
                            {group.summary()}
                            {(!last).then(|| view! { <br /> })}
                        }
                    })
                    .collect_view()}
            </p>
        </div>
    }
}
