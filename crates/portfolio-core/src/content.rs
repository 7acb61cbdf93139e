//! Literal page content. Nothing here is loaded or mutated at runtime.

use crate::tab::ActiveTab;

pub const NAME: &str = "Shiben Roy";
pub const PRONOUNS: &str = "(he/him/ChatGPT)";
pub const BIO: &str = "15, Also known as Astericc. I make stuff :P. I'm interested in making many \
different things like Web, Games, 3D Models, Edits, and more. I started taking interest in tech \
when my father taught me Python at 12. Trying to improve every day ~_~.";

pub const SKILLS_HEADING: &str = "Skills & Tooling";

pub const CONTACT_HEADING: &str = "Contact Me";
pub const CONTACT_INTRO: &str = "Feel free to reach out via email or connect with me on Discord.";
pub const EMAIL: &str = "shibenroy145@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

impl SkillGroup {
    pub fn summary(&self) -> String {
        self.items.join(", ")
    }
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages & Frameworks",
        items: &["TypeScript", "React", "Next.js"],
    },
    SkillGroup {
        category: "Design & 3D",
        items: &["Blender", "Adobe After Effects", "Figma"],
    },
    SkillGroup {
        category: "Tools",
        items: &["GitHub", "VS Code"],
    },
];

/// A link that always opens in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl ExternalLink {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";

    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

pub const CONTACT_LINKS: &[ExternalLink] = &[
    ExternalLink::new("GitHub", "https://github.com/shibenroy"),
    ExternalLink::new("Discord", "http://discordapp.com/users/769549219333406772"),
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// One of the three blocks the content panel can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentBlock {
    Home,
    Skills,
    Contact,
}

impl ContentBlock {
    pub fn for_tab(tab: ActiveTab) -> Self {
        match tab {
            ActiveTab::Home => ContentBlock::Home,
            ActiveTab::Skills => ContentBlock::Skills,
            ActiveTab::Contact => ContentBlock::Contact,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ContentBlock::Home => NAME,
            ContentBlock::Skills => SKILLS_HEADING,
            ContentBlock::Contact => CONTACT_HEADING,
        }
    }

    pub fn links(&self) -> &'static [ExternalLink] {
        match self {
            ContentBlock::Contact => CONTACT_LINKS,
            ContentBlock::Home | ContentBlock::Skills => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_tab_selects_its_own_block() {
        let blocks: HashSet<_> = ActiveTab::all()
            .iter()
            .map(|&tab| ContentBlock::for_tab(tab))
            .collect();
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_headings() {
        assert_eq!(ContentBlock::Home.heading(), "Shiben Roy");
        assert_eq!(ContentBlock::Skills.heading(), "Skills & Tooling");
        assert_eq!(ContentBlock::Contact.heading(), "Contact Me");
    }

    #[test]
    fn test_contact_links_are_fixed() {
        let github = CONTACT_LINKS.iter().find(|l| l.label == "GitHub").unwrap();
        assert_eq!(github.href, "https://github.com/shibenroy");

        let discord = CONTACT_LINKS.iter().find(|l| l.label == "Discord").unwrap();
        assert_eq!(discord.href, "http://discordapp.com/users/769549219333406772");

        assert!(ContentBlock::Home.links().is_empty());
        assert!(ContentBlock::Skills.links().is_empty());
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(), "mailto:shibenroy145@gmail.com");
    }

    #[test]
    fn test_skill_summary() {
        assert_eq!(SKILLS[2].summary(), "GitHub, VS Code");
    }
}
