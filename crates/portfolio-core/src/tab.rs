use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// The section of the page currently selected in the navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Home,
    Skills,
    Contact,
}

impl ActiveTab {
    pub fn slug(&self) -> &'static str {
        match self {
            ActiveTab::Home => "home",
            ActiveTab::Skills => "skills",
            ActiveTab::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Home => "Home",
            ActiveTab::Skills => "Skills",
            ActiveTab::Contact => "Contact",
        }
    }

    /// Navigation order.
    pub fn all() -> &'static [ActiveTab] {
        &[ActiveTab::Home, ActiveTab::Skills, ActiveTab::Contact]
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ActiveTab {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ActiveTab::all()
            .iter()
            .copied()
            .find(|tab| tab.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PortfolioError::UnknownTab(s.to_string()))
    }
}
