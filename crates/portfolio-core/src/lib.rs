// Domain modules
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod tab;
pub mod view_state;

pub use config::{LoggingConfig, MotionConfig, PortfolioConfig};
pub use content::{ContentBlock, ExternalLink, SkillGroup};
pub use error::{PortfolioError, Result};
pub use nav::{nav_items, NavItem};
pub use tab::ActiveTab;
pub use view_state::{Phase, Schedule, ViewState};
