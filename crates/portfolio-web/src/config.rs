use portfolio_core::{PortfolioConfig, Result};

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

pub fn load() -> Result<PortfolioConfig> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => PortfolioConfig::from_json(&raw),
        _ => Ok(PortfolioConfig::default()),
    }
}
