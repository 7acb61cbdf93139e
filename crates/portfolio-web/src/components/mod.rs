pub mod contact_button;
pub mod content_panel;
pub mod nav;
