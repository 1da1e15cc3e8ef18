//! The UI element/attribute boundary.
//!
//! [`ThemeToggle`](crate::toggle::ThemeToggle) never touches `web-sys`
//! directly; every side effect goes through a [`Dom`] implementation. The
//! browser binding lives in [`web`].

pub mod web;

pub use web::WebDom;

use crate::config::Config;
use crate::models::error::ThemeError;

/// Builds a selector matching buttons that carry every class token.
pub fn button_selector(class_name: &str) -> String {
    class_name
        .split_whitespace()
        .fold(String::from(Config::BUTTON_TAG), |mut selector, token| {
            selector.push('.');
            selector.push_str(token);
            selector
        })
}

/// Page operations the theme toggle needs from its host.
pub trait Dom {
    /// Handle to an element created by this host
    type Button: Clone + 'static;
    /// Guard keeping a click handler registered until dropped
    type Listener;

    /// Reads the OS-level "prefers dark" signal.
    fn prefers_dark(&self) -> Result<bool, ThemeError>;

    /// Creates a detached button carrying `class_name`.
    fn create_button(&self, class_name: &str) -> Result<Self::Button, ThemeError>;

    /// Removes every button in the page carrying all tokens of `class_name`.
    fn remove_buttons(&self, class_name: &str);

    /// Appends `button` as the last child of the page body.
    fn append_to_body(&self, button: &Self::Button) -> Result<(), ThemeError>;

    /// Registers `handler` for clicks on `button`.
    fn listen_click(&self, button: &Self::Button, handler: Box<dyn Fn()>) -> Self::Listener;

    /// Detaches `button` from the page.
    fn remove_button(&self, button: &Self::Button);

    /// Sets an attribute on the document root element.
    fn set_root_attribute(&self, name: &str, value: &str);

    /// Replaces the button's content with `html`.
    fn set_button_html(&self, button: &Self::Button, html: &str);

    /// Sets an attribute on `button`.
    fn set_button_attribute(&self, button: &Self::Button, name: &str, value: &str);

    /// Reports a recoverable problem.
    fn warn(&self, message: &str);
}
