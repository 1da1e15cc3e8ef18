/// Configuration constants for the theme switcher.
///
/// These are the contract with the page's stylesheets; changing any of them
/// breaks existing CSS.
pub struct Config;

impl Config {
    /// Attribute set on `<html>` that selects the palette
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";

    /// Accessible label attribute mirrored from the button text
    pub const ARIA_LABEL_ATTRIBUTE: &'static str = "aria-label";

    /// Tag of the injected switcher element
    pub const BUTTON_TAG: &'static str = "button";

    /// Class tokens used by stylesheets for positioning and appearance
    pub const BUTTON_CLASS: &'static str = "contrast switcher";

    /// Media query exposing the OS-level dark preference
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme:dark)";
}
