use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Config;
use crate::dom::Dom;
use crate::models::{error::ThemeError, theme::Theme};

/// Keeps the root `data-theme` attribute and the switcher button in sync
/// with the current theme.
pub struct ThemeToggle<D: Dom> {
    dom: D,
    current: Theme,
    button: D::Button,
}

/// A toggle attached to the page.
///
/// The click handler holds its own `Rc` to the toggle; this handle owns the
/// listener, so dropping it releases both and leaves an inert button behind.
/// Call [`Mounted::unmount`] to remove the button, or [`Mounted::forget`] to
/// keep it working for the rest of the page's life.
#[must_use = "dropping the handle detaches the click listener"]
pub struct Mounted<D: Dom> {
    toggle: Rc<RefCell<ThemeToggle<D>>>,
    _listener: D::Listener,
}

impl<D: Dom + 'static> ThemeToggle<D> {
    /// Resolves the initial theme, injects the switcher button into the body
    /// and applies the theme.
    ///
    /// Any switcher left by an earlier call is removed first, so the page
    /// never holds more than one.
    pub fn initialize(dom: D) -> Result<Mounted<D>, ThemeError> {
        let current = match dom.prefers_dark() {
            Ok(prefers_dark) => Theme::from_preference(prefers_dark),
            Err(e) => {
                dom.warn(&format!("{e}, using {} theme", Theme::default()));
                Theme::default()
            }
        };

        dom.remove_buttons(Config::BUTTON_CLASS);
        let button = dom.create_button(Config::BUTTON_CLASS)?;

        let toggle = Rc::new(RefCell::new(Self {
            dom,
            current,
            button,
        }));

        let listener = {
            let this = toggle.borrow();
            let handler = Rc::clone(&toggle);
            let listener = this
                .dom
                .listen_click(&this.button, Box::new(move || handler.borrow_mut().on_click()));
            this.dom.append_to_body(&this.button)?;
            listener
        };

        toggle.borrow_mut().apply_theme(current);

        Ok(Mounted {
            toggle,
            _listener: listener,
        })
    }
}

impl<D: Dom> ThemeToggle<D> {
    pub const fn theme(&self) -> Theme {
        self.current
    }

    /// Switches to the opposite theme.
    pub fn on_click(&mut self) {
        self.apply_theme(self.current.toggled());
    }

    /// Records `theme` and writes it to the root attribute and the button.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.current = theme;
        let label = theme.label();

        self.dom
            .set_root_attribute(Config::THEME_ATTRIBUTE, theme.as_str());
        self.dom
            .set_button_html(&self.button, &format!("<i>{label}</i>"));
        self.dom
            .set_button_attribute(&self.button, Config::ARIA_LABEL_ATTRIBUTE, label);
    }
}

impl<D: Dom> Mounted<D> {
    pub fn theme(&self) -> Theme {
        self.toggle.borrow().theme()
    }

    /// Keeps the switcher and its click listener alive until the page unloads.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    /// Removes the switcher button and stops listening for clicks.
    pub fn unmount(self) {
        let toggle = self.toggle.borrow();
        toggle.dom.remove_button(&toggle.button);
    }
}
