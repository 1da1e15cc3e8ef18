use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::{Dom, button_selector};
use crate::config::Config;
use crate::models::error::ThemeError;

/// [`Dom`] backed by the browser's `window` and `document`
#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        Ok(Self { window, document })
    }
}

fn js_error(err: JsValue) -> ThemeError {
    ThemeError::Dom(format!("{err:?}"))
}

impl Dom for WebDom {
    type Button = Element;
    type Listener = EventListener;

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        self.window
            .match_media(Config::DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .ok_or(ThemeError::EnvironmentQueryUnavailable)
    }

    fn create_button(&self, class_name: &str) -> Result<Element, ThemeError> {
        let button = self
            .document
            .create_element(Config::BUTTON_TAG)
            .map_err(js_error)?;
        button.set_class_name(class_name);
        Ok(button)
    }

    fn remove_buttons(&self, class_name: &str) {
        let nodes = match self.document.query_selector_all(&button_selector(class_name)) {
            Ok(nodes) => nodes,
            Err(e) => {
                self.warn(&format!("Failed to query existing switchers: {e:?}"));
                return;
            }
        };
        // NodeList from querySelectorAll is static, so removal does not shift indices
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                element.remove();
            }
        }
    }

    fn append_to_body(&self, button: &Element) -> Result<(), ThemeError> {
        let body = self.document.body().ok_or(ThemeError::NoBody)?;
        body.append_child(button).map_err(js_error)?;
        Ok(())
    }

    fn listen_click(&self, button: &Element, handler: Box<dyn Fn()>) -> EventListener {
        EventListener::new(button, "click", move |_event| handler())
    }

    fn remove_button(&self, button: &Element) {
        button.remove();
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        match self.document.document_element() {
            Some(root) => {
                if let Err(e) = root.set_attribute(name, value) {
                    self.warn(&format!("Failed to set {name} on root: {e:?}"));
                }
            }
            None => self.warn("Document has no root element"),
        }
    }

    fn set_button_html(&self, button: &Element, html: &str) {
        button.set_inner_html(html);
    }

    fn set_button_attribute(&self, button: &Element, name: &str, value: &str) {
        if let Err(e) = button.set_attribute(name, value) {
            self.warn(&format!("Failed to set {name} on switcher: {e:?}"));
        }
    }

    fn warn(&self, message: &str) {
        gloo::console::warn!(message);
    }
}
