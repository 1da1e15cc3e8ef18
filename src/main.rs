use theme_switcher::ThemeToggle;
use theme_switcher::dom::WebDom;

fn main() {
    match WebDom::new().and_then(ThemeToggle::initialize) {
        Ok(mounted) => mounted.forget(),
        Err(e) => gloo::console::error!(&format!("Theme switcher unavailable: {e}")),
    }
}
