use yew::prelude::*;

use crate::dom::WebDom;
use crate::toggle::ThemeToggle;

/// Injects the light/dark switcher into `<body>` for as long as this
/// component is mounted.
#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    use_effect_with((), move |_| {
        let mounted = match WebDom::new().and_then(ThemeToggle::initialize) {
            Ok(mounted) => Some(mounted),
            Err(e) => {
                gloo::console::error!(&format!("Theme switcher unavailable: {e}"));
                None
            }
        };

        move || {
            if let Some(mounted) = mounted {
                mounted.unmount();
            }
        }
    });

    html! {}
}
