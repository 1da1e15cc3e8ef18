pub mod theme_switcher;

pub use theme_switcher::ThemeSwitcher;
