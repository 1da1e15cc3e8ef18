//! Light/dark theme switcher for server-rendered pages.
//!
//! Reads the OS color-scheme preference, appends a toggle button to
//! `<body>` and keeps the root `data-theme` attribute in sync with it.

pub mod components;
pub mod config;
pub mod dom;
pub mod models;
pub mod toggle;

pub use models::{Theme, ThemeError};
pub use toggle::{Mounted, ThemeToggle};
