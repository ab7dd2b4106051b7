//! Leptos components mounted into server-rendered pages.

pub mod theme_toggle;
