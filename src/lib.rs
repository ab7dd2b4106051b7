//! # chat-ui
//!
//! Leptos + WASM front-end behavior for the chat application pages.
//!
//! The theme resolver is the core of this crate: it decides between the
//! stored light/dark/system preference and the OS color scheme, applies the
//! result to `<html>`, and follows OS changes while no explicit choice is
//! stored. Around it sit the small page helpers (alert dismissal, form
//! feedback, toasts, password strength) that used to live in hand-copied
//! scripts, one per CSS framework.
//!
//! Browser glue is compiled only with the `hydrate` feature. Without it the
//! crate builds natively and every decision rule is unit-testable.

pub mod components;
pub mod config;
pub mod error;
pub mod theme;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod boot;
