//! Page helpers shared across the chat templates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its decision rules browser-free and confines DOM glue
//! to `hydrate`-only functions, so the same rules serve both the Bootstrap
//! and the daisyUI templates.

pub mod alerts;
pub mod forms;
pub mod password;
pub mod toast;
