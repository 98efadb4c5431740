//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each tool view owns a `ToolState` signal created on mount; the toast queue
//! is provided once from the app root. The types here are plain data so the
//! transitions can be tested without a reactive runtime.

pub mod auth;
pub mod request;
pub mod toast;
pub mod uploads;
