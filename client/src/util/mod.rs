//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs (file inputs, blob downloads) from
//! page logic. Under SSR they compile to inert stubs.

pub mod download;
pub mod files;
