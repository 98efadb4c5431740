//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts tool requests to the generation service and decodes results.
//! Request and result shapes come from the shared `classroom` crate.

pub mod api;
