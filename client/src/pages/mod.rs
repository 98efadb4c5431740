//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and its `ToolState`, created when the route
//! mounts, so leaving a tool and coming back starts from an empty view. The
//! `run` helper drives the shared request lifecycle for all tool pages.

pub mod auth;
pub mod content_generator;
pub mod demo;
pub mod home;
pub mod knowledge_simplifier;
pub mod not_found;
pub mod student_evaluator;
pub mod visual_aid_generator;
pub mod worksheet_generator;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::future::Future;

use classroom::{InputError, Tool};
use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::state::request::{Submission, ToolState};
use crate::state::toast::ToastQueue;

/// Top-level views reachable by URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Auth,
    Demo,
    Tool(Tool),
    NotFound,
}

impl Page {
    /// Resolve a URL path. Query strings, fragments and trailing slashes are
    /// ignored; anything unknown is `NotFound`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/auth" => Self::Auth,
            "/demo" => Self::Demo,
            other => Tool::ALL
                .into_iter()
                .find(|tool| tool.path() == other)
                .map_or(Self::NotFound, Self::Tool),
        }
    }

    /// Canonical path, or `None` for the catch-all.
    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Auth => Some("/auth"),
            Self::Demo => Some("/demo"),
            Self::Tool(tool) => Some(tool.path()),
            Self::NotFound => None,
        }
    }

    /// Route segment for the router (path without the leading slash).
    #[must_use]
    pub fn segment(self) -> Option<&'static str> {
        self.path().map(|path| path.trim_start_matches('/'))
    }
}

/// Request state for a tool page, created when the page mounts.
///
/// The signal belongs to the page's owner, so navigating away disposes it and
/// the next visit starts `Idle` with no result.
pub(crate) fn mount_state<R>() -> RwSignal<ToolState<R>>
where
    R: Send + Sync + 'static,
{
    RwSignal::new(ToolState::default())
}

/// Validate, enter `Pending`, issue `request`, then record the outcome.
///
/// A rejected submission raises one validation toast and issues nothing.
pub(crate) fn run<R, F>(
    state: RwSignal<ToolState<R>>,
    toasts: RwSignal<ToastQueue>,
    tool: Tool,
    check: Result<(), InputError>,
    request: impl FnOnce() -> F + 'static,
) where
    R: Send + Sync + 'static,
    F: Future<Output = Result<R, String>> + 'static,
{
    match state.try_update(|s| s.submit(check)) {
        Some(Submission::Started) => {}
        Some(Submission::Rejected(err)) => {
            notify(toasts, |queue| queue.push_validation(err));
            return;
        }
        Some(Submission::Ignored) | None => return,
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = request().await;
        finish(state, toasts, tool, outcome);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        finish(state, toasts, tool, Err("not available on server".to_owned()));
    }
}

/// Apply a finished request. A view unmounted in the meantime has a disposed
/// signal, so the outcome is dropped without a toast.
fn finish<R>(state: RwSignal<ToolState<R>>, toasts: RwSignal<ToastQueue>, tool: Tool, outcome: Result<R, String>)
where
    R: Send + Sync + 'static,
{
    match outcome {
        Ok(result) => {
            if state.try_update(|s| s.complete(result)).is_some() {
                notify(toasts, |queue| queue.push_completion(tool));
            }
        }
        Err(message) => {
            #[cfg(feature = "hydrate")]
            log::warn!("{}: request failed: {message}", tool.name());
            if state.try_update(ToolState::fail).is_some() {
                notify(toasts, |queue| queue.push_failure(tool, &message));
            }
        }
    }
}
