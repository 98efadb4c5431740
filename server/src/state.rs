//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the generation backend; tool requests and results are never
//! stored server-side.

use std::sync::Arc;

use crate::config::LatencyProfile;
use crate::generator::{CannedGenerator, Generator};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the generator is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// State backed by the canned generator.
    #[must_use]
    pub fn canned(latency: LatencyProfile) -> Self {
        Self::new(Arc::new(CannedGenerator::new(latency)))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
