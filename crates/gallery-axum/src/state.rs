//! Shared application state type.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// The context is immutable after bootstrap; handlers only read from it.
pub type AppState = Arc<AppContext>;
