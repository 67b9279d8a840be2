//! Startup options for the frame processor
//!
//! The host owns where these come from; this is only the shape it
//! deserializes into.

use serde::{Deserialize, Serialize};

use super::level::DEFAULT_SUPPRESSION_LEVEL;

/// Options applied when building a [`super::FrameProcessor`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DenoiseOptions {
    /// Initial suppression level (0-1), clamped when applied
    pub suppression_level: f32,
    /// Create the engine immediately instead of waiting for `initialize()`
    pub initialize: bool,
}

impl Default for DenoiseOptions {
    fn default() -> Self {
        Self {
            suppression_level: DEFAULT_SUPPRESSION_LEVEL,
            initialize: false,
        }
    }
}
