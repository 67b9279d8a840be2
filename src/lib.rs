//! Real-time noise suppression stage built around RNNoise.
//!
//! The [`FrameProcessor`] denoises fixed 480-sample frames in place and
//! blends the result with the dry signal according to a suppression level
//! that can be changed from any thread without locking.

pub mod audio_clean;
pub mod error;

pub use audio_clean::{
    DenoiseEngine, DenoiseOptions, EngineFactory, Frame, FrameProcessor, RnnoiseEngine,
    RnnoiseFactory, SuppressionLevel, FRAME_SIZE, SAMPLE_RATE,
};
pub use error::DenoiseError;
