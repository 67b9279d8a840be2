//! Real-time neural denoising module
//!
//! Splits the stage into the pieces the audio thread and the control
//! thread touch:
//! 1. Engine capability (RNNoise via nnnoiseless, behind a trait)
//! 2. Suppression level (lock-free dry/wet control)
//! 3. Frame processor (range conversion, denoise, blend)
//! 4. Options (host-supplied startup settings)

pub mod engine;
pub mod level;
pub mod neural;
pub mod options;

pub use engine::{
    DenoiseEngine, EngineFactory, Frame, RnnoiseEngine, RnnoiseFactory, FRAME_SIZE, SAMPLE_RATE,
};
pub use level::SuppressionLevel;
pub use neural::FrameProcessor;
pub use options::DenoiseOptions;
