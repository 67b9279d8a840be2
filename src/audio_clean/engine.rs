//! Denoising engine capability
//!
//! The frame processor only needs three things from an engine: create an
//! instance, denoise one frame in place, destroy the instance. Destruction
//! is the engine's `Drop`.

use std::sync::Once;

use nnnoiseless::DenoiseState;

use crate::error::DenoiseError;

/// RNNoise frame size (fixed at 480 samples at 48kHz = 10ms)
pub const FRAME_SIZE: usize = 480;
/// RNNoise sample rate (fixed at 48kHz)
pub const SAMPLE_RATE: u32 = 48_000;

const _: () = assert!(DenoiseState::FRAME_SIZE == FRAME_SIZE);

/// One frame of mono audio.
pub type Frame = [f32; FRAME_SIZE];

// ── Engine traits ──

/// A stateful denoiser that works on whole frames.
///
/// Samples are in i16 range ([-32768, 32767]) as f32.
pub trait DenoiseEngine: Send {
    /// Denoise `frame` in place and return the voice activity probability
    /// in [0.0, 1.0]. Called from the audio thread: must not allocate,
    /// block or lock.
    fn process_frame(&mut self, frame: &mut Frame) -> f32;
}

/// Creates engine instances. Called outside the audio thread.
pub trait EngineFactory {
    type Engine: DenoiseEngine;

    fn create(&self) -> Result<Self::Engine, DenoiseError>;
}

// ── RNNoise ──

/// Builds [`RnnoiseEngine`]s using the model bundled with nnnoiseless.
#[derive(Debug, Clone, Copy, Default)]
pub struct RnnoiseFactory;

impl EngineFactory for RnnoiseFactory {
    type Engine = RnnoiseEngine;

    fn create(&self) -> Result<RnnoiseEngine, DenoiseError> {
        Ok(RnnoiseEngine::new())
    }
}

/// RNNoise denoiser via nnnoiseless.
///
/// nnnoiseless reads from one slice and writes to another, so the engine
/// keeps its own input frame to make processing in-place without touching
/// the heap per frame.
pub struct RnnoiseEngine {
    state: Box<DenoiseState<'static>>,
    input: Box<Frame>,
}

impl RnnoiseEngine {
    /// Create an engine with the bundled RNNoise model.
    ///
    /// Allocates, and on first use builds nnnoiseless' process-wide FFT and
    /// window tables. Call outside the audio thread.
    pub fn new() -> Self {
        warm_shared_tables();
        Self {
            state: DenoiseState::new(),
            input: Box::new([0.0; FRAME_SIZE]),
        }
    }
}

/// nnnoiseless fills its shared tables lazily on the first processed frame.
/// Run one silent frame here so that never happens on the audio thread.
fn warm_shared_tables() {
    static WARMED: Once = Once::new();
    WARMED.call_once(|| {
        let mut scratch = DenoiseState::new();
        let input = [0.0f32; FRAME_SIZE];
        let mut output = [0.0f32; FRAME_SIZE];
        scratch.process_frame(&mut output, &input);
        log::debug!("RNNoise shared tables initialized");
    });
}

impl Default for RnnoiseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DenoiseEngine for RnnoiseEngine {
    #[inline]
    fn process_frame(&mut self, frame: &mut Frame) -> f32 {
        self.input.copy_from_slice(frame);
        self.state.process_frame(frame, &self.input[..])
    }
}
