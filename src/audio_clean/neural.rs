//! Real-time neural denoising of single frames
//!
//! Wraps a [`DenoiseEngine`] with range conversion and a dry/wet blend.
//!
//! REAL-TIME RULES:
//! - `process_frame()` does no allocation, no locking and a fixed amount of
//!   work per call.
//! - The suppression level is lock-free and may be changed from any thread.
//! - `initialize()` and `teardown()` are NOT real-time safe. Call them outside
//!   the audio callback, never concurrently with `process_frame()`.

use super::engine::{DenoiseEngine, EngineFactory, Frame, RnnoiseFactory};
use super::level::SuppressionLevel;
use super::options::DenoiseOptions;
use crate::error::DenoiseError;

/// Scale from normalized [-1.0, 1.0] to the engine's i16 range
const I16_SCALE: f32 = 32767.0;
const INV_I16_SCALE: f32 = 1.0 / I16_SCALE;

/// Owns one engine instance and processes frames through it.
pub struct FrameProcessor<F: EngineFactory = RnnoiseFactory> {
    factory: F,
    engine: Option<F::Engine>,
    level: SuppressionLevel,
}

impl FrameProcessor<RnnoiseFactory> {
    /// Uninitialized RNNoise processor at full suppression.
    pub fn new() -> Self {
        Self::with_factory(RnnoiseFactory)
    }
}

impl Default for FrameProcessor<RnnoiseFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: EngineFactory> FrameProcessor<F> {
    /// Create an uninitialized processor at full suppression.
    ///
    /// # Arguments
    /// * `factory` - Builds the engine on each `initialize()` call
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory,
            engine: None,
            level: SuppressionLevel::default(),
        }
    }

    /// Build a processor from host options, creating the engine right away
    /// if `options.initialize` is set.
    pub fn from_options(factory: F, options: &DenoiseOptions) -> Result<Self, DenoiseError> {
        let mut processor = Self::with_factory(factory);
        processor.set_suppression_level(options.suppression_level);
        if options.initialize {
            processor.initialize()?;
        }
        Ok(processor)
    }

    /// Create the engine. An existing engine is released first.
    ///
    /// On failure the processor is left uninitialized.
    pub fn initialize(&mut self) -> Result<(), DenoiseError> {
        self.teardown();
        match self.factory.create() {
            Ok(engine) => {
                self.engine = Some(engine);
                log::info!(
                    "Denoise engine initialized (suppression level {:.2})",
                    self.level.get()
                );
                Ok(())
            }
            Err(e) => {
                log::error!("Denoise engine initialization failed: {}", e);
                Err(e)
            }
        }
    }

    /// Release the engine. No-op when uninitialized.
    pub fn teardown(&mut self) {
        if self.engine.take().is_some() {
            log::debug!("Denoise engine released");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// Process a single frame in place and return the engine's voice
    /// activity probability.
    ///
    /// Input is normalized [-1.0, 1.0] audio. Returns 0.0 without touching
    /// the frame when uninitialized or when the suppression level is 0.0.
    /// Below level 1.0 the output is `denoised * level + original * (1 - level)`.
    pub fn process_frame(&mut self, frame: &mut Frame) -> f32 {
        let Some(engine) = self.engine.as_mut() else {
            return 0.0;
        };

        let level = self.level.get();

        // Fully bypassed: skip conversion and the engine entirely
        if level <= 0.0 {
            return 0.0;
        }

        let original: Frame = *frame;
        for sample in frame.iter_mut() {
            *sample *= I16_SCALE;
        }

        let vad = engine.process_frame(frame);

        for sample in frame.iter_mut() {
            *sample *= INV_I16_SCALE;
        }

        if level < 1.0 {
            let dry = 1.0 - level;
            for (sample, &dry_sample) in frame.iter_mut().zip(original.iter()) {
                *sample = *sample * level + dry_sample * dry;
            }
        }

        vad
    }

    /// Set suppression level [0.0 = bypass, 1.0 = full suppression].
    /// Safe to call while another thread is processing.
    pub fn set_suppression_level(&self, level: f32) {
        self.level.set(level);
    }

    pub fn suppression_level(&self) -> f32 {
        self.level.get()
    }

    /// A handle for changing the level from another thread while the
    /// audio thread holds the processor.
    pub fn suppression_handle(&self) -> SuppressionLevel {
        self.level.clone()
    }
}
