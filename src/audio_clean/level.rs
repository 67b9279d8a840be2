use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Default suppression level (full suppression).
pub const DEFAULT_SUPPRESSION_LEVEL: f32 = 1.0;

/// Dry/wet suppression control shared between the control and audio threads.
///
/// Stores f32 bits in an `AtomicU32`; all accesses are relaxed. A new value
/// becomes visible to the audio thread on some later frame.
/// 0.0 = bypass (original audio), 1.0 = fully denoised.
#[derive(Clone, Debug)]
pub struct SuppressionLevel {
    bits: Arc<AtomicU32>,
}

impl SuppressionLevel {
    /// Create a level handle.
    ///
    /// # Arguments
    /// * `level` - Initial level, clamped to [0.0, 1.0]; NaN falls back to
    ///   [`DEFAULT_SUPPRESSION_LEVEL`]
    pub fn new(level: f32) -> Self {
        let level = if level.is_nan() {
            DEFAULT_SUPPRESSION_LEVEL
        } else {
            level.clamp(0.0, 1.0)
        };
        Self {
            bits: Arc::new(AtomicU32::new(level.to_bits())),
        }
    }

    /// Clamp to [0.0, 1.0] and store. NaN is ignored.
    ///
    /// Lock-free and allocation-free, so it may be called from any thread,
    /// including the audio callback.
    pub fn set(&self, level: f32) {
        if level.is_nan() {
            return;
        }
        self.bits
            .store(level.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Default for SuppressionLevel {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPRESSION_LEVEL)
    }
}
