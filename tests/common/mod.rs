#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use denoise_rt::{DenoiseEngine, DenoiseError, EngineFactory, Frame, FRAME_SIZE};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic stand-in for RNNoise: scales every sample by `gain`
/// and reports a fixed voice activity probability.
pub struct GainEngine {
    gain: f32,
    vad: f32,
    live: Arc<AtomicUsize>,
}

impl DenoiseEngine for GainEngine {
    fn process_frame(&mut self, frame: &mut Frame) -> f32 {
        for sample in frame.iter_mut() {
            *sample *= self.gain;
        }
        self.vad
    }
}

impl Drop for GainEngine {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct GainFactory {
    pub gain: f32,
    pub vad: f32,
    pub live: Arc<AtomicUsize>,
}

impl GainFactory {
    pub fn new(gain: f32, vad: f32) -> Self {
        Self {
            gain,
            vad,
            live: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl EngineFactory for GainFactory {
    type Engine = GainEngine;

    fn create(&self) -> Result<GainEngine, DenoiseError> {
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(GainEngine {
            gain: self.gain,
            vad: self.vad,
            live: self.live.clone(),
        })
    }
}

/// Pseudo-random frame in [-amplitude, amplitude].
pub fn noise_frame(seed: &mut u32, amplitude: f32) -> Frame {
    let mut frame = [0.0f32; FRAME_SIZE];
    for sample in frame.iter_mut() {
        *seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let unit = (*seed >> 8) as f32 / (1u32 << 24) as f32;
        *sample = (unit * 2.0 - 1.0) * amplitude;
    }
    frame
}

/// A 440 Hz tone buried in noise, continuous across frames.
pub fn noisy_tone_frame(index: usize, seed: &mut u32) -> Frame {
    let mut frame = noise_frame(seed, 0.1);
    for (i, sample) in frame.iter_mut().enumerate() {
        let t = (index * FRAME_SIZE + i) as f32 / denoise_rt::SAMPLE_RATE as f32;
        *sample += 0.3 * (2.0 * std::f32::consts::PI * 440.0 * t).sin();
    }
    frame
}
