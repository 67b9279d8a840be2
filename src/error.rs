/// Typed errors for the denoising stage.
///
/// Only lifecycle calls can fail; frame processing has no error path.
#[derive(Debug, thiserror::Error)]
pub enum DenoiseError {
    #[error("Engine creation failed: {0}")]
    EngineCreate(String),
}
