use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("Argument error: expected a value for {0}")]
    MissingValue(&'static str),

    #[error("Argument error: invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("Argument error: scale must be between 1 and {max}, got {got}")]
    ScaleOutOfRange { got: u8, max: u8 },

    #[error("Argument error: unknown option {0}")]
    UnknownOption(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Args(#[from] ArgError),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Unable to create the window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Unable to set up the window surface: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}
