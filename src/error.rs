use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Boot time unavailable: {reason}")]
    BootTimeUnavailable { reason: String },

    #[error("Failed to write export: {0}")]
    ExportWrite(std::io::Error),
}
