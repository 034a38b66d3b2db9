use thiserror::Error;
use std::result;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {key}={value:?}")]
    InvalidConfig { key: String, value: String },
    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Generic(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_names_key_and_value() {
        let err = Error::InvalidConfig {
            key: "SHAPE_TEXT_MODEL".to_string(),
            value: "wide".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: SHAPE_TEXT_MODEL=\"wide\""
        );
    }

    #[test]
    fn eyre_reports_become_generic() {
        let err: Error = eyre::eyre!("boom").into();
        assert!(matches!(err, Error::Generic(ref msg) if msg == "boom"));
    }
}
