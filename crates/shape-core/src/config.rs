//! Runtime configuration of the shape oracle.
//!
//! The only knob is the text model: whether the target runtime distinguishes
//! narrow and wide text. It is read once from `SHAPE_TEXT_MODEL` and cached for
//! the lifetime of the process.

use crate::error::{Error, Result};
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const TEXT_MODEL_ENV: &str = "SHAPE_TEXT_MODEL";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    FromStr,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TextModel {
    /// Narrow and wide text are the same runtime type.
    #[default]
    Unified,
    /// Narrow text is a byte string, wide text a separate unicode type.
    Split,
}

impl TextModel {
    pub fn is_unified(self) -> bool {
        matches!(self, TextModel::Unified)
    }

    pub fn parse_setting(value: &str) -> Result<TextModel> {
        value
            .trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| Error::InvalidConfig {
                key: TEXT_MODEL_ENV.to_string(),
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub text_model: TextModel,
}

impl ShapeConfig {
    pub fn new(text_model: TextModel) -> Self {
        Self { text_model }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the configuration from the environment. Unset means default.
    pub fn from_env() -> Result<Self> {
        match std::env::var(TEXT_MODEL_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                Ok(Self::new(TextModel::parse_setting(&value)?))
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                bail!("{} is not valid unicode", TEXT_MODEL_ENV)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Picks the text model from a loaded configuration, falling back to the
/// default when loading failed.
pub fn resolve(config: Result<ShapeConfig>) -> TextModel {
    match config {
        Ok(config) => {
            debug!("text model resolved to {}", config.text_model);
            config.text_model
        }
        Err(err) => {
            warn!("{err}; falling back to {}", TextModel::default());
            TextModel::default()
        }
    }
}

/// Process-wide text model, resolved on first use.
pub fn text_model() -> TextModel {
    static MODEL: OnceLock<TextModel> = OnceLock::new();
    *MODEL.get_or_init(|| resolve(ShapeConfig::from_env()))
}
