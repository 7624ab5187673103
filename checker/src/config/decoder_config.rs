use super::fields::{as_section, bool_field, depth_field, reject_unknown};
use crate::error::Result;
use json_decoder::{DEFAULT_MAX_DEPTH, ParseOptions, Value};

/// Decoder settings
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderConfig {
    /// `None` disables the nesting limit.
    pub max_depth: Option<usize>,
    pub allow_control_characters: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_control_characters: false,
        }
    }
}

impl DecoderConfig {
    /// Reads the `decoder` section; missing members keep their defaults.
    pub fn from_json(value: &Value) -> Result<Self> {
        let section = as_section(value, "decoder")?;
        reject_unknown(section, &["max_depth", "allow_control_characters"], "decoder")?;

        let defaults = Self::default();
        Ok(DecoderConfig {
            max_depth: depth_field(section, "max_depth", "decoder")?.unwrap_or(defaults.max_depth),
            allow_control_characters: bool_field(section, "allow_control_characters", "decoder")?
                .unwrap_or(defaults.allow_control_characters),
        })
    }

    pub fn to_options(&self) -> ParseOptions {
        let options = ParseOptions::new().allow_control_characters(self.allow_control_characters);
        match self.max_depth {
            Some(depth) => options.with_max_depth(depth),
            None => options.without_depth_limit(),
        }
    }
}
