// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    /// Serialize `value` for the structured formats. Text output is produced
    /// by [`crate::report::ReportFormatter`] instead.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            ReportOutputFormat::Text => Err(anyhow!("text output has no serialized form")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn structured_formats_serialize() {
        let value: BTreeMap<&str, &str> = [("ER_EMPTY_EXPRESSION", "Empty expression!")].into();
        let json = ReportOutputFormat::Json.serialize(&value).unwrap();
        assert!(json.contains("\"ER_EMPTY_EXPRESSION\": \"Empty expression!\""));
        let yaml = ReportOutputFormat::Yaml.serialize(&value).unwrap();
        assert!(yaml.starts_with("ER_EMPTY_EXPRESSION: "));
        assert!(ReportOutputFormat::Text.serialize(&value).is_err());
    }
}
