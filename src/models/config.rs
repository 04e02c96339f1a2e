use cie1931::{Rounding, TableParams};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::GenerateError;

/// Generator configuration, optionally loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Largest input level (table has input_size + 1 entries)
    #[serde(default = "default_size")]
    pub input_size: u32,

    /// Largest output level (PWM duty cycle at full scale)
    #[serde(default = "default_size")]
    pub output_size: u32,

    /// C type of the emitted array elements
    #[serde(default = "default_element_type")]
    pub element_type: String,

    /// Symbol name of the emitted array
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Rounding policy for scaled values
    #[serde(default, deserialize_with = "deserialize_rounding")]
    pub rounding: Rounding,

    /// Header file to write ("-" for stdout)
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_size() -> u32 {
    255
}

fn default_element_type() -> String {
    "const unsigned char".to_string()
}

fn default_table_name() -> String {
    "cie".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("src/cie1931.h")
}

fn deserialize_rounding<'de, D>(deserializer: D) -> Result<Rounding, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// Values given on the command line; `Some` wins over the config file
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub input_size: Option<u32>,
    pub output_size: Option<u32>,
    pub element_type: Option<String>,
    pub table_name: Option<String>,
    pub rounding: Option<Rounding>,
    pub output: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            input_size = config.input_size,
            output_size = config.output_size,
            table_name = %config.table_name,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn apply_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(input_size) = overrides.input_size {
            self.input_size = input_size;
        }
        if let Some(output_size) = overrides.output_size {
            self.output_size = output_size;
        }
        if let Some(ref element_type) = overrides.element_type {
            self.element_type = element_type.clone();
        }
        if let Some(ref table_name) = overrides.table_name {
            self.table_name = table_name.clone();
        }
        if let Some(rounding) = overrides.rounding {
            self.rounding = rounding;
        }
        if let Some(ref output) = overrides.output {
            self.output = output.clone();
        }
        self
    }

    /// Reject names and types that would produce a header the firmware
    /// cannot compile or that silently truncates values.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !is_c_identifier(&self.table_name) {
            return Err(GenerateError::InvalidTableName(self.table_name.clone()));
        }

        let element_type = self.element_type.trim();
        if element_type.is_empty() || element_type.contains(['{', '}', ';', '[', ']', '\n']) {
            return Err(GenerateError::InvalidElementType(self.element_type.clone()));
        }

        if let Some(max) = element_capacity(element_type) {
            if u64::from(self.output_size) > max {
                return Err(GenerateError::ElementTypeTooNarrow {
                    element_type: self.element_type.clone(),
                    max,
                    output_size: self.output_size,
                });
            }
        }

        Ok(())
    }

    /// Table parameters described by this configuration
    pub fn table_params(&self) -> TableParams {
        TableParams::new(self.input_size, self.output_size).rounding(self.rounding)
    }

    /// Whether output goes to stdout instead of a file
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_size: default_size(),
            output_size: default_size(),
            element_type: default_element_type(),
            table_name: default_table_name(),
            rounding: Rounding::default(),
            output: default_output(),
        }
    }
}

fn is_c_identifier(name: &str) -> bool {
    static IDENT: OnceLock<Regex> = OnceLock::new();
    IDENT
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"))
        .is_match(name)
}

/// Largest value a recognised C integer type can hold.
///
/// Qualifiers and storage attributes are ignored. Returns `None` for types
/// we don't know, which are passed through unchecked.
pub fn element_capacity(element_type: &str) -> Option<u64> {
    let base: Vec<&str> = element_type
        .split_whitespace()
        .filter(|word| !matches!(*word, "const" | "static" | "volatile" | "PROGMEM"))
        .collect();

    let max = match base.join(" ").as_str() {
        "unsigned char" | "uint8_t" | "uint_least8_t" => u64::from(u8::MAX),
        "char" | "signed char" | "int8_t" => i8::MAX as u64,
        "unsigned short" | "unsigned short int" | "uint16_t" => u64::from(u16::MAX),
        "short" | "short int" | "signed short" | "int16_t" => i16::MAX as u64,
        "unsigned" | "unsigned int" | "unsigned long" | "uint32_t" => u64::from(u32::MAX),
        "int" | "signed" | "signed int" | "long" | "int32_t" => i32::MAX as u64,
        "uint64_t" | "unsigned long long" => u64::MAX,
        "int64_t" | "long long" => i64::MAX as u64,
        _ => return None,
    };
    Some(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.input_size, 255);
        assert_eq!(config.output_size, 255);
        assert_eq!(config.element_type, "const unsigned char");
        assert_eq!(config.table_name, "cie");
        assert_eq!(config.rounding, Rounding::HalfAwayFromZero);
        assert_eq!(config.output, PathBuf::from("src/cie1931.h"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let yaml = "output_size: 1023\nelement_type: const uint16_t\n";
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.input_size, 255);
        assert_eq!(config.output_size, 1023);
        assert_eq!(config.element_type, "const uint16_t");
        assert_eq!(config.table_name, "cie");
    }

    #[test]
    fn test_parse_rounding() {
        let config: GeneratorConfig = serde_yaml::from_str("rounding: half-even\n").unwrap();
        assert_eq!(config.rounding, Rounding::HalfEven);

        let result: Result<GeneratorConfig, _> = serde_yaml::from_str("rounding: up\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let result: Result<GeneratorConfig, _> = serde_yaml::from_str("gamma: 2.2\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            output_size: Some(100),
            table_name: Some("lut".to_string()),
            output: Some(PathBuf::from("-")),
            ..Default::default()
        };
        let config = GeneratorConfig::default().apply_overrides(&overrides);

        assert_eq!(config.input_size, 255);
        assert_eq!(config.output_size, 100);
        assert_eq!(config.table_name, "lut");
        assert!(config.writes_to_stdout());
    }

    #[test]
    fn test_validate_table_name() {
        for bad in ["", "9cie", "cie table", "cie[]", "cie;"] {
            let config = GeneratorConfig {
                table_name: bad.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(GenerateError::InvalidTableName(_))),
                "{bad:?} should be rejected"
            );
        }

        let config = GeneratorConfig {
            table_name: "_cie1931_lut".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_element_type() {
        let config = GeneratorConfig {
            element_type: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidElementType(_))
        ));

        let config = GeneratorConfig {
            element_type: "const unsigned char".to_string(),
            output_size: 1023,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerateError::ElementTypeTooNarrow { max: 255, .. })
        ));

        let config = GeneratorConfig {
            element_type: "const uint16_t PROGMEM".to_string(),
            output_size: 1023,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        // Unknown types are not second-guessed
        let config = GeneratorConfig {
            element_type: "pwm_level_t".to_string(),
            output_size: 100_000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_element_capacity() {
        assert_eq!(element_capacity("const unsigned char"), Some(255));
        assert_eq!(element_capacity("static const uint8_t"), Some(255));
        assert_eq!(element_capacity("const char"), Some(127));
        assert_eq!(element_capacity("uint16_t"), Some(65535));
        assert_eq!(element_capacity("const int"), Some(2_147_483_647));
        assert_eq!(element_capacity("fixed_t"), None);
    }

    #[test]
    fn test_table_params() {
        let config = GeneratorConfig {
            input_size: 100,
            output_size: 4095,
            rounding: Rounding::HalfEven,
            ..Default::default()
        };
        let params = config.table_params();
        assert_eq!(params.input_size, 100);
        assert_eq!(params.output_size, 4095);
        assert_eq!(params.rounding, Rounding::HalfEven);
    }
}
