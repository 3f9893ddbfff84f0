use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default = "default_display_headers")]
    pub display_headers: Vec<String>,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_input() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_display_headers() -> Vec<String> {
    [
        "employee_id",
        "employee_first_name_global",
        "employee_last_name_global",
        "mobile_number",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_delimiter() -> char {
    '|'
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: default_input(),
            display_headers: default_display_headers(),
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    // csv delimiters are single bytes, so anything past ASCII is rejected
    // before the file is opened.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(Error::InvalidDelimiter(self.delimiter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("data.csv"));
        assert_eq!(
            config.display_headers,
            vec![
                "employee_id",
                "employee_first_name_global",
                "employee_last_name_global",
                "mobile_number"
            ]
        );
        assert_eq!(config.delimiter, '|');
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "input": "people.csv",
            "display_headers": ["id", "name"],
            "delimiter": ";"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.input, PathBuf::from("people.csv"));
        assert_eq!(config.display_headers, vec!["id", "name"]);
        assert_eq!(config.delimiter, ';');
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{"input": "other.csv"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.input, PathBuf::from("other.csv"));
        assert_eq!(config.delimiter, '|');
        assert_eq!(config.display_headers.len(), 4);
    }

    #[test]
    fn test_delimiter_byte() {
        let config = Config::default();
        assert_eq!(config.delimiter_byte().unwrap(), b'|');

        let mut config = Config::default();
        config.delimiter = '→';
        assert!(matches!(
            config.delimiter_byte(),
            Err(Error::InvalidDelimiter('→'))
        ));
    }
}
