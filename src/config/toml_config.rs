use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub fold: FoldConfig,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    pub trim: Option<bool>,
    pub skip_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，先替換 `${VAR}`
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${OUTPUT_PATH})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UtilError::ConfigError {
            message: format!("env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            validation::validate_output_format("output.format", format)?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validation::validate_non_empty_string("logging.level", level)?;
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// 命令列參數覆蓋設定檔的值
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if cli.trim {
            self.fold.trim = Some(true);
        }
        if cli.skip_empty {
            self.fold.skip_empty = Some(true);
        }
        if let Some(format) = cli.format {
            self.output.format = Some(format.to_string());
        }
        if let Some(path) = &cli.output {
            self.output.path = Some(path.clone());
        }
        if cli.verbose {
            self.logging.get_or_insert_with(LoggingConfig::default).level =
                Some("debug".to_string());
        }
        if cli.json_logs {
            self.logging.get_or_insert_with(LoggingConfig::default).json = Some(true);
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn trim(&self) -> bool {
        self.fold.trim.unwrap_or(false)
    }

    fn skip_empty(&self) -> bool {
        self.fold.skip_empty.unwrap_or(false)
    }

    fn output_format(&self) -> OutputFormat {
        // 未知格式已在 validate_config 中拒絕
        self.output
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[fold]
trim = true
skip_empty = true

[output]
format = "json"
path = "./folded.json"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.trim());
        assert!(config.skip_empty());
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("./folded.json"));
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(!config.trim());
        assert!(!config.skip_empty());
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.output_path(), None);
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RDUTIL_TEST_OUTPUT", "/tmp/rdutil-out.txt");

        let toml_content = r#"
[output]
path = "${RDUTIL_TEST_OUTPUT}"
format = "${RDUTIL_TEST_UNSET_FORMAT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.path.as_deref(), Some("/tmp/rdutil-out.txt"));
        assert_eq!(
            config.output.format.as_deref(),
            Some("${RDUTIL_TEST_UNSET_FORMAT}")
        );

        std::env::remove_var("RDUTIL_TEST_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = TomlConfig::from_toml_str("[fold\ntrim = yes");
        assert!(matches!(result, Err(UtilError::TomlError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[fold]\ntrim = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.trim());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides() {
        let mut config = TomlConfig::from_toml_str("[output]\nformat = \"text\"\n").unwrap();
        let cli = crate::config::CliConfig {
            skip_empty: true,
            format: Some(OutputFormat::Json),
            output: Some("out.json".to_string()),
            verbose: true,
            ..Default::default()
        };

        config.apply_overrides(&cli);

        assert!(!config.trim());
        assert!(config.skip_empty());
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("out.json"));
        assert_eq!(config.log_level(), "debug");
    }
}
