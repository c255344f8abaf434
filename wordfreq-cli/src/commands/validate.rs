//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|config| {
            let counting = config.counting_config()?;
            Ok((config, counting))
        }) {
            Ok((config, counting)) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Separators: {} ({} characters)",
                    counting.separators(),
                    counting.separators().len()
                );
                println!("  Ordering: {}", counting.order());
                println!("  Output format: {}", config.output.default_format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[counting]
separators = " \t\n,."
ordering = "alphabetical"

[output]
default_format = "text"
"#;
        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_empty_separators() {
        let err = validate("[counting]\nseparators = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("separator alphabet"));
    }

    #[test]
    fn test_validate_unknown_format() {
        assert!(validate("[output]\ndefault_format = \"pdf\"\n").is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/wordfreq.toml"),
        };
        assert!(args.execute().is_err());
    }
}
