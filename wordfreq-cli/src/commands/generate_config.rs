//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::count::OrderArg;
use crate::output::OutputFormat;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Word order written into the template
    #[arg(long, value_enum, default_value = "first-seen")]
    pub order: OrderArg,

    /// Output format written into the template
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the separators and defaults to taste");
        println!("2. Validate your configuration:");
        println!("   wordfreq validate --config {}", self.output.display());
        println!("3. Use it for counting:");
        println!(
            "   wordfreq count -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let order = wordfreq_core::WordOrder::from(self.order);
        format!(
            r#"# wordfreq configuration

[counting]
# Characters that separate words. Everything else is part of a word.
# TOML escapes apply: \t is a tab, \n a newline, \" a double quote.
# Default: space, tab, newline, comma, period, semicolon, colon, hyphen.
separators = " \t\n,.;:-"

# Report order: "first-seen" keeps the order words first appear in,
# "alphabetical" sorts them ignoring case.
ordering = "{}"

[output]
# One of: html, text, markdown, json
default_format = "{}"

# Pretty-print JSON output
pretty_json = true
"#,
            order.as_str(),
            self.format.as_str()
        )
    }
}
