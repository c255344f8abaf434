//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use wordfreq_core::WordOrder;

use crate::output::OutputFormat;

pub mod count;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count words in text files and render a report
    Count(count::CountArgs),

    /// Write a commented configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available word orders
    Orders,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Count(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for the listing
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    out.push_str(&format!("{:<10} {}\n", format.as_str(), format.description()));
                }
            }
            ListCommands::Orders => {
                for order in WordOrder::ALL {
                    let description = match order {
                        WordOrder::FirstSeen => "order of first appearance in the input",
                        WordOrder::Alphabetical => "case-insensitive alphabetical order",
                    };
                    out.push_str(&format!("{:<14} {}\n", order.as_str(), description));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_list_formats_render() {
        let listing = ListCommands::Formats.render();
        for name in ["html", "text", "markdown", "json"] {
            assert!(listing.contains(name), "missing {name}");
        }
        assert_eq!(listing.lines().count(), 4);
    }

    #[test]
    fn test_list_orders_render() {
        let listing = ListCommands::Orders.render();
        assert!(listing.starts_with("first-seen"));
        assert!(listing.contains("alphabetical"));
    }

    #[test]
    fn test_list_commands_completeness() {
        match ListCommands::Formats {
            ListCommands::Formats => (),
            ListCommands::Orders => panic!("Should be Formats"),
        }

        match ListCommands::Orders {
            ListCommands::Formats => panic!("Should be Orders"),
            ListCommands::Orders => (),
        }
    }
}
