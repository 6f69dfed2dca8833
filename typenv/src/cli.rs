use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;

/// typenv - read environment variables as typed values
#[derive(Parser, Debug)]
#[command(name = "typenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the typed value of a variable as JSON
    Get {
        #[command(flatten)]
        var: VarArgs,

        /// Pretty-print the JSON output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Exit non-zero if the variable is set but cannot be converted
    Check {
        #[command(flatten)]
        var: VarArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct VarArgs {
    /// Variable name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Target type
    #[arg(long = "as", value_enum, default_value = "string")]
    pub kind: ValueKind,

    /// JSON literal returned verbatim when the variable is unset or blank
    #[arg(long, value_name = "JSON", value_parser = parse_json)]
    pub default: Option<Value>,

    /// Fallback variable names, consulted in order
    #[arg(long = "alias", value_name = "NAME")]
    pub aliases: Vec<String>,

    /// Element type for list and map values
    #[arg(long, value_enum, default_value = "string")]
    pub item: ScalarKind,

    /// Element delimiter for list and map values (default: ',')
    #[arg(long, value_name = "CHAR", conflicts_with = "whitespace")]
    pub delimiter: Option<char>,

    /// Split list and map values on whitespace
    #[arg(long, default_value = "false")]
    pub whitespace: bool,

    /// Key/value separator for map values (default: ':')
    #[arg(long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Replace the truthy token set (comma-separated)
    #[arg(long, value_name = "TOKENS", value_delimiter = ',')]
    pub truthy: Option<Vec<String>>,

    /// Replace the falsy token set (comma-separated)
    #[arg(long, value_name = "TOKENS", value_delimiter = ',')]
    pub falsy: Option<Vec<String>>,

    /// chrono strftime format for datetime values
    #[arg(long, value_name = "FMT")]
    pub format: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Int,
    Float,
    Bool,
    List,
    Map,
    Datetime,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Int,
    Float,
    Bool,
}

fn parse_json(s: &str) -> Result<Value, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid JSON default: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_with_options() {
        let cli = Cli::try_parse_from([
            "typenv", "get", "PORTS", "--as", "list", "--item", "int", "--delimiter", ";",
            "--default", "[80]", "--alias", "OLD_PORTS",
        ])
        .unwrap();
        match cli.command {
            Commands::Get { var, pretty } => {
                assert!(!pretty);
                assert_eq!(var.name, "PORTS");
                assert_eq!(var.kind, ValueKind::List);
                assert_eq!(var.item, ScalarKind::Int);
                assert_eq!(var.delimiter, Some(';'));
                assert_eq!(var.default, Some(serde_json::json!([80])));
                assert_eq!(var.aliases, vec!["OLD_PORTS"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_truthy_list() {
        let cli = Cli::try_parse_from([
            "typenv", "check", "FLAG", "--as", "bool", "--truthy", "on,enabled",
        ])
        .unwrap();
        let Commands::Check { var } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(
            var.truthy,
            Some(vec!["on".to_string(), "enabled".to_string()])
        );
        assert_eq!(var.falsy, None);
    }

    #[test]
    fn test_invalid_default_json_rejected() {
        let res = Cli::try_parse_from(["typenv", "get", "X", "--default", "{nope"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_delimiter_conflicts_with_whitespace() {
        let res = Cli::try_parse_from([
            "typenv", "get", "X", "--as", "list", "--delimiter", ";", "--whitespace",
        ]);
        assert!(res.is_err());
    }
}
