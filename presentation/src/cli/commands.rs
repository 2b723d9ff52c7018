//! CLI command definitions

use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use stencil_domain::Level;

/// CLI arguments for stencil
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about = "Emit a templated, leveled log record")]
#[command(long_about = r#"
Stencil renders one log record from a message template and writes it to
stdout, either as a colorized console line or as a JSON line.

Templates substitute record fields with @name and evaluate small
expressions with @{...}:
  "user @user logged in"
  "took @{ms + 'ms'} (@{ms == 0 ? 'cached' : 'fresh'})"

Configuration is loaded from (in priority order):
1. STENCIL_LOG_* environment variables (e.g. STENCIL_LOG_LEVEL=warn)
2. --config <path>     Explicit config file
3. ./stencil.toml      Project-level config
4. ~/.config/stencil/config.toml   Global config

Example:
  stencil info "Hello @name" -m name=World
  stencil error "request failed" --error error="connection reset" --module http
  STENCIL_LOG_JSON=true stencil warn "disk at @{pct}%" -m pct=93
"#)]
pub struct Cli {
    /// Severity level (emerg, alert, crit, error, warn, notice, info, debug)
    #[arg(value_name = "LEVEL", required_unless_present = "show_config_sources")]
    pub level: Option<Level>,

    /// Message template
    #[arg(value_name = "TEMPLATE", required_unless_present = "show_config_sources")]
    pub template: Option<String>,

    /// Metadata field; the value is parsed as JSON, else taken as a string
    /// (can be specified multiple times)
    #[arg(short, long = "meta", value_name = "KEY=VALUE", value_parser = parse_meta)]
    pub meta: Vec<(String, Value)>,

    /// Error field rendered as an error box / stack text
    /// (can be specified multiple times)
    #[arg(long = "error", value_name = "KEY=MESSAGE", value_parser = parse_error_field)]
    pub errors: Vec<(String, String)>,

    /// Module label attached to the record
    #[arg(long, value_name = "NAME")]
    pub module: Option<String>,

    /// Force JSON output regardless of configuration
    #[arg(long)]
    pub json: bool,

    /// Disable colors in console output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity of stencil's own diagnostics on stderr (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config_sources: bool,
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key, value))
}

/// Parse `key=value`; the value is JSON when it parses as JSON, else a string
pub fn parse_meta(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = split_pair(s)?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Parse `key=message` for an error field
pub fn parse_error_field(s: &str) -> Result<(String, String), String> {
    let (key, message) = split_pair(s)?;
    Ok((key.to_string(), message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_meta_json_and_string() {
        assert_eq!(parse_meta("n=42").unwrap(), ("n".to_string(), json!(42)));
        assert_eq!(parse_meta("ok=true").unwrap(), ("ok".to_string(), json!(true)));
        assert_eq!(
            parse_meta("user=ada lovelace").unwrap(),
            ("user".to_string(), json!("ada lovelace"))
        );
        assert_eq!(parse_meta("eq=a=b").unwrap(), ("eq".to_string(), json!("a=b")));
        assert_eq!(parse_meta("o={\"a\":1}").unwrap().1, json!({"a": 1}));
    }

    #[test]
    fn test_parse_meta_errors() {
        assert!(parse_meta("novalue").is_err());
        assert!(parse_meta("=x").is_err());
    }

    #[test]
    fn test_parse_full_command() {
        let cli = Cli::try_parse_from([
            "stencil",
            "WARN",
            "Hello @name",
            "-m",
            "name=World",
            "--error",
            "error=boom",
            "--module",
            "jobs",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.level, Some(Level::Warn));
        assert_eq!(cli.template.as_deref(), Some("Hello @name"));
        assert_eq!(cli.meta, vec![("name".to_string(), json!("World"))]);
        assert_eq!(cli.errors, vec![("error".to_string(), "boom".to_string())]);
        assert_eq!(cli.module.as_deref(), Some("jobs"));
        assert!(cli.json);
    }

    #[test]
    fn test_invalid_level_rejected() {
        assert!(Cli::try_parse_from(["stencil", "loud", "x"]).is_err());
    }

    #[test]
    fn test_show_config_sources_needs_no_positionals() {
        let cli = Cli::try_parse_from(["stencil", "--show-config-sources"]).unwrap();
        assert!(cli.show_config_sources);
        assert!(cli.level.is_none());
    }
}
