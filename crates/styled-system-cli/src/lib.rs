//! The `styled` command line tool.
//!
//! Builds a [`SystemContext`] from the base preset (unless `--no-preset`)
//! with an optional project config merged on top, then prints one artifact:
//! token variables, global CSS, a resolved style specification or a
//! resolved theme recipe.
//!
//! ```text
//! styled tokens
//! styled --config theme.yaml global --format yaml
//! styled css '{ bg: red.500, _hover: { bg: red.600 } }' --selector .btn
//! styled recipe fieldError --props '{}' --format json
//! ```
//!
//! Specifications and props are parsed as YAML, so plain JSON works too.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde_json::Value;
use styled_system::{to_css_string, StyleObject, SystemConfig, SystemContext};

#[derive(Debug, Parser)]
#[command(name = "styled", version)]
#[command(about = "Resolve style specifications against a token-based design system")]
pub struct Cli {
    /// Project config (.yaml, .yml or .json) merged onto the preset
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from an empty config instead of the base preset
    #[arg(long, global = true)]
    pub no_preset: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Css)]
    pub format: Format,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
    Css,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Token variables for every scope
    Tokens,
    /// Keyframes followed by the global styles
    Global,
    /// Resolve a style specification
    Css {
        /// The specification, as a YAML or JSON map
        spec: String,

        /// Selector the resolved declarations are emitted under
        #[arg(long, default_value = "")]
        selector: String,
    },
    /// Resolve a theme recipe or slot recipe
    Recipe {
        name: String,

        /// Variant selection, as a YAML or JSON map
        #[arg(long)]
        props: Option<String>,
    },
}

impl Cli {
    /// Log level implied by `-v`; `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// The preset (or an empty config) with the `--config` file merged on top.
pub fn load_config(cli: &Cli) -> Result<SystemConfig> {
    let mut config = if cli.no_preset {
        SystemConfig::new()
    } else {
        styled_system_preset::preset().context("failed to load the base preset")?
    };

    if let Some(path) = &cli.config {
        let user = SystemConfig::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?;
        config = config.merge(user);
    }

    Ok(config)
}

/// Runs one command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let system = SystemContext::new(load_config(cli)?).context("failed to build the style system")?;

    match &cli.command {
        Command::Tokens => render(&system.get_token_css(), "", cli.format),
        Command::Global => render(&system.get_global_css(), "", cli.format),
        Command::Css { spec, selector } => {
            let spec = parse_map(spec).context("invalid style specification")?;
            render(&system.css(&spec), selector, cli.format)
        }
        Command::Recipe { name, props } => {
            let props = match props {
                Some(props) => parse_map(props).context("invalid recipe props")?,
                None => StyleObject::new(),
            };
            let selector = format!(".{}", name);

            if let Some(recipe) = system.recipe(name) {
                return render(&recipe.resolve(&props), &selector, cli.format);
            }

            if let Some(recipe) = system.slot_recipe(name) {
                let slots = recipe.resolve(&props);
                if cli.format == Format::Css {
                    return Ok(slots
                        .iter()
                        .map(|(slot, style)| {
                            to_css_string(style, &format!("{}__{}", selector, slot))
                        })
                        .collect());
                }
                let slots: StyleObject = slots
                    .into_iter()
                    .map(|(slot, style)| (slot, Value::Object(style)))
                    .collect();
                return render(&slots, "", cli.format);
            }

            let known: Vec<&str> = system.recipe_names().collect();
            if known.is_empty() {
                bail!("unknown recipe '{}' (the theme defines no recipes)", name);
            }
            bail!("unknown recipe '{}' (available: {})", name, known.join(", "))
        }
    }
}

fn render(style: &StyleObject, selector: &str, format: Format) -> Result<String> {
    Ok(match format {
        Format::Css => to_css_string(style, selector),
        Format::Json => {
            let mut out = serde_json::to_string_pretty(style)?;
            out.push('\n');
            out
        }
        Format::Yaml => serde_yaml::to_string(style)?,
    })
}

fn parse_map(source: &str) -> Result<StyleObject> {
    match serde_yaml::from_str::<Value>(source)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(StyleObject::new()),
        other => bail!("expected a map, got {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map_accepts_json_and_yaml() {
        let json = parse_map(r#"{"bg": "red.500", "_hover": {"bg": "red.600"}}"#).unwrap();
        let yaml = parse_map("bg: red.500\n_hover:\n  bg: red.600\n").unwrap();
        assert_eq!(json, yaml);
        assert!(parse_map("~").unwrap().is_empty());
    }

    #[test]
    fn test_parse_map_rejects_scalars() {
        let err = parse_map("[1, 2]").unwrap_err();
        assert!(err.to_string().starts_with("expected a map"));
    }

    #[test]
    fn test_verbosity_levels() {
        fn level(args: &[&str]) -> LevelFilter {
            let mut full = vec!["styled"];
            full.extend_from_slice(args);
            full.push("tokens");
            Cli::try_parse_from(full).unwrap().log_level()
        }
        assert_eq!(level(&[]), LevelFilter::Warn);
        assert_eq!(level(&["-v"]), LevelFilter::Info);
        assert_eq!(level(&["-vv"]), LevelFilter::Debug);
        assert_eq!(level(&["-vvvv"]), LevelFilter::Trace);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["styled", "css", "{}", "--format", "json", "--no-preset"])
            .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert!(cli.no_preset);
        assert!(matches!(cli.command, Command::Css { ref selector, .. } if selector.is_empty()));
    }
}
