//! README Palette CLI
//!
//! Usage:
//!   readme-palette [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list      List palette entries
//!   add       Create an element and print it as JSON
//!   resolve   Resolve a URL template
//!
//! Options:
//!   -c, --catalog <FILE>   Catalog file (TOML format)
//!   -C, --config <FILE>    Palette config file (TOML format)
//!   -u, --username <NAME>  Value bound to {username}
//!   --log-level <LEVEL>    off, error, warn, info, debug, trace

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, error, info, LevelFilter};

use readme_palette::catalog::PaletteGroup;
use readme_palette::template::{self, Bindings};
use readme_palette::{Catalog, Element, Palette, PaletteConfig};

#[derive(Parser, Debug)]
#[command(name = "readme-palette")]
#[command(about = "Element palette for composing README documents")]
struct Cli {
    /// Catalog file (TOML format); the built-in catalog is used if not provided
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Palette config file (TOML format)
    #[arg(short = 'C', long, global = true)]
    config: Option<PathBuf>,

    /// GitHub username bound to the {username} placeholder
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List palette entries
    List {
        /// Only list one group
        #[arg(short, long)]
        group: Option<GroupArg>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an element of KIND and print it as JSON
    Add {
        /// Element kind, e.g. `table` or `github-stats-card`
        kind: String,
    },

    /// Resolve a URL template and report placeholder problems on stderr
    Resolve {
        /// Template text with {name} placeholders
        template: String,

        /// Placeholder binding as NAME=VALUE (repeatable)
        #[arg(short, long = "bind", value_parser = parse_binding)]
        bind: Vec<(String, String)>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GroupArg {
    Basic,
    Advanced,
}

fn parse_binding(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting readme-palette");
    debug!(cli:?; "Parsed arguments");

    // Load config, then let --username override it
    let mut config = match &cli.config {
        Some(path) => match PaletteConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => PaletteConfig::default(),
    };
    if let Some(username) = &cli.username {
        config = config.with_username(username.clone());
    }

    let catalog = match &cli.catalog {
        Some(path) => match Catalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Catalog::default(),
    };

    match cli.command {
        Command::List { group, json } => list(&catalog, group, json),
        Command::Add { kind } => add(Palette::with_config(catalog, &config), &kind),
        Command::Resolve { template: text, bind } => {
            let mut bindings = Bindings::from_config(&config);
            for (name, value) in bind {
                bindings = bindings.bind(name, value);
            }
            resolve(&text, &bindings);
        }
    }
}

fn list(catalog: &Catalog, group: Option<GroupArg>, json: bool) {
    let items: Vec<_> = catalog
        .listing()
        .into_iter()
        .filter(|item| match group {
            Some(GroupArg::Basic) => item.group == PaletteGroup::Basic,
            Some(GroupArg::Advanced) => item.group == PaletteGroup::Advanced,
            None => true,
        })
        .collect();

    if json {
        print_json(&items);
        return;
    }

    for item in &items {
        match &item.category {
            Some(category) => println!("{} {:<20} {:<28} [{}]", item.icon, item.label, item.kind, category),
            None => println!("{} {:<20} {}", item.icon, item.label, item.kind),
        }
    }
}

fn add(palette: Palette, kind: &str) {
    let mut added: Vec<Element> = Vec::new();
    if let Err(e) = palette.select(kind, &mut added) {
        error!(err:err = e; "Add failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    for element in &added {
        print_json(element);
    }
}

fn resolve(text: &str, bindings: &Bindings) {
    for warning in template::check(text, bindings) {
        eprint!("{}", warning.format(text, "template"));
    }
    println!("{}", template::resolve(text, bindings));
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binding() {
        assert_eq!(
            parse_binding("username=octocat"),
            Ok(("username".to_string(), "octocat".to_string()))
        );
        assert_eq!(
            parse_binding("theme=a=b"),
            Ok(("theme".to_string(), "a=b".to_string()))
        );
        assert!(parse_binding("=x").is_err());
        assert!(parse_binding("novalue").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from(["readme-palette", "--username", "octocat", "add", "github-trophy"]);
        assert_eq!(cli.username.as_deref(), Some("octocat"));
        assert!(matches!(cli.command, Command::Add { ref kind } if kind == "github-trophy"));

        let cli = Cli::parse_from([
            "readme-palette",
            "resolve",
            "https://x/{a}",
            "--bind",
            "a=1",
            "-b",
            "b=2",
        ]);
        match cli.command {
            Command::Resolve { template, bind } => {
                assert_eq!(template, "https://x/{a}");
                assert_eq!(bind.len(), 2);
            }
            other => panic!("expected resolve, got {:?}", other),
        }
    }
}
