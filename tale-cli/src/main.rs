//! seed-tale CLI
//!
//! Convert BIP39 seed phrases to memorable stories, syllable strings and
//! offline Library of Babel pages.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tale_convert::{load_converter, BabelLocation, Error, Location, Scheme, TaleConfig};

#[derive(Parser)]
#[command(name = "seed-tale")]
#[command(about = "Turn BIP39 seed phrases into stories, syllables and Library of Babel pages")]
#[command(version)]
#[command(after_help = "Examples:
  seed-tale encode --story \"your twelve word seed phrase here\"
  seed-tale decode --story \"A purple elephant dances in Tokyo. ...\"
  seed-tale encode --format \"abandon abandon ... about\"
  seed-tale decode --story --seed \"A purple elephant ...\"")]
struct Cli {
    /// Config file (default: <config dir>/seed-tale/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a seed phrase to a syllable string or story
    Encode {
        /// 12-word BIP39 seed phrase (in quotes)
        seed: String,

        /// Output a story instead of syllables
        #[arg(long)]
        story: bool,

        /// Story scheme (overrides config)
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,

        /// Hyphenate the syllable string
        #[arg(short, long)]
        format: bool,

        /// Group syllables into pseudo-sentences
        #[arg(long, conflicts_with_all = ["story", "format"])]
        sentences: bool,

        /// Also print the Library of Babel URL
        #[arg(short, long)]
        url: bool,
    },

    /// Convert a story or syllable string back to a URL, seed phrase or page
    Decode {
        /// The story or syllable string
        input: String,

        /// Input is a story
        #[arg(long)]
        story: bool,

        /// Story scheme (overrides config)
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,

        /// Print the seed phrase instead of the URL
        #[arg(short, long, conflicts_with_all = ["page", "json"])]
        seed: bool,

        /// Show the library location and page content
        #[arg(short, long)]
        page: bool,

        /// Print the library location as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the library address of any text
    Locate {
        text: String,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// Show the page stored under a hex name (location recovered from the
    /// hex name unless given)
    Page {
        hex: String,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    /// 4 sentences: adjective, noun, verb, location
    Classic,
    /// 2 sentences of 8 slots
    Fable,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Classic => Scheme::Classic,
            SchemeArg::Fable => Scheme::Fable,
        }
    }
}

#[derive(Args, Clone, Copy, Default)]
struct LocationArgs {
    /// Wall (1-4)
    #[arg(long)]
    wall: Option<u32>,

    /// Shelf (1-5)
    #[arg(long)]
    shelf: Option<u32>,

    /// Volume (1-32)
    #[arg(long)]
    volume: Option<u32>,

    /// Page (1-410)
    #[arg(long)]
    page: Option<u32>,
}

impl LocationArgs {
    fn is_empty(&self) -> bool {
        self.wall.is_none() && self.shelf.is_none() && self.volume.is_none() && self.page.is_none()
    }

    /// Override fields of `base` with the given flags
    fn apply(&self, base: Location) -> Result<Location> {
        let location = Location::new(
            self.wall.unwrap_or(base.wall),
            self.shelf.unwrap_or(base.shelf),
            self.volume.unwrap_or(base.volume),
            self.page.unwrap_or(base.page),
        )?;
        Ok(location)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    // --init creates the file, so there is nothing to load yet
    if let Commands::Config { init: true } = cli.command {
        return cmd_config(TaleConfig::default(), cli.config.as_deref(), true);
    }

    let config = TaleConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    tracing::debug!(scheme = %config.scheme, location = %config.location, "config ready");

    match cli.command {
        Commands::Encode { seed, story, scheme, format, sentences, url } => {
            cmd_encode(with_scheme(config, scheme), &seed, story, format, sentences, url)
        }
        Commands::Decode { input, story, scheme, seed, page, json } => {
            cmd_decode(with_scheme(config, scheme), &input, story, seed, page, json)
        }
        Commands::Locate { text, location } => cmd_locate(config, &text, location),
        Commands::Page { hex, location } => cmd_page(config, &hex, location),
        Commands::Config { init } => cmd_config(config, cli.config.as_deref(), init),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "tale=debug" } else { "tale=info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(default.parse()?))
        .init();
    Ok(())
}

fn with_scheme(mut config: TaleConfig, scheme: Option<SchemeArg>) -> TaleConfig {
    if let Some(scheme) = scheme {
        config.scheme = scheme.into();
    }
    config
}

/// Point the user at stories when a seed has no syllable form
fn syllable_error(e: Error) -> anyhow::Error {
    match e {
        Error::AmbiguousSyllables => {
            anyhow::anyhow!("{}. This seed can only be written as a story (--story).", e)
        }
        other => other.into(),
    }
}

fn cmd_encode(
    config: TaleConfig,
    seed: &str,
    story: bool,
    format: bool,
    sentences: bool,
    url: bool,
) -> Result<()> {
    let tale = load_converter(config)?;

    if story {
        println!("{}", tale.seed_to_story(seed)?);
    } else if sentences {
        println!("{}", tale.format_as_sentences(seed).map_err(syllable_error)?);
    } else {
        let babel = tale.seed_to_babel(seed).map_err(syllable_error)?;
        if format {
            println!("{}", tale.format_babel_string(&babel));
        } else {
            println!("{}", babel);
        }
    }

    if url {
        println!("\nLibrary of Babel URL:\n{}", tale.seed_to_url(seed)?);
    }
    Ok(())
}

fn cmd_decode(
    config: TaleConfig,
    input: &str,
    story: bool,
    seed: bool,
    page: bool,
    json: bool,
) -> Result<()> {
    let tale = load_converter(config)?;

    // Syllable input may carry display hyphens, spaces and periods
    let babel = tale_syllable::clean(input);

    if seed {
        let phrase = if story {
            tale.story_to_seed(input)?
        } else {
            tale.babel_to_seed(&babel)?
        };
        println!("{}", phrase);
        return Ok(());
    }

    if !page && !json {
        let url = if story {
            tale.story_to_url(input)?
        } else {
            tale.babel_to_url(&babel)?
        };
        println!("{}", url);
        return Ok(());
    }

    let location = if story {
        tale.get_babel_location(input)?
    } else {
        tale.babel_location(&babel)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&location)?);
        return Ok(());
    }

    print_location(&location);
    println!("\n{}", "=".repeat(80));
    println!("PAGE CONTENT (3200 characters, 80×40):");
    println!("{}", "=".repeat(80));
    println!("{}", tale.seed_to_page(&location.seed_phrase)?);
    Ok(())
}

fn print_location(location: &BabelLocation) {
    println!("Seed phrase: {}", location.seed_phrase);
    println!("\nLibrary of Babel Location:");
    println!("  Hex: {}...", preview(&location.hex_name));
    println!(
        "  Wall: {}, Shelf: {}, Volume: {}, Page: {}",
        location.wall, location.shelf, location.volume, location.page
    );
    println!("\nURL: {}", location.url);
}

fn preview(hex_name: &str) -> &str {
    &hex_name[..hex_name.len().min(50)]
}

fn cmd_locate(mut config: TaleConfig, text: &str, location: LocationArgs) -> Result<()> {
    config.location = location.apply(config.location)?;
    let tale = load_converter(config)?;
    let address = tale.locate(text)?;

    println!("Hex: {}... ({} chars)", preview(&address.hex_name), address.hex_name.len());
    println!("Location: {}", address.location);
    println!("URL: {}", address.url(&tale.config().base_url));
    Ok(())
}

fn cmd_page(config: TaleConfig, hex: &str, location: LocationArgs) -> Result<()> {
    let at = if location.is_empty() {
        None
    } else {
        Some(location.apply(config.location)?)
    };
    let tale = load_converter(config)?;
    println!("{}", tale.read_page(hex, at)?);
    Ok(())
}

fn cmd_config(config: TaleConfig, explicit: Option<&Path>, init: bool) -> Result<()> {
    if !init {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => TaleConfig::default_path().context("No config directory on this system")?,
    };
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    TaleConfig::default().save(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decode() {
        let cli = Cli::parse_from(["seed-tale", "decode", "--story", "--scheme", "fable", "--json", "x"]);
        match cli.command {
            Commands::Decode { story, scheme, json, seed, .. } => {
                assert!(story && json && !seed);
                assert!(matches!(scheme, Some(SchemeArg::Fable)));
            }
            _ => panic!("expected decode"),
        }
        assert!(Cli::try_parse_from(["seed-tale", "decode", "--seed", "--page", "x"]).is_err());
    }

    #[test]
    fn test_location_flags() {
        let args = LocationArgs {
            volume: Some(12),
            ..LocationArgs::default()
        };
        assert!(!args.is_empty());
        assert_eq!(args.apply(Location::default()).unwrap(), Location::new(1, 1, 12, 1).unwrap());

        let bad = LocationArgs {
            wall: Some(9),
            ..LocationArgs::default()
        };
        assert!(bad.apply(Location::default()).is_err());
        assert!(LocationArgs::default().is_empty());
    }

    #[test]
    fn test_page_flags_parse() {
        let cli = Cli::parse_from(["seed-tale", "page", "abc", "--wall", "2", "--page", "7"]);
        match cli.command {
            Commands::Page { location, .. } => {
                assert_eq!(location.wall, Some(2));
                assert_eq!(location.page, Some(7));
            }
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_config_init_writes_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let cli = Cli::parse_from(["seed-tale", "--config", path.to_str().unwrap(), "config", "--init"]);
        assert!(matches!(cli.command, Commands::Config { init: true }));
        assert!(TaleConfig::load(cli.config.as_deref()).is_err());

        cmd_config(TaleConfig::default(), Some(&path), true).unwrap();
        assert_eq!(TaleConfig::from_file(&path).unwrap(), TaleConfig::default());

        let err = cmd_config(TaleConfig::default(), Some(&path), true).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
