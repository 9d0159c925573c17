// promokit - generate marketing content for an artist profile

use anyhow::{Context, bail};
use clap::Parser;
use crossterm::style::Stylize;
use promokit::orchestration::{
    ArtistProfile, ContentSource, GeneratorConfig, MarketingRole, Orchestrator,
};
use promokit::render::{create_markdown_skin, render_markdown};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const CREDENTIAL_ENV: &str = "OPENAI_API_KEY";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Artist profile as a JSON file (name, genre, targetAudience, socialPresence)
    #[arg(long, conflicts_with_all = ["name", "genre", "audience", "social"])]
    profile: Option<PathBuf>,

    /// Artist or band name
    #[arg(long)]
    name: Option<String>,

    /// Musical genre
    #[arg(long)]
    genre: Option<String>,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Current social presence, e.g. "5k Instagram followers"
    #[arg(long)]
    social: Option<String>,

    /// Path to config file (default: ./.promokit.json, then ~/.promokit.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Marketing role framing the instruction (overrides config)
    #[arg(long)]
    role: Option<MarketingRole>,

    /// API key (overrides OPENAI_API_KEY and config)
    #[arg(long)]
    api_key: Option<String>,

    /// Use template content without calling the remote generator
    #[arg(long)]
    offline: bool,

    /// Print the bundle as JSON instead of rendered markdown
    #[arg(long)]
    json: bool,

    /// Write an example config file to this path and exit
    #[arg(long)]
    init_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("promokit=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.init_config {
        GeneratorConfig::write_example(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Created example config at: {}", path.display());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GeneratorConfig::discover().context("Failed to load config")?,
    };
    if let Some(role) = args.role {
        config.role = role;
    }

    let profile = load_profile(&args)?;
    profile.validate().context("Invalid artist profile")?;

    let credential = if args.offline {
        None
    } else {
        resolve_credential(args.api_key.clone(), config.api_key.clone())
    };

    let orchestrator = Orchestrator::with_config(config)?;
    let generated = orchestrator
        .generate_with_source(&profile, credential.as_deref())
        .await;

    let source = match generated.source {
        ContentSource::Remote => generated.source.as_str().green(),
        ContentSource::Fallback => generated.source.as_str().yellow(),
    };
    eprintln!("{} {}", "Content source:".bold(), source);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&generated.bundle)?);
    } else {
        let skin = create_markdown_skin();
        skin.print_text(&render_markdown(&profile, &generated));
    }

    Ok(())
}

fn load_profile(args: &Args) -> anyhow::Result<ArtistProfile> {
    if let Some(path) = &args.profile {
        return read_profile(path);
    }

    let (Some(name), Some(genre), Some(audience)) = (&args.name, &args.genre, &args.audience) else {
        bail!("Provide --profile <file> or all of --name, --genre and --audience");
    };

    let mut profile = ArtistProfile::new(name, genre, audience);
    if let Some(social) = &args.social {
        profile = profile.with_social_presence(social);
    }
    Ok(profile)
}

fn read_profile(path: &Path) -> anyhow::Result<ArtistProfile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;
    Ok(profile)
}

/// First non-blank credential from the flag, the environment, then config
fn resolve_credential(flag: Option<String>, configured: Option<String>) -> Option<String> {
    flag.into_iter()
        .chain(std::env::var(CREDENTIAL_ENV).ok())
        .chain(configured)
        .find(|key| !key.trim().is_empty())
}
