use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trendpost::trends::{self, FailurePolicy, GoogleTrendsRss};
use trendpost::{config, generate, naming, output};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Flags for commands that fetch trends.
#[derive(clap::Args, Clone, Default)]
struct TrendArgs {
    /// Fail instead of falling back to evergreen topics when the trends feed is unavailable
    #[arg(long)]
    strict: bool,
}

#[derive(Parser)]
#[command(name = "trendpost")]
#[command(about = "Generate blog posts from trending topics")]
#[command(long_about = "\
Generate blog posts from trending topics

Fetches today's trending searches and writes one Markdown post per topic into
the site's posts directory, with affiliate shopping links.

Site layout:

  site/
  ├── trendpost.toml      # Generator settings (optional)
  ├── affiliates.json     # Affiliate tag and link templates (optional)
  └── _posts/             # Generated posts: YYYY-MM-DD-slug.md

Environment:
  POSTS_PER_RUN   Number of posts to write (default 2)
  RUST_LOG        Log filter for diagnostics on stderr (default warn)

Run 'trendpost gen-config' to print a documented trendpost.toml.")]
#[command(version)]
struct Cli {
    /// Site root containing trendpost.toml, affiliates.json and the posts directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch trends and write posts (default)
    Generate(TrendArgs),
    /// Fetch trends and print them without writing anything
    Trends(TrendArgs),
    /// Print the slug and today's filename for a topic
    Slug {
        /// Topic text
        topic: String,
    },
    /// Print a stock trendpost.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Generate(TrendArgs::default())) {
        Command::Generate(args) => {
            let config = load_config(&cli.root, &args)?;
            let source = GoogleTrendsRss::new(&config.trends.feed_url, &config.trends.geo)?;
            let today = Utc::now().date_naive();
            let report = generate::generate(&cli.root, &config, &source, today)?;
            output::print_generate_output(&report, &cli.root);
        }
        Command::Trends(args) => {
            let config = load_config(&cli.root, &args)?;
            let source = GoogleTrendsRss::new(&config.trends.feed_url, &config.trends.geo)?;
            let fetch = trends::fetch_topics(&source, config.trends.on_failure)?;
            output::print_trends_output(&fetch);
        }
        Command::Slug { topic } => {
            let config = config::load_config(&cli.root)?;
            let slug = naming::slugify(&topic);
            let today = Utc::now().date_naive();
            println!("{}", slug);
            println!("{}", naming::post_filename(today, &slug, &config.post.extension));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the site config and apply environment and CLI overrides.
fn load_config(
    root: &std::path::Path,
    args: &TrendArgs,
) -> Result<config::GeneratorConfig, config::ConfigError> {
    let posts_per_run = std::env::var(config::POSTS_PER_RUN_ENV).ok();
    let mut config =
        config::load_config(root)?.with_posts_per_run_override(posts_per_run.as_deref())?;
    if args.strict {
        config.trends.on_failure = FailurePolicy::Abort;
    }
    Ok(config)
}

/// Diagnostics to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
