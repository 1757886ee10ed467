//! CLI entry point for folio.
//!
//! Lists, filters and exports the portfolio's projects from the terminal
//! using the same filter engine as the web page.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use core_types::{FilterState, Project};
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use view_model::{CardImage, NO_RESULTS_MESSAGE, PageView, ProjectCard, ProjectListing};

/// folio: browse the portfolio projects
#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON project list to use instead of the builtin one
    #[arg(long, global = true, env = "FOLIO_DATA")]
    data: Option<PathBuf>,

    /// Log filter (e.g. "debug", "folio=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects matching a search and tag filters
    List {
        /// Case-insensitive text to find in title, description or tags
        #[arg(short, long)]
        search: Option<String>,

        /// Tag filter; repeat to require several tags
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Show descriptions and links
        #[arg(short, long)]
        verbose: bool,

        /// Print the page view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single project by ID
    Show {
        /// Project ID
        id: u32,
    },

    /// List every tag, marking active ones with '*'
    Tags {
        /// Tags to mark as active
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Export the project list as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let projects = load_projects(cli.data.as_deref())?;

    match cli.command {
        Commands::List {
            search,
            tags,
            verbose,
            json,
        } => {
            let state = build_state(search.as_deref(), &tags);
            let view = PageView::build(&projects, &state);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", format_listing(&view.listing, verbose)?);
            }
        }
        Commands::Show { id } => {
            let project = portfolio_projects::get_project_by_id(&projects, id)
                .with_context(|| format!("Project not found: {id}"))?;
            print!("{}", format_card(&ProjectCard::from(project), true)?);
        }
        Commands::Tags { tags } => {
            let state = build_state(None, &tags);
            print!("{}", format_tags(&PageView::build(&projects, &state)));
        }
        Commands::Export { output } => {
            export_projects(&projects, output.as_deref())?;
        }
    }

    Ok(())
}

fn load_projects(data: Option<&Path>) -> Result<Vec<Project>> {
    match data {
        Some(path) => portfolio_projects::load_projects_from_file(path)
            .with_context(|| format!("Failed to load projects from {}", path.display())),
        None => {
            let projects = portfolio_projects::load_builtin_projects();
            tracing::debug!(count = projects.len(), "using builtin projects");
            Ok(projects)
        }
    }
}

/// Activate every tag and apply the search; repeating a tag keeps it active.
fn build_state(search: Option<&str>, tags: &[String]) -> FilterState {
    let state = tags
        .iter()
        .fold(FilterState::new(), |state, tag| state.with_filter(tag));
    let state = match search {
        Some(query) => state.with_query(query),
        None => state,
    };
    tracing::debug!(query = state.query(), filters = ?tags, "filter state");
    state
}

fn format_listing(listing: &ProjectListing, verbose: bool) -> Result<String, fmt::Error> {
    match listing {
        ProjectListing::NoResults => Ok(format!("{NO_RESULTS_MESSAGE}\n")),
        ProjectListing::Cards(cards) => {
            let mut out = format!("Projects ({} shown):\n\n", cards.len());
            for card in cards {
                out.push_str(&format_card(card, verbose)?);
            }
            Ok(out)
        }
    }
}

fn format_card(card: &ProjectCard, verbose: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let tags = card.tags.join(", ");

    if !verbose {
        writeln!(out, "  {:>3} | {} [{}]", card.id, card.title, tags)?;
        return Ok(out);
    }

    writeln!(out, "=== {} (#{}) ===", card.title, card.id)?;
    writeln!(out, "Tags: {tags}")?;
    match &card.image {
        CardImage::Image { src, .. } => writeln!(out, "Image: {src}")?,
        CardImage::Placeholder { glyph } => writeln!(out, "Image: {glyph}")?,
    }
    writeln!(out, "{}", card.description)?;
    writeln!(out, "Demo: {}", card.demo_url)?;
    writeln!(out, "Code: {}", card.repo_url)?;
    out.push('\n');
    Ok(out)
}

fn format_tags(view: &PageView) -> String {
    view.tags
        .iter()
        .map(|tag| {
            let marker = if tag.active { '*' } else { ' ' };
            format!("{marker} {}\n", tag.label)
        })
        .collect()
}

fn export_projects(projects: &[Project], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(file, projects)?;
            println!("Exported {} projects to {}", projects.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(projects)?),
    }
    Ok(())
}
