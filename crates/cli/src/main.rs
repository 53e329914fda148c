use anyhow::{anyhow, Context, Result};
use catalog::{CatalogEntry, CatalogIndex, Difficulty, FacetId, FacetKind, Format};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use hub::{ContentHub, PageContext, PageState, PageView};
use pipeline::{Choice, FilterSet, SortKey};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Content Hub - browse the enablement catalog
#[derive(Parser)]
#[command(name = "content-hub")]
#[command(about = "Filter, sort and page through the content hub catalog", long_about = None)]
struct Cli {
    /// Directory of catalog JSON files (one per collection)
    #[arg(short, long, default_value = "data/catalog")]
    catalog_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of filtered entries
    Browse(BrowseArgs),

    /// List available facet values with entry counts
    Facets,

    /// Show a single entry
    Show {
        /// Entry id
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
struct BrowseArgs {
    /// Page configuration JSON (defaults, layout, page size, sort, featured band)
    #[arg(long)]
    page_config: Option<PathBuf>,

    /// Product id (repeatable)
    #[arg(long = "product")]
    products: Vec<FacetId>,

    /// Team id (repeatable)
    #[arg(long = "team")]
    teams: Vec<FacetId>,

    /// Topic id (repeatable)
    #[arg(long = "topic")]
    topics: Vec<FacetId>,

    /// Journey stage id (repeatable)
    #[arg(long = "stage")]
    journey_stages: Vec<FacetId>,

    /// Industry id (repeatable)
    #[arg(long = "industry")]
    industries: Vec<FacetId>,

    /// Audience id (repeatable)
    #[arg(long = "audience")]
    audiences: Vec<FacetId>,

    /// Content type id (repeatable)
    #[arg(long = "content-type")]
    content_types: Vec<FacetId>,

    /// Enablement category id (repeatable)
    #[arg(long = "category")]
    categories: Vec<FacetId>,

    /// Format, or "all"
    #[arg(long)]
    format: Option<Choice<Format>>,

    /// Difficulty, or "all"
    #[arg(long)]
    difficulty: Option<Choice<Difficulty>>,

    /// Competitor id, or "all"
    #[arg(long)]
    competitor: Option<Choice<FacetId>>,

    /// Case-insensitive text to look for in titles and descriptions
    #[arg(long)]
    search: Option<String>,

    /// date-desc, date-asc, title, priority or duration (overrides the page config)
    #[arg(long)]
    sort: Option<SortKey>,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    page: usize,

    /// Entries per page (overrides the page config)
    #[arg(long)]
    page_size: Option<usize>,
}

impl BrowseArgs {
    /// The user's filters, built fresh from the command line
    fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new()
            .with_ids(FacetKind::Products, self.products.iter().cloned())
            .with_ids(FacetKind::Teams, self.teams.iter().cloned())
            .with_ids(FacetKind::Topics, self.topics.iter().cloned())
            .with_ids(FacetKind::JourneyStages, self.journey_stages.iter().cloned())
            .with_ids(FacetKind::Industries, self.industries.iter().cloned())
            .with_ids(FacetKind::Audiences, self.audiences.iter().cloned())
            .with_ids(FacetKind::ContentTypes, self.content_types.iter().cloned())
            .with_ids(FacetKind::EnablementCategory, self.categories.iter().cloned());
        filters.format = self.format.clone();
        filters.difficulty = self.difficulty.clone();
        filters.competitor = self.competitor.clone();
        filters.search = self.search.clone();
        filters
    }

    fn page_context(&self) -> Result<PageContext> {
        let mut ctx = match &self.page_config {
            Some(path) => PageContext::load(path)?,
            None => PageContext::default(),
        };
        if let Some(sort) = self.sort {
            ctx.sort = sort;
        }
        if let Some(page_size) = self.page_size {
            ctx.page_size = page_size;
        }
        Ok(ctx)
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = Arc::new(
        CatalogIndex::load_from_dir(&cli.catalog_dir)
            .with_context(|| format!("Failed to load catalog from {}", cli.catalog_dir.display()))?,
    );
    println!(
        "{} Loaded {} entries in {:?}",
        "✓".green(),
        index.len(),
        start.elapsed()
    );

    let hub = ContentHub::new(index);

    match cli.command {
        Commands::Browse(args) => handle_browse(&hub, &args)?,
        Commands::Facets => handle_facets(&hub),
        Commands::Show { id } => handle_show(&hub, &id)?,
    }

    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(hub: &ContentHub, args: &BrowseArgs) -> Result<()> {
    let ctx = args.page_context()?;
    let state = PageState::new(args.filters()).with_page(args.page);

    let view = hub.render(&ctx, &state);
    print_view(&view);
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(hub: &ContentHub) {
    let taxonomy = hub.taxonomy();

    for kind in FacetKind::ALL {
        let values = taxonomy.values(kind);
        if values.is_empty() {
            continue;
        }
        println!("{} ({})", kind.label().bold().blue(), kind.key());
        for value in values {
            println!(
                "  {} {} {}",
                "•".green(),
                value.facet.name,
                format!("[{}] ({})", value.facet.id, value.count).dimmed()
            );
        }
    }

    if !taxonomy.competitors().is_empty() {
        println!("{} (competitor)", "Competitors".bold().blue());
        for value in taxonomy.competitors() {
            println!(
                "  {} {} {}",
                "•".green(),
                value.facet.name,
                format!("[{}] ({})", value.facet.id, value.count).dimmed()
            );
        }
    }
}

/// Handle the 'show' command
fn handle_show(hub: &ContentHub, id: &str) -> Result<()> {
    let entry = hub
        .index()
        .get(id)
        .ok_or_else(|| anyhow!("Entry {} not found", id))?;

    println!("{}", entry.title.bold().blue());
    println!("{}Id: {}", "• ".green(), entry.id);
    println!("{}Kind: {:?}", "• ".green(), entry.kind);
    if !entry.description.is_empty() {
        println!("{}Description: {}", "• ".green(), entry.description);
    }
    for kind in FacetKind::ALL {
        let refs = entry.facet_refs(kind);
        if !refs.is_empty() {
            let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
            println!("{}{}: {}", "• ".cyan(), kind.label(), names.join(", "));
        }
    }
    if let Some(competitor) = &entry.competitor {
        println!("{}Competitor: {}", "• ".cyan(), competitor.name);
    }
    if let Some(format) = entry.format {
        println!("{}Format: {}", "• ".cyan(), format);
    }
    if let Some(difficulty) = entry.difficulty {
        println!("{}Difficulty: {}", "• ".cyan(), difficulty);
    }
    if let Some(duration) = entry.duration {
        println!("{}Duration: {} min", "• ".cyan(), duration);
    }
    if let Some(date) = entry.publish_date {
        println!("{}Published: {}", "• ".cyan(), date.format("%Y-%m-%d"));
    }
    Ok(())
}

/// Print the featured band, the current page and the active filters
fn print_view(view: &PageView<'_>) {
    if !view.featured.is_empty() {
        println!("{}", "Featured".bold().yellow());
        for entry in &view.featured {
            println!("  {} {}", "★".yellow(), describe_entry(entry));
        }
        println!();
    }

    println!(
        "{}",
        format!("{} matching entries ({:?} layout)", view.total_matches, view.layout)
            .bold()
            .blue()
    );
    if view.page.items.is_empty() {
        println!("  {}", "No entries on this page.".dimmed());
    }
    for (offset, entry) in view.page.items.iter().enumerate() {
        let rank = view.page.start_index + offset + 1;
        println!("{}. {}", rank.to_string().green(), describe_entry(entry));
    }
    println!(
        "{}",
        format!("Page {} of {}", view.page.page_number, view.page.total_pages).dimmed()
    );

    if view.active_count > 0 {
        let chips: Vec<String> = view
            .active_filters
            .iter()
            .map(|chip| format!("{}: {}", chip.key, chip.label))
            .collect();
        println!(
            "{} {}",
            format!("{} active filter(s):", view.active_count).cyan(),
            chips.join(" | ")
        );
    }
}

fn describe_entry(entry: &CatalogEntry) -> String {
    let mut parts = vec![entry.title.clone()];
    if let Some(format) = entry.format {
        parts.push(format!("[{}]", format));
    }
    if let Some(date) = entry.publish_date {
        parts.push(date.format("%Y-%m-%d").to_string());
    }
    if let Some(duration) = entry.duration {
        parts.push(format!("{} min", duration));
    }
    parts.join(" ")
}
