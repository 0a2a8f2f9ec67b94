use anyhow::Result;
use arxiv_eprints::config::load_config;
use arxiv_eprints::models::subjects::{subcategories, subject_name, SUBJECTS};
use arxiv_eprints::models::{
    Eprint, EprintListOptions, QueryOptions, SearchOptions, SortBy, SortOrder,
};
use arxiv_eprints::{Client, ClientConfig, EprintsService};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Query e-prints from the arXiv export API
#[derive(Parser, Debug)]
#[command(name = "arxiv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query e-prints from the arXiv export API", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v, -vv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Plain text format
    Plain,
    /// JSON format (machine-readable)
    Json,
}

/// Sort field for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortField {
    /// Sort by relevance
    Relevance,
    /// Sort by last update
    Updated,
    /// Sort by submission date
    Submitted,
}

impl From<SortField> for SortBy {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Relevance => SortBy::Relevance,
            SortField::Updated => SortBy::LastUpdatedDate,
            SortField::Submitted => SortBy::SubmittedDate,
        }
    }
}

/// Sort order
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => SortOrder::Ascending,
            Order::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a single e-print by arXiv identifier
    #[command(alias = "g")]
    Get {
        /// arXiv identifier (e.g. 1706.03762 or hep-th/9901001)
        id: String,
    },

    /// Search e-prints
    #[command(alias = "s")]
    Search {
        /// Free-text search across all fields (overrides the field filters)
        #[arg(long)]
        all: Option<String>,

        /// Title filter
        #[arg(long, short)]
        title: Option<String>,

        /// Author filter
        #[arg(long, short)]
        author: Option<String>,

        /// Abstract filter
        #[arg(long = "abstract")]
        abstract_text: Option<String>,

        /// Journal reference filter
        #[arg(long)]
        journal: Option<String>,

        /// Category filter (e.g. cs.AI)
        #[arg(long, short)]
        category: Option<String>,

        /// Restrict to these identifiers (repeatable)
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Maximum number of results (0 uses the configured default)
        #[arg(long, short, default_value_t = 0)]
        max_results: i32,

        /// Offset of the first result
        #[arg(long, default_value_t = 0)]
        start: i32,

        /// Sort by field
        #[arg(long, value_enum, default_value_t = SortField::Relevance)]
        sort_by: SortField,

        /// Sort order
        #[arg(long, value_enum, default_value_t = Order::Desc)]
        order: Order,
    },

    /// List subject codes, or the subcategories of one subject
    Subjects {
        /// Subject code (e.g. cs)
        code: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("arxiv_eprints={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Using config file: {}", path.display());
            load_config(path)?
        }
        None => ClientConfig::from_env()?,
    };

    match cli.command {
        Commands::Get { id } => {
            let eprint = Client::with_config(config)?.eprints().get(&id).await?;
            print_eprints(std::slice::from_ref(&eprint), cli.output)?;
        }

        Commands::Search {
            all,
            title,
            author,
            abstract_text,
            journal,
            category,
            ids,
            max_results,
            start,
            sort_by,
            order,
        } => {
            let search = SearchOptions {
                title: title.unwrap_or_default(),
                author: author.unwrap_or_default(),
                abstract_text: abstract_text.unwrap_or_default(),
                journal_reference: journal.unwrap_or_default(),
                category: category.unwrap_or_default(),
                all: all.unwrap_or_default(),
            };

            if search.is_empty() && ids.is_empty() {
                anyhow::bail!("search needs at least one filter or --id");
            }

            let options = EprintListOptions {
                search: search.to_string(),
                id_list: ids,
                query: QueryOptions::new()
                    .max_results(max_results)
                    .start(start)
                    .sort_by(sort_by.into())
                    .sort_order(order.into()),
            };

            let eprints = Client::with_config(config)?.eprints().list(&options).await?;
            print_eprints(&eprints, cli.output)?;
        }

        Commands::Subjects { code } => print_subjects(code.as_deref(), cli.output)?,
    }

    Ok(())
}

fn print_eprints(eprints: &[Eprint], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(eprints)?),
        OutputFormat::Plain => {
            for (i, eprint) in eprints.iter().enumerate() {
                if i > 0 {
                    println!("\n---\n");
                }
                println!("[{}] {}", eprint.arxiv_id(), eprint.published.date_naive());
                println!("{}", eprint);
                if let Some(pdf) = eprint.pdf_url() {
                    println!("\nPDF: {}", pdf);
                }
            }
        }
    }
    Ok(())
}

fn print_subjects(code: Option<&str>, format: OutputFormat) -> Result<()> {
    match code {
        Some(code) => {
            let Some(subs) = subcategories(code) else {
                anyhow::bail!("unknown subject code: {}", code);
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(subs)?),
                OutputFormat::Plain => {
                    println!("{} ({})", subject_name(code).unwrap_or(code), code);
                    for sub in subs {
                        println!("  {}.{}", code, sub);
                    }
                }
            }
        }
        None => match format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = SUBJECTS
                    .iter()
                    .map(|(code, name)| (code.to_string(), serde_json::Value::from(*name)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            }
            OutputFormat::Plain => {
                for (code, name) in SUBJECTS {
                    println!("{:<8} {}", code, name);
                }
            }
        },
    }
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
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["arxiv", "get", "-vv", "--output", "json", "1706.03762"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Get { ref id } if id == "1706.03762"));

        let cli = Cli::try_parse_from(["arxiv", "subjects", "-q"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_search_flags() {
        let cli = Cli::try_parse_from([
            "arxiv",
            "search",
            "--author",
            "Hinton",
            "--id",
            "1",
            "--id",
            "2",
            "--sort-by",
            "submitted",
            "--order",
            "asc",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                author,
                ids,
                sort_by,
                order,
                ..
            } => {
                assert_eq!(author.as_deref(), Some("Hinton"));
                assert_eq!(ids, vec!["1", "2"]);
                assert_eq!(sort_by, SortField::Submitted);
                assert_eq!(order, Order::Asc);
            }
            other => panic!("Expected search command, got: {other:?}"),
        }
    }
}
