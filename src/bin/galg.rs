//! CLI entry point for the `galg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_algorithms::cli::commands::{self, MstAlgorithm};
use graph_algorithms::cli::Label;
use graph_algorithms::{ComponentStrategy, GraphError};

#[derive(Parser)]
#[command(
    name = "galg",
    about = "Classical graph algorithms over JSON graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the mode and size of a graph
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Check whether a directed path exists between two vertices
    Reach {
        /// Path to the graph document
        file: PathBuf,
        /// Start vertex
        start: Label,
        /// End vertex
        end: Label,
    },
    /// List connected components
    Components {
        /// Path to the graph document
        file: PathBuf,
        /// Strongly connected components instead of weak ones
        #[arg(long)]
        strong: bool,
    },
    /// Build a minimum spanning tree
    Mst {
        /// Path to the graph document
        file: PathBuf,
        /// Algorithm: prim or kruskal
        #[arg(long, default_value = "kruskal")]
        algorithm: String,
        /// Root vertex for Prim (defaults to the smallest vertex)
        #[arg(long)]
        root: Option<Label>,
    },
    /// Find a shortest path between two vertices
    Path {
        /// Path to the graph document
        file: PathBuf,
        /// Source vertex
        source: Label,
        /// Destination vertex
        destination: Label,
    },
    /// In-order traversal of the binary tree formed by the edges
    Inorder {
        /// Path to the graph document
        file: PathBuf,
        /// Root of the traversal
        root: Label,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Reach { file, start, end } => commands::cmd_reach(&file, &start, &end, json),
        Commands::Components { file, strong } => {
            let strategy = if strong {
                ComponentStrategy::Strong
            } else {
                ComponentStrategy::Weak
            };
            commands::cmd_components(&file, strategy, json)
        }
        Commands::Mst {
            file,
            algorithm,
            root,
        } => {
            let algorithm = match MstAlgorithm::from_name(&algorithm) {
                Some(a) => a,
                None => {
                    eprintln!("Invalid algorithm: {}", algorithm);
                    process::exit(3);
                }
            };
            commands::cmd_mst(&file, algorithm, root, json)
        }
        Commands::Path {
            file,
            source,
            destination,
        } => commands::cmd_path(&file, &source, &destination, json),
        Commands::Inorder { file, root } => commands::cmd_inorder(&file, &root, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::InvalidInput(_) => 2,
            GraphError::UnknownVertex(_) | GraphError::IndexOutOfBounds { .. } => 4,
        };
        process::exit(code);
    }
}
