use anyhow::Result;
use clap::{Parser, Subcommand};
use docsearch_backend::JsonFileBackend;
use docsearch_indexer::CorpusIndexer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsearch", version, about = "Build and publish documentation search indices")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the search index for the given versions and publish it
    Index {
        /// Corpus root containing one directory per version
        #[arg(long)]
        root: PathBuf,

        /// Versions to index (comma-separated or repeated)
        #[arg(long, value_delimiter = ',', required = true)]
        versions: Vec<String>,

        /// Production index name
        #[arg(long, default_value = "docs")]
        index: String,

        /// Directory holding the backend's index files
        #[arg(long, default_value = ".docsearch/indexes")]
        store_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Index {
            root,
            versions,
            index,
            store_dir,
        } => {
            log::info!("Publishing to index {index} under {}", store_dir.display());
            let backend = JsonFileBackend::new(store_dir);
            let indexer = CorpusIndexer::new(root, backend, index);
            let stats = indexer.run(&versions).await?;
            println!(
                "Indexed {} documents ({} records) across {} versions in {}ms",
                stats.documents, stats.records, stats.versions, stats.time_ms
            );
        }
    }

    Ok(())
}
