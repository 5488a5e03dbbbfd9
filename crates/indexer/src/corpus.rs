use crate::document::DocumentIndexer;
use crate::error::{IndexerError, Result};
use crate::source::VersionSource;
use crate::stats::IndexStats;
use docsearch_backend::{IndexSettings, SearchBackend};
use docsearch_markdown::rewrite_links;
use std::path::Path;
use std::time::Instant;

/// Documents that never enter the index.
const NO_INDEX: [&str; 4] = ["contributing", "documentation", "license", "releases"];

const MAX_CONCURRENT_READS: usize = 16;

/// Drives a full run: every version, every document, then the two-phase
/// publish (configure staging, swap it over production).
///
/// The run writes only to the staging slot; the production slot changes
/// through the final swap and through nothing else, so any failure
/// before it leaves the previously published corpus intact.
pub struct CorpusIndexer<B> {
    source: VersionSource,
    backend: B,
    production: String,
    staging: String,
}

impl<B: SearchBackend> CorpusIndexer<B> {
    #[must_use]
    pub fn new(root: impl AsRef<Path>, backend: B, index_name: impl Into<String>) -> Self {
        let production = index_name.into();
        let staging = format!("{production}_tmp");
        Self {
            source: VersionSource::new(root),
            backend,
            production,
            staging,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Index every version into the staging slot and atomically publish
    /// the result. No publish happens unless every document succeeded.
    pub async fn run(&self, versions: &[String]) -> Result<IndexStats> {
        let start = Instant::now();
        let mut stats = IndexStats::new();

        log::info!(
            "Indexing corpus at {} (versions={})",
            self.source.root().display(),
            versions.len()
        );

        self.backend
            .init_staging(&self.staging)
            .await
            .map_err(IndexerError::Write)?;

        for version in versions {
            self.index_version(version, &mut stats).await?;
            stats.versions += 1;
        }

        self.backend
            .apply_settings(&self.staging, &IndexSettings::document_defaults())
            .await
            .map_err(IndexerError::Settings)?;

        self.backend
            .publish(&self.staging, &self.production)
            .await
            .map_err(IndexerError::Publish)?;

        #[allow(clippy::cast_possible_truncation)]
        {
            stats.time_ms = start.elapsed().as_millis() as u64;
            if stats.time_ms == 0 {
                stats.time_ms = 1;
            }
        }
        log::info!("Indexing run complete: {stats:?}");

        Ok(stats)
    }

    async fn index_version(&self, version: &str, stats: &mut IndexStats) -> Result<()> {
        let indexer = DocumentIndexer::new(version);

        let mut eligible = Vec::new();
        for path in self.source.document_paths(version)? {
            let slug = VersionSource::slug(&path);
            if NO_INDEX.contains(&slug.as_str()) {
                log::debug!("Skipping non-indexable document {version}.{slug}");
                stats.add_skipped();
                continue;
            }
            eligible.push((slug, path));
        }

        // Reads fan out; transformation and staging writes stay on this
        // task so the staging slot keeps a single writer.
        for chunk in eligible.chunks(MAX_CONCURRENT_READS) {
            let mut tasks = Vec::with_capacity(chunk.len());
            for (slug, path) in chunk {
                let slug = slug.clone();
                let path = path.clone();
                tasks.push(tokio::spawn(async move {
                    let text = tokio::fs::read_to_string(&path).await?;
                    Ok::<_, std::io::Error>((slug, text))
                }));
            }

            for task in tasks {
                let (slug, text) = task
                    .await
                    .map_err(|e| IndexerError::Other(format!("Task panicked: {e}")))??;

                let markdown = rewrite_links(version, &text);
                let records = indexer.index_document(&slug, &markdown)?;
                self.backend
                    .write_batch(&self.staging, &records)
                    .await
                    .map_err(IndexerError::Write)?;

                stats.add_document(records.len());
                log::info!("Indexed {version}.{slug}");
            }
        }

        Ok(())
    }
}
