//! Pass orchestration

use crate::dedup::Deduplicator;
use crate::error::Result;
use crate::organize::Organizer;
use crate::prune;
use crate::types::{MaintenanceConfig, MaintenanceSummary};
use tunetidy_core::TrackProbe;
use tunetidy_metadata::TrackExtractor;

/// Runs the maintenance passes in their conventional order
///
/// Deduplication over the source tree, reorganization from source into
/// destination, then pruning over the cleanup tree. The ordering is a policy
/// of this orchestrator; each pass stays independently invocable through its
/// own engine.
pub struct MaintenancePipeline<P> {
    probe: P,
}

impl MaintenancePipeline<TrackExtractor> {
    /// Pipeline over the default lofty/ffmpeg probe backend
    pub fn with_default_probe() -> Self {
        Self::new(TrackExtractor::new())
    }
}

impl Default for MaintenancePipeline<TrackExtractor> {
    fn default() -> Self {
        Self::with_default_probe()
    }
}

impl<P: TrackProbe> MaintenancePipeline<P> {
    /// Pipeline over a caller-supplied probe backend
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Run dedup, reorganization and pruning over the configured trees
    ///
    /// # Errors
    /// Fails only when one of the configured roots is invalid; per-file
    /// failures are carried inside the summary's reports.
    pub fn run(&self, config: &MaintenanceConfig) -> Result<MaintenanceSummary> {
        tracing::info!("Finding and deleting duplicates under {}", config.source_dir.display());
        let dedup = Deduplicator::new(&self.probe).deduplicate(&config.source_dir)?;

        tracing::info!(
            "Restructuring {} by year into {}",
            config.source_dir.display(),
            config.dest_dir.display()
        );
        let organize =
            Organizer::new(&self.probe).reorganize_by_year(&config.source_dir, &config.dest_dir)?;

        tracing::info!("Pruning empty folders under {}", config.cleanup_dir.display());
        let prune = prune::prune_empty(&config.cleanup_dir)?;

        Ok(MaintenanceSummary {
            dedup,
            organize,
            prune,
        })
    }
}
