//! Stage Use Case
//!
//! Orchestrates a stage run:
//! 1. Ensure the destination directories
//! 2. For each asset entry, copy the library if its source is a regular file
//! 3. Report one event per directory and per asset, then a completion event
//!
//! A missing library never stops the run. A directory or copy failure does.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{FileSystem, NoopEventSink, StageEvent, StageEventSink};
use crate::error::{StagerError, StagerResult};

use super::options::StageOptions;
use super::result::{AssetOutcome, AssetStatus, DirectoryOutcome, StageResult};

/// Stage use case - copies vendored libraries into the static tree
pub struct StageUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> StageUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Execute the stage run silently
    pub fn execute(&self, options: &StageOptions) -> StagerResult<StageResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the stage run, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &StageOptions,
        events: Arc<dyn StageEventSink>,
    ) -> StagerResult<StageResult> {
        let mut result = StageResult::new();

        events.on_event(StageEvent::Started {
            deps_dir: options.deps_dir.clone(),
            static_dir: options.static_dir.clone(),
            asset_count: options.assets.len(),
            dry_run: options.dry_run,
        });

        for dir in options.directories_to_ensure() {
            let existed = self.file_system.is_dir(&dir);
            if !options.dry_run {
                self.file_system
                    .create_dir_all(&dir)
                    .map_err(|source| StagerError::CreateDir {
                        path: dir.clone(),
                        source,
                    })?;
            }
            debug!(path = %dir.display(), existed, "directory ready");

            events.on_event(StageEvent::DirectoryReady {
                path: dir.clone(),
                created: !existed,
            });
            result.directories.push(DirectoryOutcome {
                path: dir,
                created: !existed,
            });
        }

        for (index, asset) in options.assets.iter().enumerate() {
            let source = asset.source_in(&options.deps_dir);
            let destination = asset.destination_file_in(&options.static_dir).ok_or_else(|| {
                StagerError::InvalidAsset {
                    name: asset.name().to_string(),
                    source_path: asset.source().to_path_buf(),
                }
            })?;

            let status = if !self.file_system.is_file(&source) {
                debug!(asset = asset.name(), source = %source.display(), "library not found");
                events.on_event(StageEvent::AssetMissing {
                    index,
                    name: asset.name().to_string(),
                    source: source.clone(),
                });
                AssetStatus::Missing
            } else if options.dry_run {
                events.on_event(StageEvent::AssetPlanned {
                    index,
                    name: asset.name().to_string(),
                    destination: destination.clone(),
                });
                AssetStatus::Planned { destination }
            } else {
                let bytes = self
                    .file_system
                    .copy_file(&source, &destination)
                    .map_err(|err| StagerError::Copy {
                        from: source.clone(),
                        to: destination.clone(),
                        source: err,
                    })?;
                info!(
                    asset = asset.name(),
                    destination = %destination.display(),
                    bytes,
                    "library staged"
                );
                events.on_event(StageEvent::AssetCopied {
                    index,
                    name: asset.name().to_string(),
                    destination: destination.clone(),
                    bytes,
                });
                AssetStatus::Copied { destination, bytes }
            };

            result.outcomes.push(AssetOutcome {
                name: asset.name().to_string(),
                source,
                status,
            });
        }

        events.on_event(StageEvent::Completed {
            copied: result.copied_count(),
            planned: result.planned_count(),
            missing: result.missing_count(),
        });

        Ok(result)
    }
}
