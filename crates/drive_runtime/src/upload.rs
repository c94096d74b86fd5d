//! Sequential batch upload with two-phase simulated progress.
//!
//! Each file owns an equal share of the bar. Reading the file fills the first half of its share;
//! a fixed simulated "processing" delay fills the second half in ticks so the bar animates even
//! though nothing is transferred.

use platform_host::{TimerService, UploadSource};

use crate::{
    error::DriveError,
    model::{FileItem, ItemId},
};

/// Total simulated processing delay per file.
pub const PROCESSING_DELAY_MS: u32 = 400;
/// Number of progress updates emitted during the processing delay.
pub const PROCESSING_TICKS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Phase of the file currently being uploaded.
pub enum UploadPhase {
    /// Reading file content into memory.
    Reading,
    /// Simulated post-read processing.
    Processing,
    /// File finished.
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
/// Snapshot of batch progress.
pub struct UploadProgress {
    /// Zero-based index of the current file.
    pub file_index: usize,
    /// Number of files in the batch.
    pub file_count: usize,
    /// Name of the current file.
    pub file_name: String,
    /// Phase of the current file.
    pub phase: UploadPhase,
    /// Whole-batch completion, 0.0 to 100.0.
    pub percent: f64,
}

impl UploadProgress {
    /// Progress shown before the first file starts.
    pub fn starting(file_count: usize) -> Self {
        Self {
            file_index: 0,
            file_count,
            file_name: String::new(),
            phase: UploadPhase::Reading,
            percent: 0.0,
        }
    }

    fn at(
        file_index: usize,
        file_count: usize,
        file_name: &str,
        phase: UploadPhase,
        within_file: f64,
    ) -> Self {
        let count = file_count.max(1) as f64;
        Self {
            file_index,
            file_count,
            file_name: file_name.to_string(),
            phase,
            percent: ((file_index as f64 + within_file) / count * 100.0).clamp(0.0, 100.0),
        }
    }

    /// Completion rounded to a whole percent, for the progress element.
    pub fn rounded_percent(&self) -> u16 {
        self.percent.round().clamp(0.0, 100.0) as u16
    }
}

/// Reads every source in order and builds file records under `parent_id`.
///
/// Nothing is committed here; the caller appends the returned records once the whole batch
/// succeeds.
///
/// # Errors
///
/// Returns [`DriveError::UploadRead`] for the first file whose read fails. Later files are not
/// touched.
pub async fn run_upload_batch(
    sources: &[Box<dyn UploadSource>],
    parent_id: Option<ItemId>,
    timer: &dyn TimerService,
    mut on_progress: impl FnMut(UploadProgress),
) -> Result<Vec<FileItem>, DriveError> {
    let file_count = sources.len();
    let tick_ms = PROCESSING_DELAY_MS / PROCESSING_TICKS.max(1);
    let mut uploaded = Vec::with_capacity(file_count);

    for (file_index, source) in sources.iter().enumerate() {
        let descriptor = source.descriptor();
        on_progress(UploadProgress::at(
            file_index,
            file_count,
            &descriptor.name,
            UploadPhase::Reading,
            0.0,
        ));

        let content = source
            .read_data_url()
            .await
            .map_err(|reason| DriveError::UploadRead {
                name: descriptor.name.clone(),
                reason,
            })?;
        on_progress(UploadProgress::at(
            file_index,
            file_count,
            &descriptor.name,
            UploadPhase::Processing,
            0.5,
        ));

        for tick in 1..=PROCESSING_TICKS {
            timer.sleep_ms(tick_ms).await;
            let phase = if tick == PROCESSING_TICKS {
                UploadPhase::Complete
            } else {
                UploadPhase::Processing
            };
            on_progress(UploadProgress::at(
                file_index,
                file_count,
                &descriptor.name,
                phase,
                0.5 + 0.5 * f64::from(tick) / f64::from(PROCESSING_TICKS),
            ));
        }

        uploaded.push(FileItem::new_file(&descriptor, content, parent_id.clone()));
    }

    Ok(uploaded)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{InstantTimerService, MemoryUploadSource};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ItemKind;

    fn boxed(sources: Vec<MemoryUploadSource>) -> Vec<Box<dyn UploadSource>> {
        sources
            .into_iter()
            .map(|source| Box::new(source) as Box<dyn UploadSource>)
            .collect()
    }

    #[test]
    fn batch_builds_one_record_per_file_under_parent() {
        let timer = InstantTimerService::default();
        let parent = Some(ItemId::new("docs"));
        let sources = boxed(vec![
            MemoryUploadSource::new("a.txt", "text/plain", b"abc".to_vec()),
            MemoryUploadSource::new("b.bin", "", vec![0_u8; 2048]),
        ]);

        let items = block_on(run_upload_batch(&sources, parent.clone(), &timer, |_| {}))
            .expect("upload");

        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
        assert!(items.iter().all(|item| item.parent_id == parent));
        assert_eq!(items[0].name, "a.txt");
        assert_eq!(
            items[0].kind,
            ItemKind::File {
                size: 3,
                mime_type: "text/plain".to_string(),
                content: "data:text/plain;base64,YWJj".to_string(),
            }
        );
        assert_eq!(items[1].mime_type(), Some("application/octet-stream"));
        assert_eq!(items[1].size(), Some(2048));
        assert_eq!(timer.slept_ms(), u64::from(PROCESSING_DELAY_MS) * 2);
    }

    #[test]
    fn progress_reaches_halfway_after_read_and_full_at_end() {
        let timer = InstantTimerService::default();
        let sources = boxed(vec![
            MemoryUploadSource::new("a.txt", "text/plain", b"a".to_vec()),
            MemoryUploadSource::new("b.txt", "text/plain", b"b".to_vec()),
        ]);
        let mut seen = Vec::new();
        block_on(run_upload_batch(&sources, None, &timer, |p| seen.push(p))).expect("upload");

        let per_file = 2 + PROCESSING_TICKS as usize;
        assert_eq!(seen.len(), per_file * 2);
        assert_eq!(seen[0].percent, 0.0);
        assert_eq!(seen[1].phase, UploadPhase::Processing);
        assert_eq!(seen[1].percent, 25.0);
        assert_eq!(seen[per_file - 1].phase, UploadPhase::Complete);
        assert_eq!(seen[per_file - 1].percent, 50.0);
        assert_eq!(seen[per_file].file_name, "b.txt");
        assert_eq!(seen.last().map(UploadProgress::rounded_percent), Some(100));
        assert!(seen.windows(2).all(|pair| pair[0].percent <= pair[1].percent));
    }

    #[test]
    fn read_failure_aborts_remaining_files() {
        let timer = InstantTimerService::default();
        let sources = boxed(vec![
            MemoryUploadSource::new("a.txt", "text/plain", b"a".to_vec()),
            MemoryUploadSource::unreadable("b.txt", "device removed"),
            MemoryUploadSource::new("c.txt", "text/plain", b"c".to_vec()),
        ]);
        let mut names = Vec::new();
        let result = block_on(run_upload_batch(&sources, None, &timer, |p| {
            names.push(p.file_name)
        }));

        assert_eq!(
            result,
            Err(DriveError::UploadRead {
                name: "b.txt".to_string(),
                reason: "device removed".to_string(),
            })
        );
        assert!(!names.iter().any(|name| name == "c.txt"));
    }

    #[test]
    fn empty_batch_reports_nothing() {
        let timer = InstantTimerService::default();
        let mut calls = 0;
        let items = block_on(run_upload_batch(&[], None, &timer, |_| calls += 1)).expect("upload");
        assert!(items.is_empty());
        assert_eq!(calls, 0);
    }
}
