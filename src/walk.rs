use crate::error::Result;
use crate::process::FileProcessor;
use crate::template::OutputTemplate;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Walk `root` in file name order and hand every non-directory entry to
/// `processor`.
///
/// `limit` caps how many entries are handed over; unsupported files count
/// toward it too. Once the cap is reached the walk stops descending and the
/// current directory is abandoned. The first error aborts the walk.
///
/// Returns the number of entries handed to the processor.
pub fn process_dir(
    root: &Path,
    template: &OutputTemplate,
    limit: Option<usize>,
    processor: &mut dyn FileProcessor,
) -> Result<usize> {
    let mut processed = 0;
    let mut it = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(entry) = it.next() {
        let entry = entry?;

        if limit.is_some_and(|max| processed >= max) {
            debug!("Limit reached, skipping {}", entry.path().display());
            it.skip_current_dir();
            continue;
        }
        if entry.file_type().is_dir() {
            continue;
        }

        processed += 1;
        processor.process(relative_to_cwd(entry.path()), template)?;
    }

    Ok(processed)
}

/// Drops a leading `./`, so walking `.` yields `a.jpg` rather than `./a.jpg`.
fn relative_to_cwd(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
