//! Per-file strategies: copy into the dated layout, or just report where a
//! photo would go.

use crate::capture_time::read_capture_time;
use crate::counter::CollisionCounter;
use crate::error::{Error, Result};
use crate::template::OutputTemplate;
use indicatif::ProgressBar;
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: &[&str] = &["jpg"];
const OUTPUT_EXTENSION: &str = "jpg";

/// One way of handling a file found by the walker. Chosen once per run.
pub trait FileProcessor {
    fn process(&mut self, path: &Path, template: &OutputTemplate) -> Result<()>;
}

/// Matches on the file name suffix, so a file named just `.jpg` counts.
fn is_supported(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!(".{ext}")))
}

/// Open `path`, read its capture time and work out its destination.
///
/// Returns `None` for unsupported files. The returned reader is rewound to
/// the start of the file.
fn plan(
    path: &Path,
    template: &OutputTemplate,
    counter: &mut CollisionCounter,
) -> Result<Option<(BufReader<File>, PathBuf)>> {
    if !is_supported(path) {
        debug!("Skipping {}", path.display());
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| Error::filesystem(path, e))?;
    let mut reader = BufReader::new(file);
    let taken = read_capture_time(&mut reader).map_err(|source| Error::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let dest = format!(
        "{}-{}.{}",
        template.render(&taken),
        counter.next_index(&taken),
        OUTPUT_EXTENSION
    );
    debug!("{} taken {} -> {}", path.display(), taken, dest);
    Ok(Some((reader, PathBuf::from(dest))))
}

/// Copies each photo to its destination. The source is left in place.
pub struct CopyProcessor {
    counter: CollisionCounter,
    progress: ProgressBar,
    copied: usize,
}

impl CopyProcessor {
    pub fn new(progress: ProgressBar) -> Self {
        Self {
            counter: CollisionCounter::new(),
            progress,
            copied: 0,
        }
    }

    pub fn copied(&self) -> usize {
        self.copied
    }

    pub fn finish(&self) {
        self.progress
            .finish_with_message(format!("Copied {} files", self.copied));
    }
}

impl FileProcessor for CopyProcessor {
    fn process(&mut self, path: &Path, template: &OutputTemplate) -> Result<()> {
        let Some((mut reader, dest)) = plan(path, template, &mut self.counter)? else {
            return Ok(());
        };

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::filesystem(parent, e))?;
        }
        // Existing files are truncated.
        let mut out = File::create(&dest).map_err(|e| Error::filesystem(&dest, e))?;
        io::copy(&mut reader, &mut out).map_err(|e| Error::filesystem(&dest, e))?;

        self.copied += 1;
        self.progress.inc(1);
        self.progress.set_message(dest.display().to_string());
        Ok(())
    }
}

/// Writes a `source -> destination` line per photo and touches nothing.
pub struct PreviewProcessor<W: Write> {
    counter: CollisionCounter,
    out: W,
}

impl<W: Write> PreviewProcessor<W> {
    pub fn new(out: W) -> Self {
        Self {
            counter: CollisionCounter::new(),
            out,
        }
    }
}

impl<W: Write> FileProcessor for PreviewProcessor<W> {
    fn process(&mut self, path: &Path, template: &OutputTemplate) -> Result<()> {
        let Some((_, dest)) = plan(path, template, &mut self.counter)? else {
            return Ok(());
        };
        writeln!(self.out, "{} -> {}", path.display(), dest.display()).map_err(Error::Output)
    }
}
