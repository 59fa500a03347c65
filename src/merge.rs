use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::error::{Error, Result};
use crate::io::{copy_chunk, open_input, open_output, DEFAULT_CHUNK_SIZE};

/// Concatenates part files, in the order given, into one full file.
pub struct Merger {
    /// The part files to read, in merge order
    parts: Vec<PathBuf>,
    /// The path of the merged output file
    full: PathBuf,
    /// The size of each copied chunk
    chunk_size: usize,
}

impl Merger {
    pub fn new<P: AsRef<Path>>(parts: Vec<PathBuf>, full: P) -> Self {
        Merger {
            parts,
            full: full.as_ref().to_path_buf(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    #[must_use]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Merge the parts into the full file and return the number of
    /// bytes written.
    ///
    /// The output is created (or truncated) before any part is opened,
    /// so a part that fails to open leaves the bytes already copied
    /// from earlier parts in place. An empty part list yields an empty
    /// output file.
    pub fn run(self) -> Result<u64> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        info!(
            "Merging {} part files into {}",
            self.parts.len(),
            self.full.display()
        );
        let mut output = open_output(&self.full)?;

        // Part sizes are unknown until each part is opened, so the
        // progress display is a spinner with a running byte count.
        let style = ProgressStyle::default_bar()
            .template("{msg:<10}: [{elapsed_precise}] {spinner:.green} {bytes:>10}")
            .expect("valid indicatif template");
        let progress = ProgressBar::new_spinner();
        progress.set_style(style);
        progress.set_message("merge");

        let mut buffer = vec![0u8; self.chunk_size];
        let mut written = 0u64;
        for part in &self.parts {
            let mut input = open_input(part)?;
            loop {
                let copied = copy_chunk(&mut input, &mut output, &mut buffer)?;
                written += copied as u64;
                progress.inc(copied as u64);
                if copied < buffer.len() {
                    break;
                }
            }
        }
        progress.finish();

        info!("Finished writing {} bytes", written);
        Ok(written)
    }
}
