use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::error::{Error, Result};
use crate::io::{copy_chunk, open_input, open_output, DEFAULT_CHUNK_SIZE};

/// Derive the path of part `index` (1-based) of `full`.
///
/// The suffix is appended to the whole path, extension included:
/// parts of `data.bin` are `data.bin_1.prt`, `data.bin_2.prt` and so
/// on, next to the original.
pub fn part_path<P: AsRef<Path>>(full: P, index: u64) -> PathBuf {
    let mut name = full.as_ref().as_os_str().to_os_string();
    name.push(format!("_{}.prt", index));
    PathBuf::from(name)
}

pub struct SplitterBuilder {
    /// The path to the input file
    full: PathBuf,
    /// The maximum size of each part
    part_size: usize,
}

impl SplitterBuilder {
    pub fn new<P: AsRef<Path>>(full: P) -> Self {
        SplitterBuilder {
            full: full.as_ref().to_path_buf(),
            part_size: DEFAULT_CHUNK_SIZE,
        }
    }

    #[must_use]
    pub fn part_size(mut self, part_size: usize) -> Self {
        self.part_size = part_size;
        self
    }

    pub fn build(self) -> Result<Splitter> {
        if self.part_size == 0 {
            return Err(Error::InvalidChunkSize(self.part_size));
        }
        Ok(Splitter {
            full: self.full,
            part_size: self.part_size,
        })
    }
}

pub struct Splitter {
    /// The path to the input file
    full: PathBuf,
    /// The maximum size of each part
    part_size: usize,
}

impl Splitter {
    /// Split the full file into consecutive part files and return how
    /// many were created.
    ///
    /// Every part holds exactly `part_size` bytes except the last,
    /// which holds the remainder. An input sized an exact multiple of
    /// `part_size` therefore ends with one empty part: a part file is
    /// created before each read, and the end of the stream is only
    /// observed once a read comes up short.
    pub fn run(self) -> Result<u64> {
        info!(
            "Splitting {} into parts of {} bytes",
            self.full.display(),
            self.part_size
        );
        let mut input = open_input(&self.full)?;
        let total = input.metadata()?.len();

        let style = ProgressStyle::default_bar()
            .template("{msg:<10}: [{elapsed_precise}] {bar:40.cyan/blue} {bytes:>10}/{total_bytes:10}")
            .expect("valid indicatif template")
            .progress_chars("█▉▊▋▌▍▎▏  ");
        let progress = ProgressBar::new(total);
        progress.set_style(style);
        progress.set_message("split");

        let mut buffer = vec![0u8; self.part_size];
        let mut created = 0u64;
        loop {
            created += 1;
            let mut output = open_output(part_path(&self.full, created))?;
            let copied = copy_chunk(&mut input, &mut output, &mut buffer)?;
            progress.inc(copied as u64);
            if copied < buffer.len() {
                break;
            }
        }
        progress.finish();

        info!("Finished writing {} part files", created);
        Ok(created)
    }
}
