use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::io::DEFAULT_CHUNK_SIZE;

/// Naming convention statement printed at the end of the usage text.
const PART_NAMING_NOTE: &str =
    r#"In split mode output parts filenames will be "<full>_1.prt", "<full>_2.prt" and so on"#;

/// Raw command-line options.
///
/// Flags are occurrence-counted and values collected, so a parse never
/// fails on duplicated or conflicting usage; [`Opt::validate`] checks
/// the combination afterwards and reports every violated rule at once.
#[derive(Debug, Parser)]
#[clap(
    name = "prt",
    about = "Tool for splitting files or merging some files in one",
    after_help = PART_NAMING_NOTE
)]
pub struct Opt {
    /// Split mode
    #[clap(short, long, parse(from_occurrences))]
    pub split: u64,

    /// Merge mode
    #[clap(short, long, parse(from_occurrences))]
    pub merge: u64,

    /// Full file name
    #[clap(short, long, value_name = "filename")]
    pub full: Vec<PathBuf>,

    /// Parts file names
    #[clap(
        short,
        long,
        value_name = "filename1,filename2...",
        use_value_delimiter = true
    )]
    pub parts: Vec<PathBuf>,

    /// Parts size in bytes
    #[clap(long = "parts_size", value_name = "size")]
    pub parts_size: Vec<usize>,

    /// Stray words that matched no option. Not an error on their own;
    /// they are reported when the usage text is shown.
    #[clap(hide = true, value_name = "unmatched")]
    pub unmatched: Vec<String>,
}

/// A validated invocation, ready to execute.
#[derive(Debug)]
pub enum Task {
    Split { full: PathBuf, part_size: usize },
    Merge { full: PathBuf, parts: Vec<PathBuf> },
}

impl Opt {
    /// Check the parsed options against the configuration rules.
    ///
    /// Returns the runnable [`Task`], or one message per violated rule
    /// for the caller to print alongside the usage text.
    pub fn validate(&self) -> std::result::Result<Task, Vec<String>> {
        let mut problems = Vec::new();
        if self.split + self.merge != 1 {
            problems
                .push(r#"Only one of "split" and "merge" options must be provided"#.to_string());
        }
        if self.full.len() != 1 {
            problems.push("Full file name must be provided".to_string());
        }
        if self.parts_size.len() > 1 {
            problems.push("Parts size must be provided only once".to_string());
        }
        if self.parts_size.first() == Some(&0) {
            problems.push("Parts size must be greater than zero".to_string());
        }
        if self.split > 0 && !self.parts.is_empty() {
            problems.push("Parts file names cannot be provided in split mode".to_string());
        }
        if self.merge > 0 && self.parts.is_empty() {
            problems.push("Parts file names must be provided in merge mode".to_string());
        }
        if !problems.is_empty() {
            return Err(problems);
        }

        let full = self.full[0].clone();
        if self.split > 0 {
            Ok(Task::Split {
                full,
                part_size: self
                    .parts_size
                    .first()
                    .copied()
                    .unwrap_or(DEFAULT_CHUNK_SIZE),
            })
        } else {
            Ok(Task::Merge {
                full,
                parts: self.parts.clone(),
            })
        }
    }
}

/// Print the usage text to stdout, matching the explicit `--help`
/// output including the part-naming note.
pub fn print_usage() {
    let _ = Opt::command().print_help();
}
