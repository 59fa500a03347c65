mod error;
mod io;
mod merge;
mod split;

pub mod cli;

pub use {
    crate::error::{Error, Result},
    crate::io::{copy_chunk, DEFAULT_CHUNK_SIZE},
    crate::merge::Merger,
    crate::split::{part_path, Splitter, SplitterBuilder},
};
