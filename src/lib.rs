//! # Ladder Bot
//!
//! A shortest word ladder solver using breadth-first search.
//!
//! A word ladder transforms a start word into an end word one edit at a time,
//! where each edit substitutes, inserts, or deletes a single character and
//! every word after the first must belong to a dictionary. The solver finds
//! a ladder of minimum length, or reports that none exists.

pub mod adjacency;
pub mod solver;

pub use adjacency::{edit_distance_within, is_adjacent};
pub use solver::{generate_word_ladder, LadderSolver};

use std::io;
use std::path::Path;

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Vec<String> {
    include_str!("../dictionary/dictionary.txt")
        .lines()
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Load a dictionary from a word list file, one word per line
pub fn load_dictionary_from_path<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect())
}
