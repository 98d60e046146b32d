//! Shortest word ladder search using breadth-first traversal.
//!
//! The search explores an implicit graph whose nodes are dictionary words
//! (plus the start word) and whose edges are one-edit hops. The frontier is
//! a queue of complete ladders processed one level at a time, so the first
//! ladder to reach the end word is guaranteed to be of minimum length.

use crate::adjacency::is_adjacent;
use rayon::prelude::*;
use std::collections::{HashSet, VecDeque};

/// Find a shortest ladder from `begin_word` to `end_word`.
///
/// Every word in the ladder after the first must be a member of `word_list`;
/// `begin_word` itself need not be. Returns an empty vector when no ladder
/// exists, when `begin_word == end_word` (a ladder requires at least one
/// hop), or when `end_word` is not in the dictionary. No ladder ever repeats
/// a word.
pub fn generate_word_ladder(
    begin_word: &str,
    end_word: &str,
    word_list: &HashSet<String>,
) -> Vec<String> {
    if begin_word == end_word || !word_list.contains(end_word) {
        return Vec::new();
    }

    // Working copy of the dictionary. A word leaves it once some ladder has
    // claimed it, so each word appears in at most one surviving ladder and
    // the search always terminates.
    let mut remaining: HashSet<&str> = word_list.iter().map(String::as_str).collect();
    remaining.remove(begin_word);

    let mut queue: VecDeque<Vec<String>> = VecDeque::new();
    queue.push_back(vec![begin_word.to_string()]);

    while !queue.is_empty() {
        let mut pending_removal: HashSet<&str> = HashSet::new();

        // Process exactly the ladders that make up the current level; their
        // extensions are pushed behind them and handled next round.
        for _ in 0..queue.len() {
            let ladder = match queue.pop_front() {
                Some(ladder) => ladder,
                None => break,
            };

            let tail = match ladder.last() {
                Some(word) => word.clone(),
                None => continue,
            };

            if tail == end_word {
                return ladder;
            }

            for &candidate in remaining.iter().filter(|word| is_adjacent(&tail, word)) {
                let mut extended = ladder.clone();
                extended.push(candidate.to_string());
                queue.push_back(extended);
                pending_removal.insert(candidate);
            }
        }

        // Removal is deferred to the level boundary so that two equally
        // short ladders in the same level may both extend through the same
        // candidate word.
        for word in pending_removal {
            remaining.remove(word);
        }
    }

    Vec::new()
}

/// A word ladder solver over a fixed dictionary.
#[derive(Debug, Clone)]
pub struct LadderSolver {
    dictionary: HashSet<String>,
}

impl LadderSolver {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            dictionary: words.into_iter().collect(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn dictionary(&self) -> &HashSet<String> {
        &self.dictionary
    }

    /// Find a shortest ladder from `begin_word` to `end_word`, or an empty
    /// vector when none exists.
    pub fn shortest_ladder(&self, begin_word: &str, end_word: &str) -> Vec<String> {
        generate_word_ladder(begin_word, end_word, &self.dictionary)
    }

    /// All dictionary words one edit away from `word`, sorted.
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        let mut neighbors: Vec<String> = self
            .dictionary
            .iter()
            .filter(|candidate| is_adjacent(word, candidate))
            .cloned()
            .collect();
        neighbors.sort();
        neighbors
    }

    /// Check that a ladder is well formed: non-empty, no repeated word,
    /// every consecutive pair one edit apart, and every word after the
    /// first a dictionary member. The first word is unconstrained.
    pub fn verify_ladder(&self, ladder: &[String]) -> bool {
        if ladder.is_empty() {
            return false;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (i, word) in ladder.iter().enumerate() {
            if !seen.insert(word.as_str()) {
                return false;
            }
            if i > 0 {
                if !self.dictionary.contains(word) {
                    return false;
                }
                if !is_adjacent(&ladder[i - 1], word) {
                    return false;
                }
            }
        }

        true
    }

    /// Shortest ladder length from `begin_word` to every dictionary word,
    /// computed in parallel. Unreachable targets report length 0.
    pub fn ladder_lengths(&self, begin_word: &str) -> Vec<(String, usize)> {
        self.dictionary
            .par_iter()
            .map(|target| {
                let ladder = self.shortest_ladder(begin_word, target);
                (target.clone(), ladder.len())
            })
            .collect()
    }

    /// Get the distribution of ladder lengths from `begin_word` across the
    /// whole dictionary as (length, count) pairs. Length 0 counts the
    /// unreachable targets (and the begin word itself, if present).
    pub fn ladder_length_distribution(&self, begin_word: &str) -> Vec<(usize, usize)> {
        let lengths: Vec<usize> = self
            .dictionary
            .par_iter()
            .map(|target| self.shortest_ladder(begin_word, target).len())
            .collect();

        let max_length = *lengths.iter().max().unwrap_or(&0);
        let mut distribution = vec![0usize; max_length + 1];

        for length in lengths {
            distribution[length] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Average ladder length from `begin_word` over all reachable
    /// dictionary words. Returns 0.0 when nothing is reachable.
    pub fn average_ladder_length(&self, begin_word: &str) -> f64 {
        let lengths: Vec<usize> = self
            .dictionary
            .par_iter()
            .map(|target| self.shortest_ladder(begin_word, target).len())
            .filter(|&length| length > 0)
            .collect();

        if lengths.is_empty() {
            return 0.0;
        }

        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    }
}
