//! Pairwise similarity metrics over token sequences
//!
//! All metrics take whitespace-tokenized sequences and return a score in
//! `[0, 1]`: `1.0` means the sequences are equal, `0.0` means they share
//! nothing. Two empty sequences compare as equal.
//!
//! The Jaro-Winkler implementation follows the standard algorithm: a pair
//! with no matching tokens scores `0.0`, and the Winkler bonus scales with
//! the measured common leading prefix (capped at 4 tokens).

use std::collections::{HashMap, HashSet};

/// Winkler prefix scaling factor
const WINKLER_PREFIX_SCALE: f64 = 0.1;
/// Maximum common-prefix length rewarded by the Winkler bonus
const WINKLER_PREFIX_CAP: usize = 4;

/// Split a rendered string into whitespace-delimited tokens
pub fn whitespace_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Jaccard similarity: intersection over union of the token sets
pub fn jaccard_similarity(seq1: &[&str], seq2: &[&str]) -> f64 {
    let set1: HashSet<&str> = seq1.iter().copied().collect();
    let set2: HashSet<&str> = seq2.iter().copied().collect();
    let union = set1.union(&set2).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = set1.intersection(&set2).count();
    intersection as f64 / union as f64
}

/// Cosine similarity of the token-frequency vectors
pub fn cosine_similarity(seq1: &[&str], seq2: &[&str]) -> f64 {
    if seq1.is_empty() && seq2.is_empty() {
        return 1.0;
    }
    if seq1.is_empty() || seq2.is_empty() {
        return 0.0;
    }

    let counts1 = token_counts(seq1);
    let counts2 = token_counts(seq2);

    let dot: u64 = counts1
        .iter()
        .filter_map(|(token, count1)| counts2.get(token).map(|count2| count1 * count2))
        .sum();
    let norm1_sq: u64 = counts1.values().map(|c| c * c).sum();
    let norm2_sq: u64 = counts2.values().map(|c| c * c).sum();

    // Single square root over the integer norm product keeps equal-count
    // sequences at exactly 1.0.
    dot as f64 / ((norm1_sq * norm2_sq) as f64).sqrt()
}

fn token_counts<'a>(seq: &[&'a str]) -> HashMap<&'a str, u64> {
    let mut counts = HashMap::new();
    for token in seq {
        *counts.entry(*token).or_insert(0) += 1;
    }
    counts
}

/// Jaro-Winkler similarity over token sequences.
///
/// Jaro similarity with a bonus for a shared leading prefix:
/// `jaro + l * p * (1 - jaro)` where `l` is the common prefix length
/// capped at 4 and `p = 0.1`.
pub fn jaro_winkler_similarity(seq1: &[&str], seq2: &[&str]) -> f64 {
    let jaro = jaro_similarity(seq1, seq2);
    let prefix = seq1
        .iter()
        .zip(seq2)
        .take_while(|(a, b)| a == b)
        .count()
        .min(WINKLER_PREFIX_CAP);
    jaro + prefix as f64 * WINKLER_PREFIX_SCALE * (1.0 - jaro)
}

fn jaro_similarity(seq1: &[&str], seq2: &[&str]) -> f64 {
    let len1 = seq1.len();
    let len2 = seq2.len();
    if len1 == 0 && len2 == 0 {
        return 1.0;
    }
    if len1 == 0 || len2 == 0 {
        return 0.0;
    }

    // Tokens match when equal and within half the longer length of each
    // other's position.
    let window = (len1.max(len2) / 2).saturating_sub(1);
    let mut matched1 = vec![false; len1];
    let mut matched2 = vec![false; len2];
    let mut matches = 0usize;
    for i in 0..len1 {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len2);
        for j in start..end {
            if !matched2[j] && seq1[i] == seq2[j] {
                matched1[i] = true;
                matched2[j] = true;
                matches += 1;
                break;
            }
        }
    }
    if matches == 0 {
        return 0.0;
    }

    let matched_in_order1 = seq1
        .iter()
        .zip(&matched1)
        .filter(|(_, m)| **m)
        .map(|(t, _)| *t);
    let matched_in_order2 = seq2
        .iter()
        .zip(&matched2)
        .filter(|(_, m)| **m)
        .map(|(t, _)| *t);
    let transpositions = matched_in_order1
        .zip(matched_in_order2)
        .filter(|(a, b)| a != b)
        .count()
        / 2;

    let m = matches as f64;
    let t = transpositions as f64;
    (m / len1 as f64 + m / len2 as f64 + (m - t) / m) / 3.0
}
