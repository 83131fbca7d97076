use tracing::debug;

use crate::distance::EditCosts;
use crate::distance::weighted_damerau_levenshtein;

/// Any candidate whose edit cost reaches this value is considered noise
/// rather than a plausible typo. Matches git's own suggestion cutoff.
pub const REJECTION_THRESHOLD: usize = 7;

/// The winning group of one resolution, in stable score order: the leading
/// block of zero-distance entries followed by the tie run at the best
/// non-zero distance (when that run clears the threshold).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub commands: Vec<String>,
    /// Minimal distance attained by the group.
    pub distance: usize,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no candidate within distance {REJECTION_THRESHOLD}")]
    NoCandidate,
}

/// Score `input` against every vocabulary entry and return the best-matching
/// group, or [`ResolveError::NoCandidate`] when nothing scores below the
/// rejection threshold.
///
/// A vocabulary entry that starts with a non-empty `input` is a truncated
/// but correct spelling (`comm` for `commit`) and scores 0 without touching
/// the distance engine; such an entry is never rejected. Everything else is
/// scored with the default git-style weights. The empty token gets no prefix
/// shortcut and scores every entry via pure insertion cost.
pub fn resolve(input: &str, vocabulary: &[&str]) -> Result<Resolution, ResolveError> {
    let mut candidates: Vec<(&str, usize)> = vocabulary
        .iter()
        .map(|entry| {
            let dist = if !input.is_empty() && entry.starts_with(input) {
                0
            } else {
                weighted_damerau_levenshtein(
                    input.as_bytes(),
                    entry.as_bytes(),
                    EditCosts::default(),
                )
            };
            (*entry, dist)
        })
        .collect();

    candidates.sort_by_key(|&(_, dist)| dist);

    // Leading block of zero-distance entries (prefix and exact matches).
    let zeros = candidates
        .iter()
        .take_while(|&&(_, dist)| dist == 0)
        .count();

    // The tie run starting at the first non-zero entry joins the group when
    // it clears the threshold. Zero-distance matches stand regardless; with
    // none of those and nothing under the threshold, there is no correction.
    let mut end = zeros;
    if let Some(&(_, run)) = candidates.get(zeros) {
        if run < REJECTION_THRESHOLD {
            while end < candidates.len() && candidates[end].1 == run {
                end += 1;
            }
        } else if zeros == 0 {
            return Err(ResolveError::NoCandidate);
        }
    } else if zeros == 0 {
        return Err(ResolveError::NoCandidate);
    }

    let distance = candidates[0].1;
    let commands: Vec<String> = candidates[..end]
        .iter()
        .map(|&(entry, _)| entry.to_string())
        .collect();
    debug!(input, distance, candidates = commands.len(), "resolved");

    Ok(Resolution { commands, distance })
}
