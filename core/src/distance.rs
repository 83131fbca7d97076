/// Per-operation weights for [`weighted_damerau_levenshtein`].
///
/// The default weighting matches git's own suggestion scoring: swaps are
/// free, substitutions cost 2, insertions 1, and deletions 3, which biases
/// corrections toward small insertions and adjacent transpositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCosts {
    pub swap: usize,
    pub substitution: usize,
    pub insertion: usize,
    pub deletion: usize,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            swap: 0,
            substitution: 2,
            insertion: 1,
            deletion: 3,
        }
    }
}

/// Minimum total cost to transform `input` into `target` using weighted
/// single-byte substitution, insertion, deletion, and adjacent-pair
/// transposition (optimal string alignment: a swap is only considered when
/// the two positions are each other's bytes, never a longer-range move).
pub fn weighted_damerau_levenshtein(input: &[u8], target: &[u8], costs: EditCosts) -> usize {
    let rows = input.len() + 1;
    let cols = target.len() + 1;

    let mut dist = vec![vec![0usize; cols]; rows];
    for (i, row) in dist.iter_mut().enumerate() {
        row[0] = i * costs.deletion;
    }
    for j in 0..cols {
        dist[0][j] = j * costs.insertion;
    }

    for i in 1..rows {
        for j in 1..cols {
            let sub = if input[i - 1] == target[j - 1] {
                0
            } else {
                costs.substitution
            };
            let mut best = dist[i - 1][j - 1] + sub;

            if i > 1 && j > 1 && input[i - 2] == target[j - 1] && input[i - 1] == target[j - 2] {
                best = best.min(dist[i - 2][j - 2] + costs.swap);
            }

            best = best.min(dist[i][j - 1] + costs.insertion);
            best = best.min(dist[i - 1][j] + costs.deletion);
            dist[i][j] = best;
        }
    }

    dist[rows - 1][cols - 1]
}
