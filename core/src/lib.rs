//! Fuzzy resolution of mistyped git subcommands: a weighted
//! Damerau–Levenshtein distance engine plus the ranking, threshold, and
//! tie-break policy that picks the winning vocabulary entries.

pub mod distance;
pub mod resolver;
pub mod vocabulary;

pub use distance::EditCosts;
pub use distance::weighted_damerau_levenshtein;
pub use resolver::REJECTION_THRESHOLD;
pub use resolver::Resolution;
pub use resolver::ResolveError;
pub use resolver::resolve;
pub use vocabulary::GIT_COMMANDS;
