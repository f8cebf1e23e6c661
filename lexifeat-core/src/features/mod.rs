//! Feature extraction.
//!
//! - **Word**: 22-slot vector for one normalized word
//! - **Cluster**: consonant-run scan feeding slots 1, 17 and 18
//! - **Sentence**: element-wise mean over a sentence's words

pub mod cluster;
pub mod sentence;
pub mod word;

pub use cluster::{scan_clusters, ClusterSummary};
pub use sentence::{aggregate, aggregate_with};
pub use word::extract_word;
