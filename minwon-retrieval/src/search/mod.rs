//! Rank fusion and the hybrid searcher.

pub mod hybrid;
pub mod rrf_fusion;

pub use hybrid::HybridSearcher;
pub use rrf_fusion::fuse;
