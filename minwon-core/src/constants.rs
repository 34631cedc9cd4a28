/// Minwon system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of evidence documents a single request may retrieve.
/// Config validation rejects `top_k` values above this.
pub const MAX_TOP_K: usize = 50;
