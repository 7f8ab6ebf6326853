//! # Production Cache
//!
//! 依目錄版本緩存生產建議，目錄未異動時不重算

pub mod versioned;

// Re-export 主要類型
pub use versioned::SuggestionCache;
