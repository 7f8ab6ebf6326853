//! # prodplan
//!
//! 產品目錄與生產建議：目錄模型、貪婪生產分配引擎、版本化緩存

pub use prod_cache;
pub use prod_calc;
pub use prod_core;

pub use prod_cache::SuggestionCache;
pub use prod_calc::{
    compute_suggestions, ProductionAllocator, ProductionReport, ProductionSuggestion,
    SuggestionResult,
};
pub use prod_core::{
    AllocationConfig, Catalog, CatalogError, CatalogSnapshot, Product, RawMaterial, Requirement,
    TieBreakRule,
};
