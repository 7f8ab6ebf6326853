//! # Production Core
//!
//! 產品目錄核心資料模型與類型定義

pub mod amount;
pub mod catalog;
pub mod config;
pub mod product;
pub mod raw_material;
pub mod requirement;

// Re-export 主要類型
pub use amount::parse_amount;
pub use catalog::{Catalog, CatalogSnapshot};
pub use config::{AllocationConfig, TieBreakRule};
pub use product::Product;
pub use raw_material::RawMaterial;
pub use requirement::Requirement;

use rust_decimal::Decimal;
use uuid::Uuid;

/// 目錄與計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}編碼不可為空")]
    EmptyCode(&'static str),

    #[error("{field} 不可為負數: {value}")]
    NegativeValue { field: &'static str, value: Decimal },

    #[error("編碼重複: {0}")]
    DuplicateCode(String),

    #[error("找不到產品: {0}")]
    ProductNotFound(Uuid),

    #[error("找不到原物料: {0}")]
    RawMaterialNotFound(Uuid),

    #[error("找不到用量關聯: {0}")]
    RequirementNotFound(Uuid),

    #[error("產品 {product_id} 已存在原物料 {raw_material_id} 的用量關聯")]
    DuplicateRequirement {
        product_id: Uuid,
        raw_material_id: Uuid,
    },

    /// 非正數單位用量進入除法步驟（上游過濾被繞過）
    #[error("無效的用量: 產品 {product_id} / 原物料 {raw_material_id} 單位用量 {quantity_per_unit}")]
    InvalidRequirement {
        product_id: Uuid,
        raw_material_id: Uuid,
        quantity_per_unit: Decimal,
    },

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
