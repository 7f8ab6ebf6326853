//! # Production Allocation Engine
//!
//! 生產建議計算引擎：依單價由高到低，逐一以剩餘庫存計算每個產品的最大可生產數量。

pub mod allocator;
pub mod capacity;
pub mod ordering;
pub mod report;

// Re-export 主要類型
pub use allocator::{compute_suggestions, ProductionAllocator};
pub use capacity::CapacityCalculator;
pub use ordering::ProductOrdering;
pub use report::{ProductionReport, ReportLine};

use prod_core::{CatalogError, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// 生產建議計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// 生產建議（依處理順序）
    pub suggestions: Vec<ProductionSuggestion>,

    /// 總產值
    pub total_value: Decimal,

    /// 警告信息
    pub warnings: Vec<AllocationWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SuggestionResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            total_value: Decimal::ZERO,
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 加入一筆建議並累計總產值
    pub fn push(&mut self, suggestion: ProductionSuggestion) -> prod_core::Result<()> {
        self.total_value = self
            .total_value
            .checked_add(suggestion.total_value)
            .ok_or_else(|| CatalogError::CalculationError("總產值溢位".to_string()))?;
        self.suggestions.push(suggestion);
        Ok(())
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: AllocationWarning) {
        self.warnings.push(warning);
    }

    /// 查找指定產品的建議
    pub fn suggestion_for(&self, product_id: Uuid) -> Option<&ProductionSuggestion> {
        self.suggestions.iter().find(|s| s.product_id == product_id)
    }

    /// 指定原物料在所有建議中的總耗用量
    pub fn total_consumed(&self, raw_material_id: Uuid) -> Decimal {
        self.suggestions
            .iter()
            .filter_map(|s| s.consumption.get(&raw_material_id))
            .copied()
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// 單一產品的生產建議
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSuggestion {
    pub product_id: Uuid,
    pub product_code: String,
    pub product_name: String,

    /// 計算用單價（缺值為 0）
    pub unit_price: Decimal,

    /// 最大可生產數量（>= 1）
    pub max_quantity: u64,

    /// 產值 = 單價 × 數量
    pub total_value: Decimal,

    /// 原物料耗用：原物料ID → 耗用量
    pub consumption: BTreeMap<Uuid, Decimal>,
}

impl ProductionSuggestion {
    /// 依產品與數量創建建議
    pub fn new(
        product: &Product,
        max_quantity: u64,
        consumption: BTreeMap<Uuid, Decimal>,
    ) -> prod_core::Result<Self> {
        let unit_price = product.effective_price();
        let total_value = unit_price
            .checked_mul(Decimal::from(max_quantity))
            .ok_or_else(|| {
                CatalogError::CalculationError(format!("產品 {} 產值溢位", product.code))
            })?;

        Ok(Self {
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            unit_price,
            max_quantity,
            total_value,
            consumption,
        })
    }
}

/// 計算警告（已在本地處理、不中斷計算的問題）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationWarning {
    pub kind: WarningKind,
    pub subject_id: Uuid,
    pub message: String,
    pub severity: WarningSeverity,
}

impl AllocationWarning {
    pub fn new(kind: WarningKind, subject_id: Uuid, message: String) -> Self {
        Self {
            kind,
            subject_id,
            message,
            severity: kind.severity(),
        }
    }
}

/// 警告種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// 用量引用的原物料不在庫存快照中，以 0 庫存計算
    MissingReference,
    /// 單位用量 <= 0 的關聯已排除
    InactiveRequirement,
    /// 產品沒有有效用量，不列入建議
    Unconstrained,
    /// 目前庫存無法生產
    NotProducible,
    /// 單價缺值，以 0 計算
    MissingPrice,
    /// 庫存缺值，以 0 計算
    MissingStock,
    /// 產值超出可計算範圍，產品不列入建議
    ValueOverflow,
}

impl WarningKind {
    pub fn severity(self) -> WarningSeverity {
        match self {
            WarningKind::Unconstrained | WarningKind::NotProducible => WarningSeverity::Info,
            _ => WarningSeverity::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
