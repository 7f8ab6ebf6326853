//! 生產建議計算配置

use serde::{Deserialize, Serialize};

use crate::{CatalogError, Result};

/// 生產建議計算參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// 同價產品的排序規則
    pub tie_break: TieBreakRule,

    /// 是否記錄警告（缺少原物料、被排除的用量等）
    pub record_warnings: bool,
}

impl AllocationConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            tie_break: TieBreakRule::CatalogOrder,
            record_warnings: true,
        }
    }

    /// 建構器模式：設置同價排序規則
    pub fn with_tie_break(mut self, rule: TieBreakRule) -> Self {
        self.tie_break = rule;
        self
    }

    /// 建構器模式：設置是否記錄警告
    pub fn with_record_warnings(mut self, record: bool) -> Self {
        self.record_warnings = record;
        self
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use prod_core::{AllocationConfig, TieBreakRule};
    /// let config = AllocationConfig::from_json_str(r#"{"tie_break":"Code"}"#).unwrap();
    /// assert_eq!(config.tie_break, TieBreakRule::Code);
    /// assert!(config.record_warnings);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 同價產品排序規則
///
/// 產品一律依單價由高到低處理，此規則只決定單價相同時的先後。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreakRule {
    /// 維持目錄（輸入）順序（穩定排序）
    #[default]
    CatalogOrder,

    /// 依產品編碼遞增
    Code,
}
