//! 原物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CatalogError, Result};

/// 原物料與其庫存快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 原物料ID
    pub id: Uuid,

    /// 原物料編碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 說明
    pub description: Option<String>,

    /// 計量單位（kg、litro、unidade...）
    pub unit: Option<String>,

    /// 現有庫存（`None` 表示缺值或無法解析）
    pub stock: Option<Decimal>,
}

impl RawMaterial {
    /// 創建新的原物料
    pub fn new(code: String, name: String, stock: Option<Decimal>) -> Result<Self> {
        let material = Self {
            id: Uuid::new_v4(),
            code,
            name,
            description: None,
            unit: None,
            stock,
        };
        material.validate()?;
        Ok(material)
    }

    /// 建構器模式：指定ID（來自遠端 API）
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 建構器模式：設置計量單位
    pub fn with_unit(mut self, unit: String) -> Self {
        self.unit = Some(unit);
        self
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// 驗證欄位
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(CatalogError::EmptyCode("原物料"));
        }
        if let Some(stock) = self.stock {
            if stock < Decimal::ZERO {
                return Err(CatalogError::NegativeValue {
                    field: "stock",
                    value: stock,
                });
            }
        }
        Ok(())
    }

    /// 計算用庫存：缺值以 0 計算
    pub fn effective_stock(&self) -> Decimal {
        self.stock.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_raw_material() {
        let flour = RawMaterial::new(
            "FLOUR".to_string(),
            "Wheat flour".to_string(),
            Some(Decimal::from(50)),
        )
        .unwrap()
        .with_unit("kg".to_string());

        assert_eq!(flour.code, "FLOUR");
        assert_eq!(flour.unit.as_deref(), Some("kg"));
        assert_eq!(flour.effective_stock(), Decimal::from(50));
    }

    #[test]
    fn test_missing_stock_is_zero() {
        let salt = RawMaterial::new("SALT".to_string(), "Salt".to_string(), None).unwrap();
        assert_eq!(salt.effective_stock(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_stock_rejected() {
        let err = RawMaterial::new(
            "MILK".to_string(),
            "Milk".to_string(),
            Some(Decimal::new(-5, 1)),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NegativeValue { field: "stock", .. }
        ));
    }
}
