//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CatalogError, Result};

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: Uuid,

    /// 產品編碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 說明
    pub description: Option<String>,

    /// 單價（`None` 表示缺值或無法解析）
    pub price: Option<Decimal>,
}

impl Product {
    /// 創建新的產品
    pub fn new(code: String, name: String, price: Option<Decimal>) -> Result<Self> {
        let product = Self {
            id: Uuid::new_v4(),
            code,
            name,
            description: None,
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// 建構器模式：指定ID（來自遠端 API）
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
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
            return Err(CatalogError::EmptyCode("產品"));
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(CatalogError::NegativeValue {
                    field: "price",
                    value: price,
                });
            }
        }
        Ok(())
    }

    /// 計算用單價：缺值以 0 計算
    pub fn effective_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    /// 是否有有效單價
    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }
}
