//! 產品用量（BOM）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 產品與原物料的用量關聯：每生產一單位產品所需的原物料數量
///
/// 單位用量 <= 0 的關聯不會被拒絕，而是在計算前被排除（見 [`Requirement::is_active`]）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// 關聯ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: Uuid,

    /// 原物料ID
    pub raw_material_id: Uuid,

    /// 單位用量
    pub quantity_per_unit: Decimal,
}

impl Requirement {
    /// 創建新的用量關聯
    pub fn new(product_id: Uuid, raw_material_id: Uuid, quantity_per_unit: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            raw_material_id,
            quantity_per_unit,
        }
    }

    /// 是否參與計算（單位用量 > 0）
    pub fn is_active(&self) -> bool {
        self.quantity_per_unit > Decimal::ZERO
    }

    /// 生產指定數量所需的原物料
    pub fn required_for(&self, quantity: u64) -> Option<Decimal> {
        self.quantity_per_unit.checked_mul(Decimal::from(quantity))
    }
}
