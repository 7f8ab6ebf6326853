//! 最大可生產數量計算

use prod_core::{CatalogError, Requirement, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// 產能計算器
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 以目前剩餘庫存計算最大可生產數量
    ///
    /// 每筆用量取 `floor(可用庫存 / 單位用量)`，結果為所有用量中的最小值。
    /// 沒有用量時回傳 0（不限量生產不列入建議）。
    /// 庫存中找不到的原物料視為 0。
    ///
    /// 單位用量 <= 0 的用量應在上游排除，若仍傳入則回傳 [`CatalogError::InvalidRequirement`]。
    pub fn max_producible(
        requirements: &[Requirement],
        available: &HashMap<Uuid, Decimal>,
    ) -> Result<u64> {
        let mut max_quantity: Option<u64> = None;

        for req in requirements {
            if !req.is_active() {
                return Err(CatalogError::InvalidRequirement {
                    product_id: req.product_id,
                    raw_material_id: req.raw_material_id,
                    quantity_per_unit: req.quantity_per_unit,
                });
            }

            let stock = available
                .get(&req.raw_material_id)
                .copied()
                .unwrap_or(Decimal::ZERO);

            let possible = if stock <= Decimal::ZERO {
                0
            } else {
                // 商數超出 Decimal 或 u64 範圍時以 u64::MAX 為上限，實際耗用仍不超過庫存
                stock
                    .checked_div(req.quantity_per_unit)
                    .and_then(|units| units.floor().to_u64())
                    .unwrap_or(u64::MAX)
            };

            max_quantity = Some(max_quantity.map_or(possible, |q| q.min(possible)));
        }

        Ok(max_quantity.unwrap_or(0))
    }

    /// 從工作庫存扣除生產指定數量所需的原物料，回傳各原物料耗用量
    ///
    /// 先檢查所有用量再扣除；任何一筆失敗時工作庫存保持不變。
    pub fn consume(
        requirements: &[Requirement],
        quantity: u64,
        available: &mut HashMap<Uuid, Decimal>,
    ) -> Result<BTreeMap<Uuid, Decimal>> {
        let mut consumption: BTreeMap<Uuid, Decimal> = BTreeMap::new();

        for req in requirements {
            let used = req.required_for(quantity).ok_or_else(|| {
                CatalogError::CalculationError(format!("原物料 {} 耗用量溢位", req.raw_material_id))
            })?;

            let stock = available
                .get(&req.raw_material_id)
                .copied()
                .ok_or(CatalogError::RawMaterialNotFound(req.raw_material_id))?;
            let total = consumption
                .get(&req.raw_material_id)
                .copied()
                .unwrap_or(Decimal::ZERO)
                .checked_add(used)
                .filter(|total| *total <= stock)
                .ok_or_else(|| {
                    CatalogError::CalculationError(format!(
                        "原物料 {} 庫存不足：需要 {}, 可用 {}",
                        req.raw_material_id, used, stock
                    ))
                })?;
            consumption.insert(req.raw_material_id, total);
        }

        for (material_id, used) in &consumption {
            if let Some(stock) = available.get_mut(material_id) {
                *stock -= *used;
            }
        }

        Ok(consumption)
    }
}
