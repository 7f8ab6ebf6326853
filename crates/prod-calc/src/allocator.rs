//! 生產建議主計算器

use prod_core::{AllocationConfig, CatalogSnapshot, Product, RawMaterial, Requirement};
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::capacity::CapacityCalculator;
use crate::ordering::ProductOrdering;
use crate::{AllocationWarning, ProductionSuggestion, SuggestionResult, WarningKind};

/// 以預設配置計算生產建議
pub fn compute_suggestions(
    products: &[Product],
    raw_materials: &[RawMaterial],
    requirements: &[Requirement],
) -> prod_core::Result<SuggestionResult> {
    ProductionAllocator::default().calculate(products, raw_materials, requirements)
}

/// 生產建議計算器
///
/// 貪婪分配：產品依單價由高到低處理，每個產品以「目前剩餘」庫存計算最大可生產數量，
/// 立即扣除耗用後才處理下一個產品，不回溯。
/// 計算器本身不保存任何跨次計算的狀態。
#[derive(Debug, Clone, Default)]
pub struct ProductionAllocator {
    config: AllocationConfig,
}

impl ProductionAllocator {
    /// 創建新的計算器
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// 對目錄快照計算生產建議
    pub fn calculate_snapshot(
        &self,
        snapshot: &CatalogSnapshot,
    ) -> prod_core::Result<SuggestionResult> {
        tracing::debug!(
            "目錄 {} 版本 {} 快照計算",
            snapshot.catalog_id,
            snapshot.version
        );
        self.calculate(
            &snapshot.products,
            &snapshot.raw_materials,
            &snapshot.requirements,
        )
    }

    /// 主計算入口
    pub fn calculate(
        &self,
        products: &[Product],
        raw_materials: &[RawMaterial],
        requirements: &[Requirement],
    ) -> prod_core::Result<SuggestionResult> {
        tracing::info!(
            "開始生產建議計算：產品 {} 筆，原物料 {} 筆，用量 {} 筆",
            products.len(),
            raw_materials.len(),
            requirements.len()
        );

        let start_time = std::time::Instant::now();
        let mut result = SuggestionResult::empty();

        // Step 1: 建立工作庫存副本
        let mut available = self.create_stock_map(raw_materials, &mut result);

        // Step 2: 有效用量（排除 <= 0、合併同原物料）
        let grouped = self.group_requirements(requirements, &mut result);

        // Step 3: 單價由高到低排序
        let ordered = ProductOrdering::new(self.config.tie_break).sort(products);
        tracing::debug!(
            "處理順序: {:?}",
            ordered.iter().map(|p| p.code.as_str()).collect::<Vec<_>>()
        );

        // Step 4: 逐產品分配
        for product in ordered {
            let product_requirements = grouped
                .get(&product.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            if product_requirements.is_empty() {
                tracing::debug!("產品 {} 沒有有效用量，跳過", product.code);
                self.record(
                    &mut result,
                    WarningKind::Unconstrained,
                    product.id,
                    format!("產品 {} 沒有有效用量，不列入建議", product.code),
                );
                continue;
            }

            for req in product_requirements {
                if !available.contains_key(&req.raw_material_id) {
                    tracing::warn!(
                        "產品 {} 引用的原物料 {} 不在庫存中，以 0 計算",
                        product.code,
                        req.raw_material_id
                    );
                    self.record(
                        &mut result,
                        WarningKind::MissingReference,
                        req.raw_material_id,
                        format!(
                            "產品 {} 引用的原物料 {} 不在庫存中",
                            product.code, req.raw_material_id
                        ),
                    );
                }
            }

            let quantity = CapacityCalculator::max_producible(product_requirements, &available)?;
            if quantity == 0 {
                tracing::debug!("產品 {} 目前庫存無法生產", product.code);
                self.record(
                    &mut result,
                    WarningKind::NotProducible,
                    product.id,
                    format!("產品 {} 目前庫存無法生產", product.code),
                );
                continue;
            }

            if !product.has_price() {
                self.record(
                    &mut result,
                    WarningKind::MissingPrice,
                    product.id,
                    format!("產品 {} 單價缺值，產值以 0 計算", product.code),
                );
            }

            // 產值或總產值超出 Decimal 範圍時跳過此產品，不扣庫存
            let value = product
                .effective_price()
                .checked_mul(Decimal::from(quantity))
                .filter(|value| result.total_value.checked_add(*value).is_some());
            if value.is_none() {
                tracing::warn!("產品 {} 產值溢位 (數量 {})，跳過", product.code, quantity);
                self.record(
                    &mut result,
                    WarningKind::ValueOverflow,
                    product.id,
                    format!(
                        "產品 {} 建議數量 {} 的產值超出可計算範圍，不列入建議",
                        product.code, quantity
                    ),
                );
                continue;
            }

            let consumption =
                match CapacityCalculator::consume(product_requirements, quantity, &mut available) {
                    Ok(consumption) => consumption,
                    Err(err) => {
                        tracing::warn!("產品 {} 扣除庫存失敗: {}", product.code, err);
                        self.record(
                            &mut result,
                            WarningKind::ValueOverflow,
                            product.id,
                            format!("產品 {} 扣除庫存失敗: {}", product.code, err),
                        );
                        continue;
                    }
                };
            let suggestion = ProductionSuggestion::new(product, quantity, consumption)?;

            tracing::debug!(
                "產品 {} 建議生產 {} (產值: {})",
                product.code,
                quantity,
                suggestion.total_value
            );

            result.push(suggestion)?;
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("生產建議計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "建議數量: {}，總產值: {}",
            result.suggestions.len(),
            result.total_value
        );

        Ok(result)
    }

    /// 建立工作庫存映射（原物料ID → 可用庫存）
    fn create_stock_map(
        &self,
        raw_materials: &[RawMaterial],
        result: &mut SuggestionResult,
    ) -> HashMap<Uuid, Decimal> {
        let mut available = HashMap::with_capacity(raw_materials.len());

        for material in raw_materials {
            if material.stock.is_none() {
                self.record(
                    result,
                    WarningKind::MissingStock,
                    material.id,
                    format!("原物料 {} 庫存缺值，以 0 計算", material.code),
                );
            }
            // 負庫存視同 0，確保扣除後不會出現負值
            let stock = material.effective_stock().max(Decimal::ZERO);
            available.insert(material.id, stock);
        }

        available
    }

    /// 按產品分組有效用量
    ///
    /// 單位用量 <= 0 的關聯被排除；同一產品對同一原物料的多筆用量合併為一筆（用量相加）。
    fn group_requirements(
        &self,
        requirements: &[Requirement],
        result: &mut SuggestionResult,
    ) -> HashMap<Uuid, Vec<Requirement>> {
        let mut grouped: HashMap<Uuid, Vec<Requirement>> = HashMap::new();

        for req in requirements {
            if !req.is_active() {
                tracing::warn!(
                    "排除無效用量: 產品 {} / 原物料 {} 單位用量 {}",
                    req.product_id,
                    req.raw_material_id,
                    req.quantity_per_unit
                );
                self.record(
                    result,
                    WarningKind::InactiveRequirement,
                    req.id,
                    format!(
                        "產品 {} 對原物料 {} 的單位用量 {} 不大於 0，已排除",
                        req.product_id, req.raw_material_id, req.quantity_per_unit
                    ),
                );
                continue;
            }

            let entries = grouped.entry(req.product_id).or_default();
            let existing = entries
                .iter()
                .position(|r| r.raw_material_id == req.raw_material_id);
            match existing {
                Some(index) => entries[index].quantity_per_unit += req.quantity_per_unit,
                None => entries.push(req.clone()),
            }
        }

        grouped
    }

    fn record(
        &self,
        result: &mut SuggestionResult,
        kind: WarningKind,
        subject_id: Uuid,
        message: String,
    ) {
        if self.config.record_warnings {
            result.add_warning(AllocationWarning::new(kind, subject_id, message));
        }
    }
}
