//! 版本標記緩存

use prod_calc::{ProductionAllocator, SuggestionResult};
use prod_core::Catalog;
use uuid::Uuid;

/// 緩存的計算結果及其來源版本
struct CachedSuggestions {
    catalog_id: Uuid,
    version: u64,
    result: SuggestionResult,
}

/// 生產建議緩存
///
/// 以（目錄ID, 版本）為鍵；目錄任何異動都會遞增版本，因此版本相同即代表輸入相同。
pub struct SuggestionCache {
    allocator: ProductionAllocator,
    cached: Option<CachedSuggestions>,
    recalculations: u64,
}

impl SuggestionCache {
    /// 創建新的緩存
    pub fn new(allocator: ProductionAllocator) -> Self {
        Self {
            allocator,
            cached: None,
            recalculations: 0,
        }
    }

    /// 取得目前目錄的生產建議，版本變更時重新計算
    pub fn get_or_calculate(&mut self, catalog: &Catalog) -> prod_core::Result<&SuggestionResult> {
        if !self.is_fresh(catalog) {
            let snapshot = catalog.snapshot();
            tracing::debug!(
                "目錄 {} 版本 {} 未緩存，重新計算",
                snapshot.catalog_id,
                snapshot.version
            );

            let result = self.allocator.calculate_snapshot(&snapshot)?;
            self.recalculations += 1;
            self.cached = Some(CachedSuggestions {
                catalog_id: snapshot.catalog_id,
                version: snapshot.version,
                result,
            });
        }

        match &self.cached {
            Some(cached) => Ok(&cached.result),
            None => Err(prod_core::CatalogError::CalculationError(
                "緩存結果遺失".to_string(),
            )),
        }
    }

    /// 緩存是否對應目錄目前版本
    pub fn is_fresh(&self, catalog: &Catalog) -> bool {
        matches!(
            &self.cached,
            Some(cached) if cached.catalog_id == catalog.id() && cached.version == catalog.version()
        )
    }

    /// 清除緩存
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// 已執行的計算次數
    pub fn recalculations(&self) -> u64 {
        self.recalculations
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(ProductionAllocator::default())
    }
}
