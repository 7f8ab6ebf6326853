//! 產品處理順序

use prod_core::{Product, TieBreakRule};

/// 產品排序：單價由高到低，同價依 [`TieBreakRule`] 決定
pub struct ProductOrdering {
    tie_break: TieBreakRule,
}

impl ProductOrdering {
    pub fn new(tie_break: TieBreakRule) -> Self {
        Self { tie_break }
    }

    /// 回傳排序後的產品引用（穩定排序，不改動輸入）
    pub fn sort<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut ordered: Vec<&Product> = products.iter().collect();

        match self.tie_break {
            TieBreakRule::CatalogOrder => {
                ordered.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
            }
            TieBreakRule::Code => {
                ordered.sort_by(|a, b| {
                    b.effective_price()
                        .cmp(&a.effective_price())
                        .then_with(|| a.code.cmp(&b.code))
                });
            }
        }

        ordered
    }
}
