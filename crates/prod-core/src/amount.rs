//! 數值輸入邊界
//!
//! 遠端 API 與表單送來的價格、庫存可能為空或無法解析。
//! 在此轉為 `Option<Decimal>`，`None` 代表「缺值」，
//! 之後由 [`Product::effective_price`](crate::Product::effective_price) 與
//! [`RawMaterial::effective_stock`](crate::RawMaterial::effective_stock) 明確地以 0 計算。

use rust_decimal::Decimal;
use std::str::FromStr;

/// 解析數量/金額字串
///
/// 空字串或非數值回傳 `None`；接受科學記號（如 `1e3`）。
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
