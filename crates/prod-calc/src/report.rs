//! 生產建議報表（對應遠端 API `/api/production/suggestion` 的回應格式）

use prod_core::{CatalogError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SuggestionResult;

/// 報表行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub product_id: Uuid,
    pub product_code: String,
    pub product_name: String,
    pub product_price: Decimal,
    pub quantity_to_produce: u64,
    pub total_value: Decimal,
}

/// 生產建議報表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    pub suggestions: Vec<ReportLine>,
    pub total_value: Decimal,
}

impl ProductionReport {
    pub fn from_result(result: &SuggestionResult) -> Self {
        let suggestions = result
            .suggestions
            .iter()
            .map(|s| ReportLine {
                product_id: s.product_id,
                product_code: s.product_code.clone(),
                product_name: s.product_name.clone(),
                product_price: s.unit_price,
                quantity_to_produce: s.max_quantity,
                total_value: s.total_value,
            })
            .collect();

        Self {
            suggestions,
            total_value: result.total_value,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CatalogError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_suggestions;
    use prod_core::{Product, RawMaterial, Requirement};

    fn sample_result() -> SuggestionResult {
        let flour =
            RawMaterial::new("FLOUR".to_string(), "Flour".to_string(), Some(Decimal::from(10)))
                .unwrap();
        let cake = Product::new(
            "CAKE".to_string(),
            "Cake".to_string(),
            Some(Decimal::new(4550, 2)),
        )
        .unwrap();
        let requirements = vec![Requirement::new(cake.id, flour.id, Decimal::from(4))];

        compute_suggestions(&[cake], &[flour], &requirements).unwrap()
    }

    #[test]
    fn test_report_lines() {
        let report = ProductionReport::from_result(&sample_result());

        assert_eq!(report.suggestions.len(), 1);
        let line = &report.suggestions[0];
        assert_eq!(line.product_code, "CAKE");
        assert_eq!(line.product_price, Decimal::new(4550, 2));
        assert_eq!(line.quantity_to_produce, 2);
        assert_eq!(line.total_value, Decimal::from(91));
        assert_eq!(report.total_value, Decimal::from(91));
    }

    #[test]
    fn test_report_json_uses_camel_case() {
        let report = ProductionReport::from_result(&sample_result());
        let json = report.to_json().unwrap();

        assert!(json.contains("\"productCode\":\"CAKE\""));
        assert!(json.contains("\"quantityToProduce\":2"));
        assert!(json.contains("\"totalValue\""));

        let parsed = ProductionReport::from_json(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_report_from_invalid_json() {
        assert!(matches!(
            ProductionReport::from_json("{\"suggestions\": 3}"),
            Err(CatalogError::Serialization(_))
        ));
    }
}
