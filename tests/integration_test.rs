//! 集成測試

use prod_cache::SuggestionCache;
use prod_calc::{ProductionAllocator, ProductionReport, WarningKind};
use prod_core::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

/// 烘焙坊目錄：8 種原物料、3 種產品
struct Bakery {
    catalog: Catalog,
    materials: HashMap<&'static str, Uuid>,
    products: HashMap<&'static str, Uuid>,
}

fn dec(value: &str) -> Decimal {
    parse_amount(value).unwrap()
}

fn bakery() -> Bakery {
    let mut catalog = Catalog::new();
    let mut materials = HashMap::new();
    let mut products = HashMap::new();

    for (code, name, unit, stock) in [
        ("FLOUR", "Wheat flour", "kg", "50"),
        ("SUGAR", "Refined sugar", "kg", "30"),
        ("EGG", "Fresh eggs", "unit", "100"),
        ("BUTTER", "Unsalted butter", "kg", "15"),
        ("COCOA", "Cocoa powder", "kg", "10"),
        ("YEAST", "Fresh yeast", "kg", "5"),
        ("SALT", "Refined salt", "kg", "20"),
        ("MILK", "Whole milk", "litre", "25"),
    ] {
        let material = RawMaterial::new(code.to_string(), name.to_string(), Some(dec(stock)))
            .unwrap()
            .with_unit(unit.to_string());
        materials.insert(code, catalog.add_raw_material(material).unwrap());
    }

    for (code, name, price) in [
        ("CAKE", "Chocolate cake", "45.00"),
        ("BREAD", "Homemade bread", "12.00"),
        ("COOKIE", "Butter cookie", "18.00"),
    ] {
        let product =
            Product::new(code.to_string(), name.to_string(), Some(dec(price))).unwrap();
        products.insert(code, catalog.add_product(product).unwrap());
    }

    for (product, material, qty) in [
        ("CAKE", "FLOUR", "0.5"),
        ("CAKE", "SUGAR", "0.3"),
        ("CAKE", "EGG", "4"),
        ("CAKE", "BUTTER", "0.2"),
        ("CAKE", "COCOA", "0.2"),
        ("BREAD", "FLOUR", "1.0"),
        ("BREAD", "YEAST", "0.05"),
        ("BREAD", "SALT", "0.02"),
        ("COOKIE", "FLOUR", "0.4"),
        ("COOKIE", "SUGAR", "0.2"),
        ("COOKIE", "BUTTER", "0.3"),
        ("COOKIE", "EGG", "2"),
    ] {
        catalog
            .add_requirement(Requirement::new(
                products[product],
                materials[material],
                dec(qty),
            ))
            .unwrap();
    }

    Bakery {
        catalog,
        materials,
        products,
    }
}

#[test]
fn test_bakery_production_plan() {
    let bakery = bakery();
    let result = ProductionAllocator::default()
        .calculate_snapshot(&bakery.catalog.snapshot())
        .unwrap();

    // CAKE (45): FLOUR 100, SUGAR 100, EGG 25, BUTTER 75, COCOA 50 → 25
    // 剩餘 FLOUR 37.5, SUGAR 22.5, EGG 0, BUTTER 10
    // COOKIE (18): EGG 0 → 無法生產
    // BREAD (12): FLOUR 37, YEAST 100, SALT 1000 → 37
    assert_eq!(result.suggestions.len(), 2);

    let cake = &result.suggestions[0];
    assert_eq!(cake.product_id, bakery.products["CAKE"]);
    assert_eq!(cake.max_quantity, 25);
    assert_eq!(cake.total_value, Decimal::from(1125));
    assert_eq!(cake.consumption[&bakery.materials["EGG"]], Decimal::from(100));
    assert_eq!(cake.consumption[&bakery.materials["FLOUR"]], dec("12.5"));

    let bread = &result.suggestions[1];
    assert_eq!(bread.product_id, bakery.products["BREAD"]);
    assert_eq!(bread.max_quantity, 37);
    assert_eq!(bread.total_value, Decimal::from(444));

    assert!(result.suggestion_for(bakery.products["COOKIE"]).is_none());
    assert!(result.warnings.iter().any(|w| {
        w.kind == WarningKind::NotProducible && w.subject_id == bakery.products["COOKIE"]
    }));

    assert_eq!(result.total_value, Decimal::from(1569));
    assert!(result.total_consumed(bakery.materials["FLOUR"]) <= Decimal::from(50));
}

#[test]
fn test_catalog_unchanged_by_calculation() {
    let bakery = bakery();
    let before = bakery.catalog.snapshot();

    ProductionAllocator::default()
        .calculate_snapshot(&before)
        .unwrap();

    let after = bakery.catalog.snapshot();
    assert_eq!(before.raw_materials, after.raw_materials);
    assert_eq!(before.version, after.version);
}

#[test]
fn test_recalculation_after_restock() {
    let mut bakery = bakery();
    let mut cache = SuggestionCache::default();

    let initial = cache.get_or_calculate(&bakery.catalog).unwrap().total_value;
    assert_eq!(initial, Decimal::from(1569));

    // 補充雞蛋後 COOKIE 可以生產
    let egg_id = bakery.materials["EGG"];
    let mut egg = bakery.catalog.raw_material(egg_id).unwrap().clone();
    egg.stock = Some(Decimal::from(300));
    bakery.catalog.update_raw_material(egg).unwrap();

    // CAKE 受可可粉限制為 50，剩餘 EGG 100、BUTTER 5 → COOKIE 16
    let result = cache.get_or_calculate(&bakery.catalog).unwrap();
    assert_eq!(result.suggestions[0].max_quantity, 50);
    let cookie = result.suggestion_for(bakery.products["COOKIE"]).unwrap();
    assert_eq!(cookie.max_quantity, 16);
    assert_eq!(cache.recalculations(), 2);
}

#[test]
fn test_delete_product_removes_suggestion() {
    let mut bakery = bakery();
    bakery.catalog.remove_product(bakery.products["CAKE"]).unwrap();

    let result = ProductionAllocator::default()
        .calculate_snapshot(&bakery.catalog.snapshot())
        .unwrap();

    // COOKIE (18): FLOUR 125, SUGAR 150, BUTTER 50, EGG 50 → 50
    assert_eq!(result.suggestions[0].product_id, bakery.products["COOKIE"]);
    assert_eq!(result.suggestions[0].max_quantity, 50);
    assert!(result.suggestion_for(bakery.products["CAKE"]).is_none());
}

#[test]
fn test_report_matches_api_shape() {
    let bakery = bakery();
    let result = ProductionAllocator::default()
        .calculate_snapshot(&bakery.catalog.snapshot())
        .unwrap();
    let report = ProductionReport::from_result(&result);

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let first = &json["suggestions"][0];
    assert_eq!(first["productCode"], "CAKE");
    assert_eq!(first["quantityToProduce"], 25);
    assert!(first.get("productPrice").is_some());
    assert!(json.get("totalValue").is_some());
}

#[test]
fn test_config_from_json_changes_tie_break() {
    let mut catalog = Catalog::new();
    let flour = catalog
        .add_raw_material(
            RawMaterial::new("FLOUR".to_string(), "Flour".to_string(), Some(Decimal::from(2)))
                .unwrap(),
        )
        .unwrap();
    let mut ids = Vec::new();
    for code in ["ZETA", "ALPHA"] {
        let id = catalog
            .add_product(
                Product::new(code.to_string(), code.to_string(), Some(Decimal::from(7)))
                    .unwrap(),
            )
            .unwrap();
        catalog
            .add_requirement(Requirement::new(id, flour, Decimal::from(2)))
            .unwrap();
        ids.push(id);
    }

    let config = AllocationConfig::from_json_str(r#"{"tie_break":"Code"}"#).unwrap();
    let result = ProductionAllocator::new(config)
        .calculate_snapshot(&catalog.snapshot())
        .unwrap();

    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].product_id, ids[1]);
}
