//! 烘焙坊生產建議示例

use prod_cache::SuggestionCache;
use prod_calc::ProductionReport;
use prod_core::{parse_amount, Catalog, Product, RawMaterial, Requirement};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 烘焙坊生產建議示例 ===\n");

    let mut catalog = Catalog::new();

    // 原物料（「abc」模擬表單送來的無效庫存，以 0 計算）
    let flour = catalog.add_raw_material(
        RawMaterial::new("FLOUR".to_string(), "Wheat flour".to_string(), parse_amount("50"))?
            .with_unit("kg".to_string()),
    )?;
    let sugar = catalog.add_raw_material(
        RawMaterial::new("SUGAR".to_string(), "Refined sugar".to_string(), parse_amount("30"))?
            .with_unit("kg".to_string()),
    )?;
    let eggs = catalog.add_raw_material(
        RawMaterial::new("EGG".to_string(), "Fresh eggs".to_string(), parse_amount("100"))?
            .with_unit("unit".to_string()),
    )?;
    let yeast = catalog.add_raw_material(
        RawMaterial::new("YEAST".to_string(), "Fresh yeast".to_string(), parse_amount("abc"))?
            .with_unit("kg".to_string()),
    )?;

    // 產品
    let cake = catalog.add_product(
        Product::new("CAKE".to_string(), "Chocolate cake".to_string(), parse_amount("45.00"))?
            .with_description("Traditional chocolate cake".to_string()),
    )?;
    let bread = catalog.add_product(Product::new(
        "BREAD".to_string(),
        "Homemade bread".to_string(),
        parse_amount("12.00"),
    )?)?;
    let cookie = catalog.add_product(Product::new(
        "COOKIE".to_string(),
        "Butter cookie".to_string(),
        parse_amount("18.00"),
    )?)?;

    // 用量
    for (product, material, qty) in [
        (cake, flour, "0.5"),
        (cake, sugar, "0.3"),
        (cake, eggs, "4"),
        (bread, flour, "1.0"),
        (bread, yeast, "0.05"),
        (cookie, flour, "0.4"),
        (cookie, sugar, "0.2"),
        (cookie, eggs, "2"),
    ] {
        let quantity = parse_amount(qty).ok_or("無效的用量")?;
        catalog.add_requirement(Requirement::new(product, material, quantity))?;
    }

    let mut cache = SuggestionCache::default();
    let result = cache.get_or_calculate(&catalog)?;

    println!("\n生產建議:");
    for suggestion in &result.suggestions {
        println!(
            "  - {} ({}): 數量 {}, 產值 {}",
            suggestion.product_code,
            suggestion.product_name,
            suggestion.max_quantity,
            suggestion.total_value
        );
    }
    println!("總產值: {}", result.total_value);

    for warning in &result.warnings {
        println!("  [{:?}] {}", warning.severity, warning.message);
    }

    println!("\nAPI 回應:");
    println!("{}", ProductionReport::from_result(result).to_json()?);

    Ok(())
}
