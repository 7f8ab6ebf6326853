//! 版本化產品目錄
//!
//! 目錄由外部持久層同步，每次成功異動都會遞增版本號。
//! 計算引擎只讀取 [`CatalogSnapshot`]（擁有所有權的複本），不持有目錄本身的引用。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CatalogError, Product, RawMaterial, Requirement, Result};

/// 產品目錄
#[derive(Debug, Clone)]
pub struct Catalog {
    id: Uuid,
    products: Vec<Product>,
    raw_materials: Vec<RawMaterial>,
    requirements: Vec<Requirement>,
    version: u64,
    updated_at: DateTime<Utc>,
}

/// 目錄快照（某一版本的完整複本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// 來源目錄ID
    pub catalog_id: Uuid,

    /// 目錄版本
    pub version: u64,

    /// 快照時間
    pub taken_at: DateTime<Utc>,

    pub products: Vec<Product>,
    pub raw_materials: Vec<RawMaterial>,
    pub requirements: Vec<Requirement>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            products: Vec::new(),
            raw_materials: Vec::new(),
            requirements: Vec::new(),
            version: 0,
            updated_at: Utc::now(),
        }
    }

    /// 目錄ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 目前版本
    pub fn version(&self) -> u64 {
        self.version
    }

    /// 最後異動時間
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 取得目前版本的快照
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            catalog_id: self.id,
            version: self.version,
            taken_at: Utc::now(),
            products: self.products.clone(),
            raw_materials: self.raw_materials.clone(),
            requirements: self.requirements.clone(),
        }
    }

    // ---- 產品 ----

    /// 所有產品（目錄順序）
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 依ID查找產品
    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 新增產品
    pub fn add_product(&mut self, product: Product) -> Result<Uuid> {
        product.validate()?;
        if self.products.iter().any(|p| p.code == product.code) {
            return Err(CatalogError::DuplicateCode(product.code));
        }

        let id = product.id;
        self.products.push(product);
        self.touch();
        Ok(id)
    }

    /// 更新產品（依ID覆寫）
    pub fn update_product(&mut self, product: Product) -> Result<()> {
        product.validate()?;
        if self
            .products
            .iter()
            .any(|p| p.id != product.id && p.code == product.code)
        {
            return Err(CatalogError::DuplicateCode(product.code));
        }

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(CatalogError::ProductNotFound(product.id))?;
        *slot = product;
        self.touch();
        Ok(())
    }

    /// 刪除產品及其所有用量關聯
    pub fn remove_product(&mut self, id: Uuid) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))?;

        let product = self.products.remove(index);
        self.requirements.retain(|r| r.product_id != id);
        self.touch();
        Ok(product)
    }

    // ---- 原物料 ----

    /// 所有原物料（目錄順序）
    pub fn raw_materials(&self) -> &[RawMaterial] {
        &self.raw_materials
    }

    /// 依ID查找原物料
    pub fn raw_material(&self, id: Uuid) -> Option<&RawMaterial> {
        self.raw_materials.iter().find(|m| m.id == id)
    }

    /// 新增原物料
    pub fn add_raw_material(&mut self, material: RawMaterial) -> Result<Uuid> {
        material.validate()?;
        if self.raw_materials.iter().any(|m| m.code == material.code) {
            return Err(CatalogError::DuplicateCode(material.code));
        }

        let id = material.id;
        self.raw_materials.push(material);
        self.touch();
        Ok(id)
    }

    /// 更新原物料（依ID覆寫，包含庫存）
    pub fn update_raw_material(&mut self, material: RawMaterial) -> Result<()> {
        material.validate()?;
        if self
            .raw_materials
            .iter()
            .any(|m| m.id != material.id && m.code == material.code)
        {
            return Err(CatalogError::DuplicateCode(material.code));
        }

        let slot = self
            .raw_materials
            .iter_mut()
            .find(|m| m.id == material.id)
            .ok_or(CatalogError::RawMaterialNotFound(material.id))?;
        *slot = material;
        self.touch();
        Ok(())
    }

    /// 刪除原物料及引用它的用量關聯
    pub fn remove_raw_material(&mut self, id: Uuid) -> Result<RawMaterial> {
        let index = self
            .raw_materials
            .iter()
            .position(|m| m.id == id)
            .ok_or(CatalogError::RawMaterialNotFound(id))?;

        let material = self.raw_materials.remove(index);
        self.requirements.retain(|r| r.raw_material_id != id);
        self.touch();
        Ok(material)
    }

    // ---- 用量關聯 ----

    /// 所有用量關聯
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// 指定產品的用量關聯
    pub fn requirements_for(&self, product_id: Uuid) -> Vec<&Requirement> {
        self.requirements
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }

    /// 新增用量關聯
    ///
    /// 產品與原物料必須存在，且同一組產品/原物料只能有一筆關聯。
    /// 單位用量 <= 0 仍會被接受，計算時排除。
    pub fn add_requirement(&mut self, requirement: Requirement) -> Result<Uuid> {
        if self.product(requirement.product_id).is_none() {
            return Err(CatalogError::ProductNotFound(requirement.product_id));
        }
        if self.raw_material(requirement.raw_material_id).is_none() {
            return Err(CatalogError::RawMaterialNotFound(
                requirement.raw_material_id,
            ));
        }
        if self.requirements.iter().any(|r| {
            r.product_id == requirement.product_id
                && r.raw_material_id == requirement.raw_material_id
        }) {
            return Err(CatalogError::DuplicateRequirement {
                product_id: requirement.product_id,
                raw_material_id: requirement.raw_material_id,
            });
        }

        let id = requirement.id;
        self.requirements.push(requirement);
        self.touch();
        Ok(id)
    }

    /// 刪除用量關聯
    pub fn remove_requirement(&mut self, id: Uuid) -> Result<Requirement> {
        let index = self
            .requirements
            .iter()
            .position(|r| r.id == id)
            .ok_or(CatalogError::RequirementNotFound(id))?;

        let requirement = self.requirements.remove(index);
        self.touch();
        Ok(requirement)
    }

    /// 刪除產品的所有用量關聯，回傳刪除筆數
    pub fn remove_requirements_for_product(&mut self, product_id: Uuid) -> usize {
        let before = self.requirements.len();
        self.requirements.retain(|r| r.product_id != product_id);
        let removed = before - self.requirements.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
