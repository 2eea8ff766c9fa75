//! Catalog management service: categories, inventory items, kiosk browse
//! projections and bulk loading.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        category::{Category, CategoryView, CreateCategory, UpdateCategory},
        enums::RecordStatus,
        inventory::{
            CategoryProduct, CreateInventoryItem, InventoryItemDetails, LoadItems, UniqueProduct,
            UpdateInventoryItem,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    fn decode_picture(picture: Option<&str>) -> AppResult<Option<Vec<u8>>> {
        picture
            .map(|p| {
                BASE64
                    .decode(p)
                    .map_err(|_| AppError::Validation("Invalid base64 image data".to_string()))
            })
            .transpose()
    }

    async fn require_category_id(&self, name: &str) -> AppResult<i32> {
        self.repository
            .categories
            .id_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found.", name)))
    }

    async fn require_employee_id(&self, emp_code: &str) -> AppResult<i32> {
        self.repository
            .employees
            .get_by_emp_code(emp_code)
            .await?
            .map(|e| e.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("User with emp_code {} not found.", emp_code))
            })
    }

    // -----------------------------------------------------------------
    // Kiosk browse projections
    // -----------------------------------------------------------------

    /// Product tiles for the take screen
    pub async fn unique_products(&self) -> AppResult<Vec<UniqueProduct>> {
        let products = self.repository.inventory.unique_available_products().await?;
        if products.is_empty() {
            return Err(AppError::NotFound("No products found".to_string()));
        }
        Ok(products)
    }

    /// Active categories with their images
    pub async fn active_categories(&self) -> AppResult<Vec<CategoryView>> {
        let categories = self.repository.categories.list_active().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories found".to_string()));
        }
        Ok(categories
            .into_iter()
            .map(|c| CategoryView {
                category_id: c.id,
                category_name: c.name,
                category_image: c.picture.map(|p| BASE64.encode(p)),
            })
            .collect())
    }

    /// Active products of one category
    pub async fn products_by_category(&self, category_id: i32) -> AppResult<Vec<CategoryProduct>> {
        // Surfaces a 404 for unknown categories instead of an empty list
        self.repository.categories.get(category_id).await?;
        self.repository.inventory.products_by_category(category_id).await
    }

    /// All items of a category (by name), with resolved references
    pub async fn filter_products(&self, category_name: &str) -> AppResult<Vec<InventoryItemDetails>> {
        let category_id = self.require_category_id(category_name).await?;
        self.repository.inventory.filter_by_category(category_id).await
    }

    // -----------------------------------------------------------------
    // Inventory administration
    // -----------------------------------------------------------------

    pub async fn create_item(&self, item: CreateInventoryItem) -> AppResult<i32> {
        item.validate()?;

        let category_id = self.require_category_id(&item.category_name).await?;
        let created_by = self.require_employee_id(&item.created_by).await?;
        let updated_by = self.require_employee_id(&item.updated_by).await?;
        let picture = Self::decode_picture(item.picture.as_deref())?;

        self.repository
            .inventory
            .create(
                &item.item_code,
                &item.name,
                category_id,
                item.price,
                item.status.as_deref().unwrap_or(RecordStatus::Active.as_code()),
                picture,
                created_by,
                updated_by,
            )
            .await
    }

    pub async fn get_item(&self, id: i32) -> AppResult<InventoryItemDetails> {
        self.repository.inventory.get_details(id).await
    }

    pub async fn list_items(&self) -> AppResult<Vec<InventoryItemDetails>> {
        self.repository.inventory.list_details().await
    }

    pub async fn update_item(&self, id: i32, update: UpdateInventoryItem) -> AppResult<()> {
        update.validate()?;

        let updated_by = match update.updated_by.as_deref() {
            Some(code) => Some(self.require_employee_id(code).await?),
            None => None,
        };
        let picture = Self::decode_picture(update.picture.as_deref())?;

        let rows = self
            .repository
            .inventory
            .update(
                id,
                update.name,
                update.category_id,
                update.price,
                update.status,
                picture,
                updated_by,
            )
            .await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Inventory item with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_item(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.inventory.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Inventory item with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Bulk-create one catalog row per item code, all or nothing
    pub async fn load_items(&self, load: LoadItems) -> AppResult<usize> {
        load.validate()?;

        let category_id = self.require_category_id(&load.category_name).await?;
        let created_by = self.require_employee_id(&load.created_by).await?;
        let updated_by = self.require_employee_id(&load.updated_by).await?;
        let status = load.status.as_deref().unwrap_or(RecordStatus::Active.as_code());

        let codes: Vec<&str> = load
            .item_codes
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if codes.is_empty() {
            return Err(AppError::Validation(
                "No valid item_codes provided.".to_string(),
            ));
        }

        let mut tx = self.repository.pool.begin().await?;
        for code in &codes {
            self.repository
                .inventory
                .insert_unit(
                    &mut tx,
                    code,
                    &load.name,
                    category_id,
                    load.price,
                    status,
                    created_by,
                    updated_by,
                )
                .await?;
        }
        tx.commit().await?;

        Ok(codes.len())
    }

    // -----------------------------------------------------------------
    // Category administration
    // -----------------------------------------------------------------

    pub async fn create_category(&self, category: CreateCategory) -> AppResult<i32> {
        category.validate()?;
        let picture = Self::decode_picture(category.picture.as_deref())?;
        self.repository
            .categories
            .create(
                &category.name,
                category.status.as_deref().unwrap_or(RecordStatus::Active.as_code()),
                picture,
                category.created_by,
            )
            .await
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repository.categories.get(id).await
    }

    pub async fn update_category(&self, id: i32, update: UpdateCategory) -> AppResult<()> {
        let picture = Self::decode_picture(update.picture.as_deref())?;
        let rows = self
            .repository
            .categories
            .update(id, update.name, update.status, picture, update.updated_by)
            .await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.categories.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
