//! Ledger administration service.
//!
//! CRUD over the checkout, unreturned and damaged ledgers. The kiosk flows
//! never write through here; this surface exists for back-office tooling and
//! for the external loss-escalation process (which inserts unreturned rows
//! and flips listing reasons to "lost").

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        damaged::{CreateDamagedListing, DamagedListing, UpdateDamagedListing},
        listing::{CheckoutListing, CreateListing, UpdateListing},
        unreturned::{CreateUnreturnedListing, UnreturnedListing, UpdateUnreturnedListing},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LedgersService {
    repository: Repository,
}

impl LedgersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -----------------------------------------------------------------
    // Checkout ledger
    // -----------------------------------------------------------------

    pub async fn list_listings(&self) -> AppResult<Vec<CheckoutListing>> {
        self.repository.listings.list().await
    }

    pub async fn get_listing(&self, id: i32) -> AppResult<CheckoutListing> {
        self.repository.listings.get(id).await
    }

    pub async fn create_listing(&self, listing: CreateListing) -> AppResult<i32> {
        listing.validate()?;
        // Referential checks up front so the caller gets a 404 instead of a
        // masked constraint failure.
        self.repository.inventory.get(listing.inventory_id).await?;
        self.repository.employees.get(listing.employee_id).await?;
        self.repository.listings.create(&listing).await
    }

    pub async fn update_listing(&self, id: i32, update: UpdateListing) -> AppResult<()> {
        let rows = self.repository.listings.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Listing with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_listing(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.listings.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Listing with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Unreturned ledger (loss escalation interface)
    // -----------------------------------------------------------------

    pub async fn list_unreturned(&self) -> AppResult<Vec<UnreturnedListing>> {
        self.repository.unreturned.list().await
    }

    pub async fn create_unreturned(&self, listing: CreateUnreturnedListing) -> AppResult<i32> {
        self.repository.listings.get(listing.listing_id).await?;
        self.repository.employees.get(listing.employee_id).await?;
        self.repository.unreturned.create(&listing).await
    }

    pub async fn update_unreturned(
        &self,
        listing_id: i32,
        update: UpdateUnreturnedListing,
    ) -> AppResult<()> {
        let rows = self
            .repository
            .unreturned
            .update_by_listing(listing_id, &update)
            .await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Listing with ID {} not found",
                listing_id
            )));
        }
        Ok(())
    }

    pub async fn delete_unreturned(&self, listing_id: i32) -> AppResult<()> {
        let rows = self.repository.unreturned.delete_by_listing(listing_id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Listing with ID {} not found",
                listing_id
            )));
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Damaged ledger
    // -----------------------------------------------------------------

    pub async fn list_damaged(&self) -> AppResult<Vec<DamagedListing>> {
        self.repository.damaged.list().await
    }

    pub async fn get_damaged(&self, id: i32) -> AppResult<DamagedListing> {
        self.repository.damaged.get(id).await
    }

    pub async fn create_damaged(&self, listing: CreateDamagedListing) -> AppResult<i32> {
        // 404 when the referenced checkout listing is unknown
        self.repository.listings.get(listing.listing_id).await.map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("Inventory listing not found".to_string()),
            other => other,
        })?;
        self.repository.damaged.create(&listing).await
    }

    pub async fn update_damaged(&self, id: i32, update: UpdateDamagedListing) -> AppResult<()> {
        let rows = self.repository.damaged.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Damaged listing with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_damaged(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.damaged.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Damaged listing with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
