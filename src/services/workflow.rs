//! Product checkout/return workflow.
//!
//! The core of the kiosk: decides whether a take is permitted, hands out one
//! unit, and routes returns either back into circulation or to the
//! inspection ledger. Every mutating operation runs as a single database
//! transaction; dropping the transaction on an early error rolls it back.

use sqlx::error::ErrorKind;

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::Employee,
        enums::{TakeReason, REASON_LOST, REASON_RETURN},
        listing::HeldProduct,
    },
    repository::Repository,
    services::notifier::NotifierService,
};

/// What an employee currently has checked out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveHolding {
    /// Nothing out
    None,
    /// One listing out; `lost` when its reason marks it as lost
    Holding { lost: bool },
}

/// Outcome of a successful product selection
#[derive(Debug, Clone)]
pub struct SelectedProduct {
    pub item_code: String,
    pub reason: TakeReason,
}

/// Decide whether a take is permitted given the employee's ledger history
/// for the requested product.
///
/// Rules: an employee holds at most one product at a time, unless the held
/// one is lost; the same product can be taken a second time only to replace
/// a loss; never a third time.
pub fn decide_take(
    holding: ActiveHolding,
    prior_takes: i64,
    lost_before: bool,
) -> AppResult<TakeReason> {
    match holding {
        ActiveHolding::Holding { lost: true } => Ok(TakeReason::ReplacementAfterLoss),
        ActiveHolding::Holding { lost: false } => Err(AppError::Conflict(
            "You can only take one product at a time.".to_string(),
        )),
        ActiveHolding::None => {
            if prior_takes == 0 {
                Ok(TakeReason::FirstTake)
            } else if prior_takes == 1 && lost_before {
                Ok(TakeReason::ReplacementAfterLoss)
            } else {
                Err(AppError::Conflict(
                    "You cannot take this product more than twice.".to_string(),
                ))
            }
        }
    }
}

#[derive(Clone)]
pub struct WorkflowService {
    repository: Repository,
    notifier: NotifierService,
}

impl WorkflowService {
    pub fn new(repository: Repository, notifier: NotifierService) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    async fn require_employee(&self, emp_code: &str) -> AppResult<Employee> {
        self.repository
            .employees
            .get_by_emp_code(emp_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User with emp_code {} not found.", emp_code))
            })
    }

    /// Check out one unit of the requested product for an employee.
    ///
    /// Eligibility reads and both writes share one transaction; the
    /// conditional status flip on the unit guarantees at most one winner
    /// when two checkouts race for the same unit.
    pub async fn select_product(
        &self,
        emp_code: &str,
        product_name: &str,
    ) -> AppResult<SelectedProduct> {
        let employee = self.require_employee(emp_code).await?;
        let repo = &self.repository;

        let mut tx = repo.pool.begin().await?;

        if repo
            .unreturned
            .has_active_for_employee(&mut tx, employee.id)
            .await?
        {
            return Err(AppError::Conflict(
                "Please return your previous product first.".to_string(),
            ));
        }

        let holding = match repo
            .listings
            .active_listing_for_employee(&mut tx, employee.id)
            .await?
        {
            Some((_, reason)) => ActiveHolding::Holding {
                lost: reason.as_deref() == Some(REASON_LOST),
            },
            None => ActiveHolding::None,
        };
        let prior_takes = repo
            .listings
            .count_takes(&mut tx, employee.id, product_name)
            .await?;
        let lost_before = repo
            .listings
            .lost_before(&mut tx, employee.id, product_name)
            .await?;

        let reason = decide_take(holding, prior_takes, lost_before)?;

        let (inventory_id, item_code) = repo
            .inventory
            .pick_available_unit(&mut tx, product_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found or inactive.".to_string()))?;

        repo.listings
            .insert_take(&mut tx, inventory_id, employee.id, reason.as_code())
            .await
            .map_err(|e| {
                // The partial unique index on (employee, unit) catches a
                // concurrent duplicate take that slipped past the checks.
                if let AppError::Database(db) = &e {
                    let duplicate = db
                        .as_database_error()
                        .map(|d| d.kind() == ErrorKind::UniqueViolation)
                        .unwrap_or(false);
                    if duplicate {
                        return AppError::Conflict(
                            "You have already taken this product.".to_string(),
                        );
                    }
                }
                e
            })?;

        let claimed = repo.inventory.claim_unit(&mut tx, inventory_id).await?;
        if claimed != 1 {
            tx.rollback().await?;
            return Err(AppError::Conflict(
                "Product is no longer available.".to_string(),
            ));
        }

        tx.commit().await?;

        tracing::info!(
            emp_code,
            product_name,
            item_code = %item_code,
            reason = reason.as_code(),
            "product checked out"
        );

        Ok(SelectedProduct { item_code, reason })
    }

    /// Return a previously checked-out unit and put it back in circulation
    pub async fn return_product(&self, emp_code: &str, item_code: &str) -> AppResult<()> {
        let employee = self.require_employee(emp_code).await?;
        let repo = &self.repository;

        let inventory_id = repo
            .inventory
            .id_by_item_code(item_code)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid item code.".to_string()))?;

        let mut tx = repo.pool.begin().await?;

        let listing_id = repo
            .listings
            .active_listing_linking(&mut tx, inventory_id, employee.id)
            .await?
            .ok_or_else(|| AppError::Conflict("You can't return this item.".to_string()))?;

        let updated = repo
            .listings
            .mark_returned(&mut tx, listing_id, employee.id, Some(REASON_RETURN), false)
            .await?;
        if updated != 1 {
            return Err(AppError::Conflict("You can't return this item.".to_string()));
        }

        repo.inventory.release_unit(&mut tx, inventory_id).await?;

        tx.commit().await?;

        tracing::info!(emp_code, item_code, "product returned");

        Ok(())
    }

    /// Return a unit with an optional damage flag.
    ///
    /// Damaged units go to the inspection ledger and stay out of circulation;
    /// undamaged ones take the normal return path. Returns whether the
    /// damaged branch was taken.
    pub async fn return_damaged_product(
        &self,
        emp_code: &str,
        item_code: &str,
        is_damaged: bool,
        damage_reason: Option<String>,
    ) -> AppResult<bool> {
        if !is_damaged {
            self.return_product(emp_code, item_code).await?;
            return Ok(false);
        }

        let employee = self.require_employee(emp_code).await?;
        let repo = &self.repository;

        let inventory_id = repo
            .inventory
            .id_by_item_code(item_code)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid item code.".to_string()))?;

        let mut tx = repo.pool.begin().await?;

        let listing_id = repo
            .listings
            .active_listing_linking(&mut tx, inventory_id, employee.id)
            .await?
            .ok_or_else(|| AppError::Conflict("You can't return this item.".to_string()))?;

        let updated = repo
            .listings
            .mark_returned(&mut tx, listing_id, employee.id, damage_reason.as_deref(), true)
            .await?;
        if updated != 1 {
            return Err(AppError::Conflict("You can't return this item.".to_string()));
        }

        repo.damaged.insert(&mut tx, listing_id, employee.id).await?;
        // Damaged units do not silently re-enter circulation; they wait for
        // inspection.
        repo.inventory.hold_unit(&mut tx, inventory_id).await?;

        tx.commit().await?;

        tracing::info!(emp_code, item_code, "damaged product returned");

        // Notification is best-effort and must never fail the return.
        let notifier = self.notifier.clone();
        let item_code = item_code.to_string();
        tokio::spawn(async move {
            if let Err(e) = notifier
                .send_damage_notice(&employee, &item_code, damage_reason.as_deref())
                .await
            {
                tracing::warn!("Failed to send damage notice: {}", e);
            }
        });

        Ok(true)
    }

    /// Everything the employee currently holds, for the kiosk return screens
    pub async fn held_products(&self, emp_code: &str) -> AppResult<Vec<HeldProduct>> {
        let employee = self.require_employee(emp_code).await?;
        self.repository.listings.held_products(employee.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_take_is_allowed() {
        let reason = decide_take(ActiveHolding::None, 0, false).unwrap();
        assert_eq!(reason, TakeReason::FirstTake);
    }

    #[test]
    fn holding_a_product_blocks_another_take() {
        let err = decide_take(ActiveHolding::Holding { lost: false }, 0, false).unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg)
            if msg == "You can only take one product at a time."));
    }

    #[test]
    fn holding_a_lost_product_allows_a_replacement() {
        let reason = decide_take(ActiveHolding::Holding { lost: true }, 1, true).unwrap();
        assert_eq!(reason, TakeReason::ReplacementAfterLoss);
    }

    #[test]
    fn second_take_requires_a_prior_loss() {
        let err = decide_take(ActiveHolding::None, 1, false).unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg)
            if msg == "You cannot take this product more than twice."));

        let reason = decide_take(ActiveHolding::None, 1, true).unwrap();
        assert_eq!(reason, TakeReason::ReplacementAfterLoss);
    }

    #[test]
    fn third_take_is_never_allowed() {
        let err = decide_take(ActiveHolding::None, 2, true).unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg)
            if msg == "You cannot take this product more than twice."));
    }
}
