//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    catalog, checkout, email, employees, health, inventory, listings, locations, machines,
    parameters, roles,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kiosk Inventory API",
        version = "1.0.0",
        description = "Kiosk Inventory Management System REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Checkout workflow
        checkout::select_product,
        checkout::return_products,
        checkout::return_product,
        checkout::return_damaged_products,
        checkout::return_damaged_product,
        // Kiosk browse
        catalog::unique_products,
        catalog::list_categories,
        catalog::products_by_category,
        catalog::filter_products,
        // Categories
        catalog::create_category,
        catalog::get_category,
        catalog::update_category,
        catalog::delete_category,
        // Inventory
        inventory::create_item,
        inventory::list_items,
        inventory::get_item,
        inventory::update_item,
        inventory::delete_item,
        inventory::load_items,
        // Ledgers
        listings::list_listings,
        listings::get_listing,
        listings::create_listing,
        listings::update_listing,
        listings::delete_listing,
        listings::list_unreturned,
        listings::create_unreturned,
        listings::update_unreturned,
        listings::delete_unreturned,
        listings::list_damaged,
        listings::get_damaged,
        listings::create_damaged,
        listings::update_damaged,
        listings::delete_damaged,
        // Employees
        employees::create_employee,
        employees::list_employees,
        employees::get_employee,
        employees::update_employee,
        employees::delete_employee,
        employees::employee_actions,
        // Roles
        roles::create_role,
        roles::list_roles,
        roles::get_role,
        roles::update_role,
        roles::delete_role,
        // Locations
        locations::create_location,
        locations::list_locations,
        locations::get_location,
        locations::update_location,
        locations::delete_location,
        // Machines
        machines::create_machine,
        machines::list_machines,
        machines::get_machine,
        machines::update_machine,
        machines::delete_machine,
        // Parameters
        parameters::create_parameter,
        parameters::list_parameters,
        parameters::get_parameter,
        parameters::update_parameter,
        parameters::delete_parameter,
        // Email accounts
        email::create_email_account,
        email::list_email_accounts,
        email::get_email_account,
        email::update_email_account,
        email::delete_email_account,
    ),
    components(
        schemas(
            // Shared
            crate::api::MessageResponse,
            crate::api::CreatedResponse,
            crate::error::ErrorResponse,
            health::HealthResponse,
            // Checkout
            checkout::SelectProductResponse,
            checkout::HeldProductsResponse,
            crate::models::listing::HeldProduct,
            // Catalog
            catalog::UniqueProductsResponse,
            catalog::CategoriesResponse,
            catalog::CategoryProductsResponse,
            catalog::FilteredProductsResponse,
            crate::models::inventory::UniqueProduct,
            crate::models::inventory::CategoryProduct,
            crate::models::inventory::InventoryItemDetails,
            crate::models::inventory::CreateInventoryItem,
            crate::models::inventory::UpdateInventoryItem,
            crate::models::inventory::LoadItems,
            crate::models::category::Category,
            crate::models::category::CategoryView,
            crate::models::category::CreateCategory,
            crate::models::category::UpdateCategory,
            inventory::InventoryListResponse,
            // Ledgers
            listings::ListingListResponse,
            listings::UnreturnedListResponse,
            listings::DamagedListResponse,
            crate::models::listing::CheckoutListing,
            crate::models::listing::CreateListing,
            crate::models::listing::UpdateListing,
            crate::models::unreturned::UnreturnedListing,
            crate::models::unreturned::CreateUnreturnedListing,
            crate::models::unreturned::UpdateUnreturnedListing,
            crate::models::damaged::DamagedListing,
            crate::models::damaged::CreateDamagedListing,
            crate::models::damaged::UpdateDamagedListing,
            // Employees & roles
            employees::EmployeeListResponse,
            crate::models::employee::Employee,
            crate::models::employee::CreateEmployee,
            crate::models::employee::UpdateEmployee,
            crate::models::employee::EmployeeActionsRequest,
            crate::models::employee::EmployeeActions,
            roles::RoleListResponse,
            crate::models::role::Role,
            crate::models::role::CreateRole,
            crate::models::role::UpdateRole,
            // Fleet settings
            locations::LocationListResponse,
            crate::models::location::Location,
            crate::models::location::CreateLocation,
            crate::models::location::UpdateLocation,
            machines::MachineListResponse,
            crate::models::machine::Machine,
            crate::models::machine::CreateMachine,
            crate::models::machine::UpdateMachine,
            parameters::ParameterListResponse,
            crate::models::parameter::Parameter,
            crate::models::parameter::CreateParameter,
            crate::models::parameter::UpdateParameter,
            email::EmailAccountListResponse,
            crate::models::email_account::EmailAccountView,
            crate::models::email_account::CreateEmailAccount,
            crate::models::email_account::UpdateEmailAccount,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "checkout", description = "Product checkout and return workflow"),
        (name = "catalog", description = "Kiosk browse and category management"),
        (name = "inventory", description = "Inventory catalog management"),
        (name = "listings", description = "Checkout, unreturned and damaged ledgers"),
        (name = "employees", description = "Employee directory"),
        (name = "roles", description = "Role management"),
        (name = "locations", description = "Kiosk locations"),
        (name = "machines", description = "Kiosk machines"),
        (name = "parameters", description = "Machine parameters"),
        (name = "email", description = "Outgoing SMTP accounts")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
