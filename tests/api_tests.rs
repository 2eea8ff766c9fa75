//! API integration tests.
//!
//! These run against a live server with its database migrated:
//!     cargo run &
//!     cargo test -- --ignored
//!
//! Each test provisions its own role/employee/category/items through the API,
//! with unique suffixes so reruns do not collide.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn unique() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

/// Provision a role, an employee and a one-unit product; returns
/// (emp_code, product_name, item_code, inventory_id)
async fn seed_checkout_fixture(client: &Client) -> (String, String, String, i64) {
    let tag = unique();
    let emp_code = format!("E{}", tag);
    let product_name = format!("Helmet-{}", tag);
    let item_code = format!("HEL-{}", tag);
    let category_name = format!("Safety-{}", tag);

    let response = client
        .post(format!("{}/roles", BASE_URL))
        .json(&json!({ "name": "operator", "access": "kiosk" }))
        .send()
        .await
        .expect("Failed to create role");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse role response");
    let role_id = body["id"].as_i64().expect("No role id");

    let response = client
        .post(format!("{}/employees", BASE_URL))
        .json(&json!({
            "firstname": "Kim",
            "lastname": "Vega",
            "email": "kim.vega@example.com",
            "emp_code": emp_code,
            "role_id": role_id
        }))
        .send()
        .await
        .expect("Failed to create employee");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/categories", BASE_URL))
        .json(&json!({ "name": category_name }))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/inventory", BASE_URL))
        .json(&json!({
            "item_code": item_code,
            "name": product_name,
            "category_name": category_name,
            "price": 25,
            "created_by": emp_code,
            "updated_by": emp_code
        }))
        .send()
        .await
        .expect("Failed to create inventory item");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse item response");
    let inventory_id = body["id"].as_i64().expect("No item id");

    (emp_code, product_name, item_code, inventory_id)
}

async fn item_status(client: &Client, inventory_id: i64) -> String {
    let response = client
        .get(format!("{}/inventory/{}", BASE_URL, inventory_id))
        .send()
        .await
        .expect("Failed to fetch item");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse item");
    body["status"].as_str().expect("No status").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_checkout_and_return_round_trip() {
    let client = Client::new();
    let (emp_code, product_name, item_code, inventory_id) = seed_checkout_fixture(&client).await;

    // Checkout hands out the unit and takes it off the catalog
    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to select product");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["item_code"], item_code.as_str());
    assert_eq!(body["reason"], "take");
    assert_eq!(item_status(&client, inventory_id).await, "Inactive");

    // Normal return puts it back
    let response = client
        .post(format!("{}/return-product/{}/{}", BASE_URL, emp_code, item_code))
        .send()
        .await
        .expect("Failed to return product");
    assert_eq!(response.status(), 200);
    assert_eq!(item_status(&client, inventory_id).await, "Active");

    // Returned is terminal: a second return is rejected
    let response = client
        .post(format!("{}/return-product/{}/{}", BASE_URL, emp_code, item_code))
        .send()
        .await
        .expect("Failed to send second return");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "You can't return this item.");
}

#[tokio::test]
#[ignore]
async fn test_double_checkout_is_rejected() {
    let client = Client::new();
    let (emp_code, product_name, _item_code, _inventory_id) =
        seed_checkout_fixture(&client).await;

    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to select product");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to send second select");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "You can only take one product at a time.");
}

#[tokio::test]
#[ignore]
async fn test_return_without_checkout_is_rejected() {
    let client = Client::new();
    let (emp_code, _product_name, item_code, _inventory_id) =
        seed_checkout_fixture(&client).await;

    let response = client
        .post(format!("{}/return-product/{}/{}", BASE_URL, emp_code, item_code))
        .send()
        .await
        .expect("Failed to send return");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "You can't return this item.");
}

#[tokio::test]
#[ignore]
async fn test_damaged_return_keeps_item_out_of_circulation() {
    let client = Client::new();
    let (emp_code, product_name, item_code, inventory_id) = seed_checkout_fixture(&client).await;

    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to select product");
    assert_eq!(response.status(), 200);

    let before: Value = client
        .get(format!("{}/damaged-listings", BASE_URL))
        .send()
        .await
        .expect("Failed to list damaged")
        .json()
        .await
        .expect("Failed to parse damaged list");
    let damaged_before = before["data"].as_array().expect("No data array").len();

    let response = client
        .post(format!(
            "{}/return-damaged-product/{}/{}?is_damaged=true&damage_reason=cracked%20shell",
            BASE_URL, emp_code, item_code
        ))
        .send()
        .await
        .expect("Failed to send damaged return");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Damaged product returned successfully.");

    // The unit stays Inactive pending inspection
    assert_eq!(item_status(&client, inventory_id).await, "Inactive");

    // Exactly one new inspection row
    let after: Value = client
        .get(format!("{}/damaged-listings", BASE_URL))
        .send()
        .await
        .expect("Failed to list damaged")
        .json()
        .await
        .expect("Failed to parse damaged list");
    let damaged_after = after["data"].as_array().expect("No data array").len();
    assert_eq!(damaged_after, damaged_before + 1);
}

#[tokio::test]
#[ignore]
async fn test_undamaged_flag_takes_the_normal_return_path() {
    let client = Client::new();
    let (emp_code, product_name, item_code, inventory_id) = seed_checkout_fixture(&client).await;

    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to select product");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!(
            "{}/return-damaged-product/{}/{}?is_damaged=false",
            BASE_URL, emp_code, item_code
        ))
        .send()
        .await
        .expect("Failed to send return");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Product returned successfully.");
    assert_eq!(item_status(&client, inventory_id).await, "Active");
}

#[tokio::test]
#[ignore]
async fn test_outstanding_loss_blocks_checkout() {
    let client = Client::new();
    let (emp_code, product_name, _item_code, _inventory_id) =
        seed_checkout_fixture(&client).await;

    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to select product");
    assert_eq!(response.status(), 200);

    // Find the employee and their listing, then flag it unreturned the way
    // the external escalation process would
    let employees: Value = client
        .get(format!("{}/employees", BASE_URL))
        .send()
        .await
        .expect("Failed to list employees")
        .json()
        .await
        .expect("Failed to parse employees");
    let employee_id = employees["data"]
        .as_array()
        .expect("No data array")
        .iter()
        .find(|e| e["emp_code"] == emp_code.as_str())
        .expect("Employee not found")["id"]
        .as_i64()
        .expect("No employee id");

    let listings: Value = client
        .get(format!("{}/listings", BASE_URL))
        .send()
        .await
        .expect("Failed to list listings")
        .json()
        .await
        .expect("Failed to parse listings");
    let listing_id = listings["data"]
        .as_array()
        .expect("No data array")
        .iter()
        .find(|l| l["employee_id"].as_i64() == Some(employee_id) && l["status"] == "Active")
        .expect("Listing not found")["id"]
        .as_i64()
        .expect("No listing id");

    let response = client
        .post(format!("{}/unreturned-listings", BASE_URL))
        .json(&json!({ "listing_id": listing_id, "employee_id": employee_id }))
        .send()
        .await
        .expect("Failed to create unreturned listing");
    assert_eq!(response.status(), 201);

    // Any further checkout is gated on the outstanding loss
    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to send select");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Please return your previous product first.");
}

#[tokio::test]
#[ignore]
async fn test_return_products_projection() {
    let client = Client::new();
    let (emp_code, product_name, item_code, _inventory_id) =
        seed_checkout_fixture(&client).await;

    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to select product");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/return-products/{}", BASE_URL, emp_code))
        .send()
        .await
        .expect("Failed to fetch held products");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    let products = body["products"].as_array().expect("No products array");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["item_code"], item_code.as_str());
    assert_eq!(products[0]["product_name"], product_name.as_str());
    assert!(products[0]["hours_held"].as_i64().expect("No hours_held") >= 0);
}

#[tokio::test]
#[ignore]
async fn test_unknown_employee_is_404() {
    let client = Client::new();

    let response = client
        .post(format!("{}/select-product/NOBODY-0/Helmet", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .get(format!("{}/return-products/NOBODY-0", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_unknown_product_is_404() {
    let client = Client::new();
    let (emp_code, _product_name, _item_code, _inventory_id) =
        seed_checkout_fixture(&client).await;

    let response = client
        .post(format!(
            "{}/select-product/{}/no-such-product-{}",
            BASE_URL,
            emp_code,
            unique()
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Product not found or inactive.");
}

#[tokio::test]
#[ignore]
async fn test_employee_actions_menu() {
    let client = Client::new();
    let (emp_code, _product_name, _item_code, _inventory_id) =
        seed_checkout_fixture(&client).await;

    let response = client
        .post(format!("{}/employee-actions", BASE_URL))
        .json(&json!({ "emp_code": emp_code }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "operator");
    let actions = body["actions"].as_array().expect("No actions array");
    assert!(actions.contains(&json!("Take Product")));
    assert!(actions.contains(&json!("Return Product")));
    assert!(actions.contains(&json!("Return Damaged Product")));
    assert!(!actions.contains(&json!("Admin Mode")));
}

#[tokio::test]
#[ignore]
async fn test_unique_products_hides_checked_out_units() {
    let client = Client::new();
    let (emp_code, product_name, _item_code, _inventory_id) =
        seed_checkout_fixture(&client).await;

    // Visible while available
    let body: Value = client
        .get(format!("{}/inventory/unique-products", BASE_URL))
        .send()
        .await
        .expect("Failed to fetch unique products")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(body["unique_products"]
        .as_array()
        .expect("No unique_products array")
        .iter()
        .any(|p| p["product_name"] == product_name.as_str()));

    let response = client
        .post(format!("{}/select-product/{}/{}", BASE_URL, emp_code, product_name))
        .send()
        .await
        .expect("Failed to select product");
    assert_eq!(response.status(), 200);

    // Gone once the only unit is checked out
    let response = client
        .get(format!("{}/inventory/unique-products", BASE_URL))
        .send()
        .await
        .expect("Failed to fetch unique products");
    if response.status().is_success() {
        let body: Value = response.json().await.expect("Failed to parse response");
        assert!(!body["unique_products"]
            .as_array()
            .expect("No unique_products array")
            .iter()
            .any(|p| p["product_name"] == product_name.as_str()));
    } else {
        // An empty catalog reports 404 by convention
        assert_eq!(response.status(), 404);
    }
}
