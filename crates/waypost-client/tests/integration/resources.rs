//! End-to-end wire shapes for the typed entity clients.

use serde_json::json;
use waypost_client::abl::{
    BookingOrders, Branches, Charges, ConsignmentDraft, Consignments,
};
use waypost_client::request::Method;
use waypost_core::{DocumentStatus, PageQuery};

use crate::common::{charge_json, consignment_json, page_json, TestHarness};

#[tokio::test]
async fn test_branch_create_posts_typed_draft() {
    let harness = TestHarness::with_responses(vec![json!({
        "id": "b1", "code": "KHI-01", "name": "Karachi"
    })]);

    let branch = Branches::new(harness.conn.clone())
        .create(&waypost_client::abl::BranchDraft {
            code: "KHI-01".to_string(),
            name: "Karachi".to_string(),
            address: None,
            phone: None,
        })
        .await
        .unwrap();
    assert_eq!(branch.id, "b1");

    let request = &harness.conn.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "Branch");
    assert_eq!(request.body.as_ref().unwrap()["code"], "KHI-01");
}

#[tokio::test]
async fn test_consignment_list_parses_page_and_sends_filters() {
    let harness =
        TestHarness::with_responses(vec![page_json(consignment_json("9", "Pending"), 40)]);

    let page = Consignments::new(harness.conn.clone())
        .list(&PageQuery::new(2, 20).with_filter("Status", "Pending"))
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.total_count, Some(40));
    assert_eq!(page.items[0].status, DocumentStatus::Pending);

    let request = &harness.conn.requests()[0];
    assert_eq!(request.path, "Consignment");
    assert!(request
        .query
        .contains(&("PageIndex".to_string(), "2".to_string())));
    assert!(request
        .query
        .contains(&("Status".to_string(), "Pending".to_string())));
}

#[tokio::test]
async fn test_consignment_update_puts_collection_path_with_id_in_body() {
    let harness = TestHarness::with_responses(vec![consignment_json("9", "Pending")]);

    let draft = ConsignmentDraft {
        number: "CN-9".to_string(),
        booking_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 2).unwrap(),
        origin: "Karachi".to_string(),
        destination: "Lahore".to_string(),
        consignor: "Meridian Textiles".to_string(),
        consignee: "Noor Traders".to_string(),
        vehicle_no: None,
    };
    Consignments::new(harness.conn.clone())
        .update("9", &draft)
        .await
        .unwrap();

    let request = &harness.conn.requests()[0];
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "Consignment");
    assert_eq!(request.body.as_ref().unwrap()["id"], "9");
}

#[tokio::test]
async fn test_consignment_status_is_put_booking_order_status_is_post() {
    let harness = TestHarness::with_responses(vec![json!(null), json!(null)]);

    Consignments::new(harness.conn.clone())
        .set_status("9", DocumentStatus::Completed)
        .await
        .unwrap();
    BookingOrders::new(harness.conn.clone())
        .set_status("4", DocumentStatus::Completed)
        .await
        .unwrap();

    let requests = harness.conn.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].path, "Consignment/status");
    assert_eq!(requests[1].method, Method::Post);
    assert_eq!(requests[1].path, "BookingOrder/status");
}

#[tokio::test]
async fn test_charge_list_filters_by_receipt_no() {
    let harness = TestHarness::with_responses(vec![page_json(charge_json("3", 100.5), 1)]);

    let page = Charges::new(harness.conn.clone())
        .list(&PageQuery::first(10).with_filter("ReceiptNo", "CHG-3"))
        .await
        .unwrap();
    assert_eq!(page.items[0].amount, 100.5);

    let request = &harness.conn.requests()[0];
    assert!(request
        .query
        .contains(&("ReceiptNo".to_string(), "CHG-3".to_string())));
}

#[tokio::test]
async fn test_delete_targets_id_path() {
    let harness = TestHarness::with_responses(vec![json!(null)]);

    Branches::new(harness.conn.clone()).delete("b7").await.unwrap();

    let request = &harness.conn.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "Branch/b7");
}

#[tokio::test]
async fn test_api_failure_surfaces_to_the_caller() {
    let harness = TestHarness::new();
    harness
        .conn
        .push_err(waypost_client::Error::api(404, "Branch not found"));

    let err = Branches::new(harness.conn.clone())
        .get("missing")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "request failed (404): Branch not found");
    assert!(!err.requires_sign_in());
}
