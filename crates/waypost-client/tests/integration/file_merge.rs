//! The file-merge update: narrow PUT first, read-modify-write fallback.

use serde_json::json;
use waypost_client::abl::Charges;
use waypost_client::request::Method;
use waypost_client::{Error, FileRef};

use crate::common::{charge_json, TestHarness};

fn pod_files() -> Vec<FileRef> {
    vec![FileRef {
        name: "receipt-scan.pdf".to_string(),
        url: "https://media.example.com/receipt-scan.pdf".to_string(),
    }]
}

#[tokio::test]
async fn test_narrow_put_is_the_only_request_on_success() {
    let harness = TestHarness::with_responses(vec![json!(null)]);

    Charges::new(harness.conn.clone())
        .update_files("3", &pod_files())
        .await
        .unwrap();

    let requests = harness.conn.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].path, "Charge/Files/3");
    assert_eq!(
        requests[0].body.as_ref().unwrap()["files"][0]["name"],
        "receipt-scan.pdf"
    );
}

#[tokio::test]
async fn test_fallback_is_one_get_then_one_full_put() {
    let harness = TestHarness::new();
    harness.conn.push_err(Error::api(405, "method not allowed"));
    harness.conn.push_ok(charge_json("3", 100.5));
    harness.conn.push_ok(json!(null));

    Charges::new(harness.conn.clone())
        .update_files("3", &pod_files())
        .await
        .unwrap();

    let requests = harness.conn.requests();
    assert_eq!(requests.len(), 3);

    // Exactly one fetch of the full record...
    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(requests[1].path, "Charge/3");

    // ...then exactly one full-record PUT carrying the merged file list,
    // keyed the way the Charge resource keys updates (id in the body).
    assert_eq!(requests[2].method, Method::Put);
    assert_eq!(requests[2].path, "Charge");
    let body = requests[2].body.as_ref().unwrap();
    assert_eq!(body["id"], "3");
    assert_eq!(body["party"], "Meridian Textiles");
    assert_eq!(body["files"][0]["url"], "https://media.example.com/receipt-scan.pdf");
}

#[tokio::test]
async fn test_fallback_failure_surfaces_unrecovered() {
    let harness = TestHarness::new();
    harness.conn.push_err(Error::api(405, "method not allowed"));
    harness.conn.push_err(Error::api(500, "database offline"));

    let err = Charges::new(harness.conn.clone())
        .update_files("3", &pod_files())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "request failed (500): database offline");
    // The failed get stops the sequence; no blind full PUT is attempted.
    assert_eq!(harness.conn.requests().len(), 2);
}
