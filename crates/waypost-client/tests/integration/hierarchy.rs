//! Hierarchy fetch through the ZMS clients.

use serde_json::json;
use waypost_client::request::Method;
use waypost_client::zms::HierarchyClient;

use crate::common::TestHarness;

#[tokio::test]
async fn test_hierarchy_fetch_and_normalize() {
    let harness = TestHarness::with_responses(vec![json!([
        {"id": "1", "listid": "CAP", "description": "Capital",
         "children": [
            {"id": "2", "listid": "CAP-1", "description": "Partner equity",
             "parentAccountId": "1",
             "children": [
                {"id": "3", "description": "Drawings", "parentAccountId": "2"}
             ]}
         ]},
        {"id": "4", "listid": "RES", "description": "Reserves"}
    ])]);

    let nodes = HierarchyClient::capital_accounts(harness.conn.clone())
        .hierarchy()
        .await
        .unwrap();

    // Order and shape survive the transform.
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].listid, Some("CAP".to_string()));
    assert_eq!(nodes[1].id, "4");
    assert!(nodes[1].children.is_empty());

    let grandchild = &nodes[0].children[0].children[0];
    assert_eq!(grandchild.id, "3");
    assert_eq!(grandchild.parent_id, Some("2".to_string()));
    assert!(grandchild.children.is_empty());

    let request = &harness.conn.requests()[0];
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "CapitalAccount");
}

#[tokio::test]
async fn test_empty_hierarchy_is_empty() {
    let harness = TestHarness::with_responses(vec![json!([])]);
    let nodes = HierarchyClient::delivery_terms(harness.conn.clone())
        .hierarchy()
        .await
        .unwrap();
    assert!(nodes.is_empty());
}
