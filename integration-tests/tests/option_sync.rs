use serde_json::json;
use twenty_metadata_client::provisioning::options::{OptionTarget, SyncOutcome, sync_rep_options};
use twenty_metadata_client::twenty::fieldmetadata::FieldOutcome;
use twenty_metadata_client::twenty::selectoption::OptionValuePolicy;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use twenty_metadata_integration_tests::mock::{
    already_exists, connection, created_field, fields_list, graphql_data, member, start,
};

async fn mount_roster(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("workspaceMembers"))
        .respond_with(graphql_data(connection(
            "workspaceMembers",
            vec![
                member("m-1", "Zoe", "Quinn"),
                member("m-2", "", ""),
                member("m-3", "david", "edwards"),
                member("m-4", "Amy", "Adams"),
            ],
        )))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn discovered_select_field_is_patched_with_sorted_roster() {
    let (server, client) = start().await;
    mount_roster(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/metadata/fields"))
        .respond_with(fields_list(vec![
            json!({ "id": "rel-1", "name": "assignedRep", "type": "RELATION" }),
            json!({ "id": "sel-1", "name": "assignedRep", "type": "SELECT" }),
        ]))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/metadata/fields/sel-1"))
        .and(body_partial_json(json!({
            "options": [
                { "label": "Amy Adams", "value": "AMY_ADAMS", "color": "#D97706", "position": 0 },
                { "label": "Zoe Quinn", "value": "ZOE_QUINN", "color": "#4B5563", "position": 1 },
                {
                    "label": "david edwards",
                    "value": "DAVID_EDWARDS",
                    "color": "#059669",
                    "position": 2
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let target = OptionTarget::Discover {
        object_id: "person-obj".to_string(),
    };
    let outcome = sync_rep_options(&client, &target, OptionValuePolicy::ScreamingSnake)
        .await
        .expect("sync");

    match outcome {
        SyncOutcome::Updated { field_id, options } => {
            assert_eq!(field_id, "sel-1");
            assert_eq!(options.len(), 3);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn missing_select_field_is_created() {
    let (server, client) = start().await;
    mount_roster(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/metadata/fields"))
        .respond_with(fields_list(vec![]))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/metadata/fields"))
        .and(body_partial_json(json!({
            "objectMetadataId": "person-obj",
            "name": "assignedRep",
            "type": "SELECT",
            "icon": "IconUserCheck"
        })))
        .respond_with(created_field("assignedRep", "SELECT"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let target = OptionTarget::Discover {
        object_id: "person-obj".to_string(),
    };
    let outcome = sync_rep_options(&client, &target, OptionValuePolicy::ScreamingSnake)
        .await
        .expect("sync");

    match outcome {
        SyncOutcome::Created { outcome, options } => {
            assert!(matches!(outcome, FieldOutcome::Created(_)));
            assert_eq!(options[0].label, "Amy Adams");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn natural_names_patch_the_given_field_without_lookup() {
    let (server, client) = start().await;
    mount_roster(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/metadata/fields"))
        .respond_with(fields_list(vec![]))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/metadata/fields/fixed-id"))
        .and(body_partial_json(json!({
            "options": [
                { "label": "Amy Adams", "value": "Amy Adams" },
                { "label": "Zoe Quinn", "value": "Zoe Quinn" },
                { "label": "david edwards", "value": "david edwards" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let target = OptionTarget::FieldId("fixed-id".to_string());
    let outcome = sync_rep_options(&client, &target, OptionValuePolicy::NaturalName)
        .await
        .expect("sync");
    assert!(matches!(outcome, SyncOutcome::Updated { .. }));
}

#[tokio::test]
async fn empty_roster_writes_nothing() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(graphql_data(connection("workspaceMembers", vec![])))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let target = OptionTarget::FieldId("fixed-id".to_string());
    let outcome = sync_rep_options(&client, &target, OptionValuePolicy::ScreamingSnake)
        .await
        .expect("sync");
    assert!(matches!(outcome, SyncOutcome::NoMembers));
}

#[tokio::test]
async fn failed_patch_is_an_error() {
    let (server, client) = start().await;
    mount_roster(&server).await;

    Mock::given(method("PATCH"))
        .and(path("/rest/metadata/fields/fixed-id"))
        .respond_with(ResponseTemplate::new(422).set_body_string("bad options"))
        .mount(&server)
        .await;

    let target = OptionTarget::FieldId("fixed-id".to_string());
    let err = sync_rep_options(&client, &target, OptionValuePolicy::ScreamingSnake)
        .await
        .expect_err("patch should fail");
    assert!(err.contains("422"), "{err}");
    assert!(err.contains("bad options"), "{err}");
}

#[tokio::test]
async fn existing_field_missed_by_listing_is_patched() {
    let (server, client) = start().await;
    mount_roster(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/metadata/fields"))
        .respond_with(ResponseTemplate::new(500).set_body_string("listing unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/metadata/fields"))
        .respond_with(fields_list(vec![
            json!({ "id": "sel-1", "name": "assignedRep", "type": "SELECT" }),
        ]))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/metadata/fields"))
        .respond_with(already_exists("assignedRep"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/metadata/fields/sel-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let target = OptionTarget::Discover {
        object_id: "person-obj".to_string(),
    };
    let outcome = sync_rep_options(&client, &target, OptionValuePolicy::ScreamingSnake)
        .await
        .expect("sync");

    match outcome {
        SyncOutcome::Updated { field_id, options } => {
            assert_eq!(field_id, "sel-1");
            assert_eq!(options.len(), 3);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn existing_field_that_cannot_be_listed_is_an_error() {
    let (server, client) = start().await;
    mount_roster(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/metadata/fields"))
        .respond_with(ResponseTemplate::new(500).set_body_string("listing unavailable"))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/metadata/fields"))
        .respond_with(already_exists("assignedRep"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let target = OptionTarget::Discover {
        object_id: "person-obj".to_string(),
    };
    let err = sync_rep_options(&client, &target, OptionValuePolicy::ScreamingSnake)
        .await
        .expect_err("nothing was synced");
    assert!(err.contains("not synced"), "{err}");
}

#[tokio::test]
async fn roster_without_names_writes_nothing() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(graphql_data(connection(
            "workspaceMembers",
            vec![member("m-1", "", ""), member("m-2", " ", "")],
        )))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let target = OptionTarget::FieldId("fixed-id".to_string());
    let outcome = sync_rep_options(&client, &target, OptionValuePolicy::ScreamingSnake)
        .await
        .expect("sync");
    assert!(matches!(outcome, SyncOutcome::NoMembers));
}
