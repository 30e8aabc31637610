//! Integration tests for batch execution and the continue-on-failure policy

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use insyte_cli::api::operations::{Operation, Operations};
use insyte_cli::api::query::QueryOptions;
use insyte_cli::api::resources::Resource;
use insyte_cli::api::{ApiError, InsyteClient};
use insyte_cli::auth::{Connection, Credentials};

fn test_client(server: &MockServer) -> InsyteClient {
    let connection = Connection::new(
        server.uri(),
        "v2",
        Credentials::ApiKey("test-key".to_string()),
    );
    InsyteClient::new(connection)
}

async fn mount_contact_fixtures(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/Contacts(1)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": 1, "FirstName": "A"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/Contacts(2)"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/Contacts(3)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": 3, "FirstName": "C"})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_continue_on_fail_captures_error_in_order() {
    let server = MockServer::start().await;
    mount_contact_fixtures(&server).await;

    let operations = Operations::from_operations(vec![
        Operation::get(Resource::Contact, "1"),
        Operation::get(Resource::Contact, "2"),
        Operation::get(Resource::Contact, "3"),
    ]);

    let client = test_client(&server);
    let records = operations.execute(&client, true).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["ID"], json!(1));
    assert!(records[1]["error"].as_str().unwrap().contains("boom"));
    assert_eq!(records[2]["ID"], json!(3));
}

#[tokio::test]
async fn test_default_policy_aborts_at_failing_operation() {
    let server = MockServer::start().await;
    mount_contact_fixtures(&server).await;

    let operations = Operations::from_operations(vec![
        Operation::get(Resource::Contact, "1"),
        Operation::get(Resource::Contact, "2"),
        Operation::get(Resource::Contact, "3"),
    ]);

    let client = test_client(&server);
    let err = operations.execute(&client, false).await.unwrap_err();

    let api_err = err.downcast_ref::<ApiError>().unwrap();
    assert_eq!(api_err.status, Some(500));

    // The third operation never ran.
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_crud_dispatch_hits_expected_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/Companies"))
        .and(body_json(json!({"Name": "Acme Blinds"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ID": 9, "Name": "Acme Blinds"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v2/Companies(9)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": 9, "Name": "Acme"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/Companies(9)"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let operations = Operations::new()
        .add(Operation::create(
            Resource::Company,
            json!({"Name": "Acme Blinds"}),
        ))
        .add(Operation::update(
            Resource::Company,
            "9",
            json!({"Name": "Acme"}),
        ))
        .add(Operation::delete(Resource::Company, "9"));

    let client = test_client(&server);
    let records = operations.execute(&client, false).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["ID"], json!(9));
    assert_eq!(records[2], json!({"success": true, "id": "9"}));
}

#[tokio::test]
async fn test_single_page_list_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"ID": 1}, {"ID": 2}],
            "@odata.count": 2,
        })))
        .mount(&server)
        .await;

    let operation = Operation::list(Resource::Payment, QueryOptions::default());
    let client = test_client(&server);
    let records = operation.execute(&client).await.unwrap();

    assert_eq!(records, vec![json!({"ID": 1}), json!({"ID": 2})]);

    // The default single-page limit rides along as $top.
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap().contains("%24top=50") || requests[0].url.query().unwrap().contains("$top=50"));
}

#[tokio::test]
async fn test_live_diary_operations_post_fixed_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/LiveDiary/Sales/Availability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slots": [{"slotKey": "S1", "start": "2026-08-10T09:00:00"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = insyte_cli::api::AvailabilityRequest {
        latitude: -33.87,
        longitude: 151.21,
        from_date: "2026-08-10T09:00:00".parse().unwrap(),
        to_date: "2026-08-14T17:00:00".parse().unwrap(),
        appointment_minutes: 60,
        filter_by_roster: Some(true),
        filter_by_skills: None,
        products_of_interests: None,
        area_filter: None,
    };

    let client = test_client(&server);
    let records = Operation::CheckAvailability(request)
        .execute(&client)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["slots"][0]["slotKey"], json!("S1"));

    let body: serde_json::Value =
        serde_json::from_slice(&server.received_requests().await.unwrap()[0].body).unwrap();
    assert_eq!(body["appointmentMinutes"], json!(60));
    assert_eq!(body["filterByRoster"], json!(true));
    assert!(body.get("areaFilter").is_none());
}
