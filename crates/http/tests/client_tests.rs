//! Integration tests for the PayFlow HTTP client

use payflow_core::testing::{FailingStore, MemoryStore, RecordingNavigator};
use payflow_core::{AuthConfig, Session};
use payflow_http::types::{ClientProfile, LogEntry, ManualImportRequest, OdooTestRequest};
use payflow_http::{ClientError, PayflowClient, PASSWORD_HEADER};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    client: PayflowClient,
    store: Arc<MemoryStore>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(base_url: &str, stored: Option<&str>) -> Harness {
    let store = Arc::new(match stored {
        Some(value) => MemoryStore::with_entry(AuthConfig::CREDENTIAL_STORAGE_KEY, value),
        None => MemoryStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::new());
    let client = PayflowClient::builder()
        .base_url(base_url)
        .session(Session::new(store.clone()))
        .navigator(navigator.clone())
        .build()
        .unwrap();
    Harness {
        client,
        store,
        navigator,
    }
}

#[tokio::test]
async fn test_client_builder() {
    let h = harness("http://localhost:8080/", None);
    assert_eq!(h.client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let store = Arc::new(MemoryStore::new());
    let result = PayflowClient::builder()
        .session(Session::new(store))
        .navigator(Arc::new(RecordingNavigator::new()))
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_requires_session() {
    let result = PayflowClient::builder()
        .base_url("http://localhost:8080")
        .navigator(Arc::new(RecordingNavigator::new()))
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_stored_credential_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .and(header(PASSWORD_HEADER, "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));
    let logs = h.client.list_logs().await.unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_no_header_without_credential() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    for stored in [None, Some("")] {
        let h = harness(&mock_server.uri(), stored);
        h.client.list_logs().await.unwrap();
    }

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    for request in received {
        assert!(request.headers.get(PASSWORD_HEADER).is_none());
    }
}

#[tokio::test]
async fn test_unauthorized_logs_out_and_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Mot de passe invalide"))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));
    let result = h.client.list_clients().await;

    // The error still reaches the caller
    match result {
        Err(ClientError::AuthenticationFailed(message)) => {
            assert!(message.contains("Mot de passe invalide"));
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
    assert!(!h.store.contains(AuthConfig::CREDENTIAL_STORAGE_KEY));
    assert!(!h.client.session().is_authenticated());
    assert_eq!(h.navigator.visits(), vec![AuthConfig::LOGIN_PATH.to_string()]);
}

#[tokio::test]
async fn test_each_unauthorized_response_redirects_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));
    assert!(h.client.list_logs().await.is_err());
    assert!(h.client.list_logs().await.is_err());

    assert_eq!(h.navigator.visits().len(), 2);

    // The second request went out without the cleared credential
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received[0].headers[PASSWORD_HEADER], "abc123");
    assert!(received[1].headers.get(PASSWORD_HEADER).is_none());
}

#[tokio::test]
async fn test_failing_storage_still_handles_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let navigator = Arc::new(RecordingNavigator::new());
    let client = PayflowClient::builder()
        .base_url(&mock_server.uri())
        .session(Session::new(Arc::new(FailingStore)))
        .navigator(navigator.clone())
        .build()
        .unwrap();

    let result = client.list_logs().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert_eq!(navigator.visits(), vec![AuthConfig::LOGIN_PATH.to_string()]);

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get(PASSWORD_HEADER).is_none());
}

#[tokio::test]
async fn test_other_errors_pass_through_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/test-odoo"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Erreur Odoo"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));

    let result = h.client.test_odoo(&OdooTestRequest::default()).await;
    assert!(matches!(result, Err(ClientError::BadRequest(_))));

    let result = h.client.list_logs().await;
    assert!(matches!(
        result,
        Err(ClientError::ServerError { status: 500, .. })
    ));

    let result = h.client.list_clients().await;
    assert!(matches!(result, Err(ClientError::Forbidden(_))));

    assert!(h.client.session().is_authenticated());
    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn test_transport_error_passes_through_untouched() {
    // Nothing listens on port 1
    let h = harness("http://127.0.0.1:1", Some("abc123"));

    let result = h.client.list_logs().await;
    assert!(matches!(result, Err(ClientError::Request(_))));
    assert!(h.client.session().is_authenticated());
    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn test_undecodable_body_is_a_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));
    match h.client.list_logs().await {
        Err(ClientError::Request(e)) => assert!(e.is_decode()),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "password": "abc123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), None);
    let response = h.client.login("abc123").await.unwrap();
    assert_eq!(response.status, "ok");
}

#[tokio::test]
async fn test_list_logs_decodes_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "client_doc_id": "acme",
                "client_name": "ACME",
                "period": "2024-01",
                "execution_time": "2024-02-05T06:00:00+00:00",
                "status": "MANUAL_SUCCESS",
                "message": "12 lignes importées"
            },
            { "client_doc_id": "beta", "period": "2024-01", "status": "ERROR_AUTH" }
        ])))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));
    let logs: Vec<LogEntry> = h.client.list_logs().await.unwrap();

    assert_eq!(logs.len(), 2);
    assert!(logs[0].is_success());
    assert_eq!(logs[0].client_name.as_deref(), Some("ACME"));
    assert!(!logs[1].is_success());
    assert!(logs[1].execution_time.is_none());
}

#[tokio::test]
async fn test_save_client_posts_profile() {
    let mock_server = MockServer::start().await;

    let profile = ClientProfile {
        nom: "ACME".into(),
        numero_dossier_silae: "1234".into(),
        jour_transfert: 5,
        odoo_host: "acme.odoo.com".into(),
        database_odoo: "acme".into(),
        odoo_login: "paie@acme.fr".into(),
        odoo_password: None,
        journal_paie_odoo: "PAIE".into(),
        odoo_company_id: 1,
    };

    Mock::given(method("POST"))
        .and(path("/api/clients/acme"))
        .and(header(PASSWORD_HEADER, "abc123"))
        .and(body_json(serde_json::to_value(&profile).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Client ACME sauvegardé."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));
    let response = h.client.save_client("acme", &profile).await.unwrap();
    assert_eq!(response.status, "success");
}

#[tokio::test]
async fn test_manual_import_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/import/manual"))
        .and(body_json(json!({
            "client_doc_id": "acme",
            "periods": ["2024-01", "2024-02"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "period": "2024-01", "status": "success", "message": "ok" },
                { "period": "2024-02", "status": "error", "message": "Journal vide" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri(), Some("abc123"));
    let response = h
        .client
        .manual_import(&ManualImportRequest {
            client_doc_id: "acme".into(),
            periods: vec!["2024-01".into(), "2024-02".into()],
        })
        .await
        .unwrap();

    assert_eq!(response.results.len(), 2);
    assert!(response.results[0].is_success());
    assert!(!response.results[1].is_success());
}
