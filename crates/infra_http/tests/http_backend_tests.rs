//! Tests for the claims backend HTTP adapter against a mock server

use mockito::{Matcher, Server};
use serde_json::json;

use core_kernel::{LocationId, PortError};
use domain_claims::{ClaimDraft, ClaimPayload, ClaimsBackendPort, LocationEntry, ReferenceData};
use infra_http::{BackendConfig, HttpClaimsBackend, CLAIMS_PATH, DOCUMENT_TYPES_PATH, LOCATIONS_PATH};

fn backend_for(server: &Server) -> HttpClaimsBackend {
    HttpClaimsBackend::new(BackendConfig::new(server.url())).unwrap()
}

mod reference_data {
    use super::*;

    #[tokio::test]
    async fn test_fetch_document_types() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", DOCUMENT_TYPES_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"nombre":"DNI"},{"id":2,"nombre":"Pasaporte"}]"#)
            .create_async()
            .await;

        let types = backend_for(&server).fetch_document_types().await.unwrap();

        mock.assert_async().await;
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].display_name, "DNI");
        assert_eq!(types[1].id.value(), 2);
    }

    #[tokio::test]
    async fn test_fetch_locations() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", LOCATIONS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id":1,"departamento":"Lima","provincia":"Lima","distrito":"Miraflores"},
                    {"id":3,"departamento":"Cusco","provincia":"Cusco","distrito":"Cusco"}
                ]"#,
            )
            .create_async()
            .await;

        let locations = backend_for(&server).fetch_locations().await.unwrap();

        assert_eq!(
            locations,
            vec![
                LocationEntry::new(1, "Lima", "Lima", "Miraflores"),
                LocationEntry::new(3, "Cusco", "Cusco", "Cusco"),
            ]
        );
    }

    #[tokio::test]
    async fn test_server_error_is_service_unavailable() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", LOCATIONS_PATH)
            .with_status(503)
            .create_async()
            .await;

        let err = backend_for(&server).fetch_locations().await.unwrap_err();
        assert!(matches!(err, PortError::ServiceUnavailable { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_malformed_body_is_transformation_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", DOCUMENT_TYPES_PATH)
            .with_status(200)
            .with_body(r#"{"error":"not a list"}"#)
            .create_async()
            .await;

        let err = backend_for(&server).fetch_document_types().await.unwrap_err();
        assert!(matches!(err, PortError::Transformation { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connection_error() {
        // Port 9 (discard) is closed on test machines.
        let backend = HttpClaimsBackend::new(BackendConfig::new("http://127.0.0.1:9")).unwrap();
        let err = backend.fetch_locations().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
    }
}

mod submission {
    use super::*;

    fn payload() -> ClaimPayload {
        let reference = ReferenceData::new(
            vec![],
            vec![LocationEntry::new(1, "Lima", "Lima", "Miraflores")],
        );
        let draft = ClaimDraft {
            document_type_id: "1".into(),
            document_number: "40123456".into(),
            last_name: "Torres".into(),
            first_name: "Luis".into(),
            department: "Lima".into(),
            province: "Lima".into(),
            district: "Miraflores".into(),
            address: "Av. Larco 123".into(),
            email: "luis.torres@example.pe".into(),
            description: "Cobro indebido".into(),
            ..ClaimDraft::empty()
        };
        ClaimPayload::from_draft(&draft, &reference)
    }

    #[tokio::test]
    async fn test_submit_posts_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", CLAIMS_PATH)
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "tipoDocumento": {"id": 1},
                "ubicacion": {"id": 1},
                "nombres": "Luis",
                "descripcion": "Cobro indebido"
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":77,"estado":"REGISTRADO"}"#)
            .create_async()
            .await;

        let response = backend_for(&server).submit_claim(&payload()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response["id"], 77);
        assert_eq!(payload().location.id, Some(LocationId::new(1)));
    }

    #[tokio::test]
    async fn test_submit_accepts_non_json_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", CLAIMS_PATH)
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let response = backend_for(&server).submit_claim(&payload()).await.unwrap();
        assert_eq!(response, json!("ok"));
    }

    #[tokio::test]
    async fn test_submit_rejected_by_backend() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", CLAIMS_PATH)
            .with_status(400)
            .with_body("ubicacion es obligatoria")
            .create_async()
            .await;

        let err = backend_for(&server).submit_claim(&payload()).await.unwrap_err();
        match err {
            PortError::Validation { message, .. } => assert_eq!(message, "ubicacion es obligatoria"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }
}
