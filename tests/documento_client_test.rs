use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};

use solicitudes_backend::error::PeerError;
use solicitudes_backend::services::documento_client::{
    DocumentoClient, DocumentoDto, HttpDocumentoClient,
};

async fn spawn_stub(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> HttpDocumentoClient {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();
    HttpDocumentoClient::new(http, format!("http://{}", addr))
}

#[tokio::test]
async fn fetch_maps_documentos_in_order() {
    let app = Router::new().route(
        "/documentos",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("solicitud_id"), Some(&"100".to_string()));
            Json(vec![
                DocumentoDto {
                    id: 1,
                    extension: "pdf".into(),
                    nombre_archivo: "doc1.pdf".into(),
                    solicitud_id: 100,
                },
                DocumentoDto {
                    id: 2,
                    extension: "jpg".into(),
                    nombre_archivo: "img1.jpg".into(),
                    solicitud_id: 100,
                },
            ])
        }),
    );
    let addr = spawn_stub(app).await;

    let documentos = client_for(addr).get_by_solicitud_id(100).await.unwrap();

    assert_eq!(documentos.len(), 2);
    assert_eq!(documentos[0].id, 1);
    assert_eq!(documentos[0].nombre_archivo, "doc1.pdf");
    assert_eq!(documentos[0].extension, "pdf");
    assert_eq!(documentos[1].id, 2);
    assert_eq!(documentos[1].extension, "jpg");
}

#[tokio::test]
async fn fetch_handles_empty_response() {
    let app = Router::new().route(
        "/documentos",
        get(|| async { Json(Vec::<DocumentoDto>::new()) }),
    );
    let addr = spawn_stub(app).await;

    let documentos = client_for(addr).get_by_solicitud_id(999).await.unwrap();

    assert!(documentos.is_empty());
}

#[tokio::test]
async fn fetch_reports_non_success_status() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let app = Router::new().route("/documentos", get(move || async move { status }));
        let addr = spawn_stub(app).await;

        let err = client_for(addr).get_by_solicitud_id(100).await.unwrap_err();

        assert_eq!(err, PeerError::Status(status.as_u16()));
    }
}

#[tokio::test]
async fn fetch_reports_undecodable_body() {
    let app = Router::new().route(
        "/documentos",
        get(|| async {
            (
                [(header::CONTENT_TYPE, "application/json")],
                "{json malformado",
            )
                .into_response()
        }),
    );
    let addr = spawn_stub(app).await;

    let err = client_for(addr).get_by_solicitud_id(100).await.unwrap_err();

    assert!(matches!(err, PeerError::Decode(_)));
}

#[tokio::test]
async fn fetch_reports_unreachable_peer() {
    // Bind to grab a free port, then drop the listener before connecting.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).get_by_solicitud_id(100).await.unwrap_err();

    assert!(matches!(err, PeerError::Transport(_)));
}

#[tokio::test]
async fn delete_succeeds_on_ok_response() {
    let app = Router::new().route(
        "/documentos/solicitud/:id",
        delete(|Path(id): Path<i64>| async move {
            assert_eq!(id, 42);
            StatusCode::OK
        }),
    );
    let addr = spawn_stub(app).await;

    let result = client_for(addr).delete_by_solicitud_id(42).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn delete_reports_non_success_status() {
    let app = Router::new().route(
        "/documentos/solicitud/:id",
        delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let addr = spawn_stub(app).await;

    let err = client_for(addr).delete_by_solicitud_id(42).await.unwrap_err();

    assert_eq!(err, PeerError::Status(500));
}
