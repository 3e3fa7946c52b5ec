pub mod health;
pub mod solicitud;

use axum::{routing::get, Router};

use crate::AppState;

/// Full routing table; shared by `main` and the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/solicitudes",
            get(solicitud::list_solicitudes).post(solicitud::create_solicitud),
        )
        .route(
            "/solicitudes/:id",
            get(solicitud::get_solicitud)
                .patch(solicitud::update_solicitud)
                .delete(solicitud::delete_solicitud),
        )
        .route(
            "/solicitudes/:id/con-documentos",
            get(solicitud::get_solicitud_with_documentos),
        )
        .with_state(state)
}
