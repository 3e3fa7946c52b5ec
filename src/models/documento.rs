use serde::{Deserialize, Serialize};

/// Summary of a document owned by a solicitud. Documents live in the peer
/// documentos service; this is the shape attached to aggregated reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documento {
    pub id: i64,
    pub nombre_archivo: String,
    pub extension: String,
}
