use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job request as persisted in the `solicitudes` table. Soft-deleted rows
/// carry a `deleted_at` marker and are never surfaced by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Solicitud {
    pub id: i64,
    pub titulo: String,
    pub estado: String,
    pub area: String,
    pub pais: String,
    pub localizacion: String,
    pub numero_vacantes: i32,
    pub descripcion: String,
    pub base_educacional: String,
    pub conocimientos_excluyentes: String,
    pub renta_desde: i32,
    pub renta_hasta: i32,
    pub modalidad_trabajo: String,
    pub tipo_servicio: String,
    pub nivel_experiencia: String,
    pub fecha_inicio_proyecto: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub usuario_id: Option<i64>,
}

/// Validated input for an insert. Built by the service after field checks and
/// date parsing; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSolicitud {
    pub titulo: String,
    pub estado: String,
    pub area: String,
    pub pais: String,
    pub localizacion: String,
    pub numero_vacantes: i32,
    pub descripcion: String,
    pub base_educacional: String,
    pub conocimientos_excluyentes: String,
    pub renta_desde: i32,
    pub renta_hasta: i32,
    pub modalidad_trabajo: String,
    pub tipo_servicio: String,
    pub nivel_experiencia: String,
    pub fecha_inicio_proyecto: NaiveDate,
    pub usuario_id: Option<i64>,
}

/// Partial update. Unset fields are left untouched by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolicitudChanges {
    pub titulo: Option<String>,
    pub estado: Option<String>,
    pub area: Option<String>,
    pub pais: Option<String>,
    pub localizacion: Option<String>,
    pub numero_vacantes: Option<i32>,
    pub descripcion: Option<String>,
    pub base_educacional: Option<String>,
    pub conocimientos_excluyentes: Option<String>,
    pub renta_desde: Option<i32>,
    pub renta_hasta: Option<i32>,
    pub modalidad_trabajo: Option<String>,
    pub tipo_servicio: Option<String>,
    pub nivel_experiencia: Option<String>,
    pub fecha_inicio_proyecto: Option<NaiveDate>,
}

/// Listing filters. String filters match substrings; the renta pair bounds the
/// salary range. Pagination applies only for positive limit/page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolicitudFilter {
    pub titulo: Option<String>,
    pub estado: Option<String>,
    pub area: Option<String>,
    pub pais: Option<String>,
    pub renta_desde: Option<i32>,
    pub renta_hasta: Option<i32>,
    pub modalidad_trabajo: Option<String>,
    pub tipo_servicio: Option<String>,
    pub limit: i64,
    pub page: i64,
}
