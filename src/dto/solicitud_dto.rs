use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::documento::Documento;
use crate::models::solicitud::{Solicitud, SolicitudFilter};
use crate::services::solicitud_service::SolicitudWithDocumentos;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSolicitudPayload {
    #[validate(length(min = 1))]
    pub titulo: String,
    pub estado: Option<String>,
    #[validate(length(min = 1))]
    pub area: String,
    #[validate(length(min = 1))]
    pub pais: String,
    #[validate(length(min = 1))]
    pub localizacion: String,
    #[validate(range(min = 1))]
    pub numero_vacantes: i32,
    #[validate(length(min = 1))]
    pub descripcion: String,
    #[validate(length(min = 1))]
    pub base_educacional: String,
    #[validate(length(min = 1))]
    pub conocimientos_excluyentes: String,
    #[serde(default)]
    pub renta_desde: i32,
    #[serde(default)]
    pub renta_hasta: i32,
    #[validate(length(min = 1))]
    pub modalidad_trabajo: String,
    #[validate(length(min = 1))]
    pub tipo_servicio: String,
    #[validate(length(min = 1))]
    pub nivel_experiencia: String,
    #[validate(length(min = 1))]
    pub fecha_inicio_proyecto: String,
    pub usuario_id: Option<i64>,
}

/// Partial update body. Identity, audit and owner fields are rejected at the
/// route boundary before this shape is ever deserialized; any field not listed
/// here is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateSolicitudPayload {
    #[validate(length(min = 1))]
    pub titulo: Option<String>,
    #[validate(length(min = 1))]
    pub estado: Option<String>,
    #[validate(length(min = 1))]
    pub area: Option<String>,
    #[validate(length(min = 1))]
    pub pais: Option<String>,
    #[validate(length(min = 1))]
    pub localizacion: Option<String>,
    #[validate(range(min = 1))]
    pub numero_vacantes: Option<i32>,
    pub descripcion: Option<String>,
    pub base_educacional: Option<String>,
    pub conocimientos_excluyentes: Option<String>,
    pub renta_desde: Option<i32>,
    pub renta_hasta: Option<i32>,
    pub modalidad_trabajo: Option<String>,
    pub tipo_servicio: Option<String>,
    pub nivel_experiencia: Option<String>,
    #[validate(length(min = 1))]
    pub fecha_inicio_proyecto: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SolicitudListQuery {
    pub titulo: Option<String>,
    pub estado: Option<String>,
    pub area: Option<String>,
    pub pais: Option<String>,
    #[serde(rename = "rentaDesde")]
    pub renta_desde: Option<i32>,
    #[serde(rename = "rentaHasta")]
    pub renta_hasta: Option<i32>,
    #[serde(rename = "modalidadTrabajo")]
    pub modalidad_trabajo: Option<String>,
    #[serde(rename = "tipoServicio")]
    pub tipo_servicio: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolicitudResponse {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
    /// Always present, possibly empty. Degraded reads serialize identically to
    /// reads with no documents.
    pub documentos: Vec<Documento>,
}

impl From<SolicitudListQuery> for SolicitudFilter {
    fn from(query: SolicitudListQuery) -> Self {
        Self {
            titulo: query.titulo.filter(|v| !v.is_empty()),
            estado: query.estado.filter(|v| !v.is_empty()),
            area: query.area.filter(|v| !v.is_empty()),
            pais: query.pais.filter(|v| !v.is_empty()),
            renta_desde: query.renta_desde,
            renta_hasta: query.renta_hasta,
            modalidad_trabajo: query.modalidad_trabajo.filter(|v| !v.is_empty()),
            tipo_servicio: query.tipo_servicio.filter(|v| !v.is_empty()),
            limit: query.limit.unwrap_or(0),
            page: query.page.unwrap_or(0),
        }
    }
}

impl From<Solicitud> for SolicitudResponse {
    fn from(value: Solicitud) -> Self {
        Self {
            id: value.id,
            titulo: value.titulo,
            estado: value.estado,
            area: value.area,
            pais: value.pais,
            localizacion: value.localizacion,
            numero_vacantes: value.numero_vacantes,
            descripcion: value.descripcion,
            base_educacional: value.base_educacional,
            conocimientos_excluyentes: value.conocimientos_excluyentes,
            renta_desde: value.renta_desde,
            renta_hasta: value.renta_hasta,
            modalidad_trabajo: value.modalidad_trabajo,
            tipo_servicio: value.tipo_servicio,
            nivel_experiencia: value.nivel_experiencia,
            fecha_inicio_proyecto: value.fecha_inicio_proyecto,
            created_at: value.created_at,
            updated_at: value.updated_at,
            usuario_id: value.usuario_id,
            documentos: Vec::new(),
        }
    }
}

impl From<SolicitudWithDocumentos> for SolicitudResponse {
    fn from(value: SolicitudWithDocumentos) -> Self {
        let mut response = Self::from(value.solicitud);
        response.documentos = value.documentos;
        response
    }
}
