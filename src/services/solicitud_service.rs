use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::database::solicitud_store::SolicitudStore;
use crate::dto::solicitud_dto::{
    CreateSolicitudPayload, SolicitudListQuery, UpdateSolicitudPayload,
};
use crate::error::{Error, PeerError, Result, ValidationError};
use crate::models::documento::Documento;
use crate::models::solicitud::{NewSolicitud, Solicitud, SolicitudChanges};
use crate::services::documento_client::DocumentoClient;
use crate::services::usuario_client::UsuarioClient;

const DEFAULT_ESTADO: &str = "pendiente";
const FECHA_FORMAT: &str = "%Y-%m-%d";

/// A solicitud together with the documentos fetched from the peer service.
/// When the peer call failed, `documentos` is empty and `degraded` carries the
/// cause; the wire shape is identical either way.
#[derive(Debug, Clone, PartialEq)]
pub struct SolicitudWithDocumentos {
    pub solicitud: Solicitud,
    pub documentos: Vec<Documento>,
    pub degraded: Option<PeerError>,
}

/// Outcome of a delete. The solicitud itself is gone in either case;
/// `cascade_error` records a failed best-effort documento cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub cascade_error: Option<PeerError>,
}

#[derive(Clone)]
pub struct SolicitudService {
    store: Arc<dyn SolicitudStore>,
    documentos: Arc<dyn DocumentoClient>,
    usuarios: Option<Arc<dyn UsuarioClient>>,
}

impl SolicitudService {
    pub fn new(
        store: Arc<dyn SolicitudStore>,
        documentos: Arc<dyn DocumentoClient>,
        usuarios: Option<Arc<dyn UsuarioClient>>,
    ) -> Self {
        Self {
            store,
            documentos,
            usuarios,
        }
    }

    /// Validates the payload, optionally checks the owning usuario against the
    /// usuarios service, and persists. Nothing is written on a failed check.
    pub async fn create(&self, payload: CreateSolicitudPayload) -> Result<Solicitud> {
        let new = validate_create(payload)?;

        if let Some(usuarios) = &self.usuarios {
            // usuario_id presence is guaranteed by validate_create
            if let Some(usuario_id) = new.usuario_id {
                if !usuarios.exists(usuario_id).await? {
                    return Err(Error::BadRequest(format!(
                        "usuario {} does not exist",
                        usuario_id
                    )));
                }
            }
        }

        let solicitud = self.store.create(new).await?;
        info!(id = solicitud.id, "solicitud created");
        Ok(solicitud)
    }

    /// Lists matching solicitudes and attaches documentos per item. One item's
    /// peer failure degrades only that item, never the list.
    pub async fn list(&self, query: SolicitudListQuery) -> Result<Vec<SolicitudWithDocumentos>> {
        let solicitudes = self.store.get_all(query.into()).await?;

        let mut items = Vec::with_capacity(solicitudes.len());
        for solicitud in solicitudes {
            items.push(self.attach_documentos(solicitud).await);
        }
        Ok(items)
    }

    /// Bare read; no peer call is made.
    pub async fn get_by_id(&self, id: i64) -> Result<Solicitud> {
        self.store.get_by_id(id).await
    }

    /// Read plus documento fetch. A missing solicitud is a hard failure; an
    /// unreachable documentos service is not.
    pub async fn get_with_documentos(&self, id: i64) -> Result<SolicitudWithDocumentos> {
        let solicitud = self.store.get_by_id(id).await?;
        Ok(self.attach_documentos(solicitud).await)
    }

    pub async fn update(&self, id: i64, payload: UpdateSolicitudPayload) -> Result<()> {
        self.store.get_by_id(id).await?;

        let changes = validate_update(payload)?;
        self.store.update(id, changes).await?;
        info!(id, "solicitud updated");
        Ok(())
    }

    /// Existence check, then best-effort documento cascade, then local soft
    /// delete — in that order. The cascade step never blocks the delete.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome> {
        self.store.get_by_id(id).await?;

        let cascade_error = match self.documentos.delete_by_solicitud_id(id).await {
            Ok(()) => None,
            Err(err) => {
                warn!(
                    solicitud_id = id,
                    error = %err,
                    "failed to delete documentos for solicitud, continuing with delete"
                );
                Some(err)
            }
        };

        self.store.soft_delete(id).await?;
        info!(id, "solicitud deleted");
        Ok(DeleteOutcome { cascade_error })
    }

    async fn attach_documentos(&self, solicitud: Solicitud) -> SolicitudWithDocumentos {
        match self.documentos.get_by_solicitud_id(solicitud.id).await {
            Ok(documentos) => SolicitudWithDocumentos {
                solicitud,
                documentos,
                degraded: None,
            },
            Err(err) => {
                warn!(
                    solicitud_id = solicitud.id,
                    error = %err,
                    "failed to fetch documentos, returning solicitud without them"
                );
                SolicitudWithDocumentos {
                    solicitud,
                    documentos: Vec::new(),
                    degraded: Some(err),
                }
            }
        }
    }
}

fn validate_create(payload: CreateSolicitudPayload) -> Result<NewSolicitud> {
    if payload.titulo.trim().is_empty() {
        return Err(ValidationError::MissingField("titulo").into());
    }
    if payload.area.trim().is_empty() {
        return Err(ValidationError::MissingField("area").into());
    }
    if payload.pais.trim().is_empty() {
        return Err(ValidationError::MissingField("pais").into());
    }
    if payload.localizacion.trim().is_empty() {
        return Err(ValidationError::MissingField("localizacion").into());
    }
    if payload.usuario_id.is_none() {
        return Err(ValidationError::MissingField("usuario_id").into());
    }

    let fecha_inicio_proyecto =
        NaiveDate::parse_from_str(&payload.fecha_inicio_proyecto, FECHA_FORMAT)
            .map_err(|_| ValidationError::BadDateFormat)?;

    if payload.renta_desde > 0 && payload.renta_hasta > 0 && payload.renta_desde > payload.renta_hasta
    {
        return Err(ValidationError::InvalidSalaryRange.into());
    }

    let estado = payload
        .estado
        .filter(|estado| !estado.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ESTADO.to_string());

    Ok(NewSolicitud {
        titulo: payload.titulo,
        estado,
        area: payload.area,
        pais: payload.pais,
        localizacion: payload.localizacion,
        numero_vacantes: payload.numero_vacantes,
        descripcion: payload.descripcion,
        base_educacional: payload.base_educacional,
        conocimientos_excluyentes: payload.conocimientos_excluyentes,
        renta_desde: payload.renta_desde,
        renta_hasta: payload.renta_hasta,
        modalidad_trabajo: payload.modalidad_trabajo,
        tipo_servicio: payload.tipo_servicio,
        nivel_experiencia: payload.nivel_experiencia,
        fecha_inicio_proyecto,
        usuario_id: payload.usuario_id,
    })
}

fn validate_update(payload: UpdateSolicitudPayload) -> Result<SolicitudChanges> {
    if let (Some(desde), Some(hasta)) = (payload.renta_desde, payload.renta_hasta) {
        if desde > 0 && hasta > 0 && desde > hasta {
            return Err(ValidationError::InvalidSalaryRange.into());
        }
    }

    let fecha_inicio_proyecto = payload
        .fecha_inicio_proyecto
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, FECHA_FORMAT)
                .map_err(|_| ValidationError::BadDateFormat)
        })
        .transpose()?;

    Ok(SolicitudChanges {
        titulo: payload.titulo,
        estado: payload.estado,
        area: payload.area,
        pais: payload.pais,
        localizacion: payload.localizacion,
        numero_vacantes: payload.numero_vacantes,
        descripcion: payload.descripcion,
        base_educacional: payload.base_educacional,
        conocimientos_excluyentes: payload.conocimientos_excluyentes,
        renta_desde: payload.renta_desde,
        renta_hasta: payload.renta_hasta,
        modalidad_trabajo: payload.modalidad_trabajo,
        tipo_servicio: payload.tipo_servicio,
        nivel_experiencia: payload.nivel_experiencia,
        fecha_inicio_proyecto,
    })
}
