use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::{Error, Result};
use crate::models::solicitud::{NewSolicitud, Solicitud, SolicitudChanges, SolicitudFilter};

/// Persistence contract for solicitudes. Backed by Postgres in production and
/// by a mock in tests.
#[async_trait]
pub trait SolicitudStore: Send + Sync {
    async fn create(&self, new: NewSolicitud) -> Result<Solicitud>;
    async fn get_all(&self, filter: SolicitudFilter) -> Result<Vec<Solicitud>>;
    /// Fails with `NotFound` for absent or soft-deleted ids.
    async fn get_by_id(&self, id: i64) -> Result<Solicitud>;
    async fn update(&self, id: i64, changes: SolicitudChanges) -> Result<()>;
    /// Marks the row deleted; subsequent reads no longer see it.
    async fn soft_delete(&self, id: i64) -> Result<()>;
}

#[derive(Clone)]
pub struct PgSolicitudStore {
    pool: PgPool,
}

impl PgSolicitudStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SolicitudStore for PgSolicitudStore {
    async fn create(&self, new: NewSolicitud) -> Result<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            INSERT INTO solicitudes (
                titulo, estado, area, pais, localizacion, numero_vacantes,
                descripcion, base_educacional, conocimientos_excluyentes,
                renta_desde, renta_hasta, modalidad_trabajo, tipo_servicio,
                nivel_experiencia, fecha_inicio_proyecto, usuario_id
            ) VALUES (
                $1, $2, $3, $4, $5, $6,
                $7, $8, $9,
                $10, $11, $12, $13,
                $14, $15, $16
            )
            RETURNING
                id, titulo, estado, area, pais, localizacion, numero_vacantes,
                descripcion, base_educacional, conocimientos_excluyentes,
                renta_desde, renta_hasta, modalidad_trabajo, tipo_servicio,
                nivel_experiencia, fecha_inicio_proyecto, created_at, updated_at,
                usuario_id
            "#,
        )
        .bind(new.titulo)
        .bind(new.estado)
        .bind(new.area)
        .bind(new.pais)
        .bind(new.localizacion)
        .bind(new.numero_vacantes)
        .bind(new.descripcion)
        .bind(new.base_educacional)
        .bind(new.conocimientos_excluyentes)
        .bind(new.renta_desde)
        .bind(new.renta_hasta)
        .bind(new.modalidad_trabajo)
        .bind(new.tipo_servicio)
        .bind(new.nivel_experiencia)
        .bind(new.fecha_inicio_proyecto)
        .bind(new.usuario_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(solicitud)
    }

    async fn get_all(&self, filter: SolicitudFilter) -> Result<Vec<Solicitud>> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT id, titulo, estado, area, pais, localizacion, numero_vacantes, \
             descripcion, base_educacional, conocimientos_excluyentes, \
             renta_desde, renta_hasta, modalidad_trabajo, tipo_servicio, \
             nivel_experiencia, fecha_inicio_proyecto, created_at, updated_at, usuario_id \
             FROM solicitudes WHERE deleted_at IS NULL",
        );

        if let Some(titulo) = &filter.titulo {
            query.push(" AND titulo ILIKE ");
            query.push_bind(format!("%{}%", titulo));
        }
        if let Some(estado) = &filter.estado {
            query.push(" AND estado ILIKE ");
            query.push_bind(format!("%{}%", estado));
        }
        if let Some(area) = &filter.area {
            query.push(" AND area ILIKE ");
            query.push_bind(format!("%{}%", area));
        }
        if let Some(pais) = &filter.pais {
            query.push(" AND pais ILIKE ");
            query.push_bind(format!("%{}%", pais));
        }
        if let Some(renta_desde) = filter.renta_desde {
            query.push(" AND renta_desde >= ");
            query.push_bind(renta_desde);
        }
        if let Some(renta_hasta) = filter.renta_hasta {
            query.push(" AND renta_hasta <= ");
            query.push_bind(renta_hasta);
        }
        if let Some(modalidad) = &filter.modalidad_trabajo {
            query.push(" AND modalidad_trabajo ILIKE ");
            query.push_bind(format!("%{}%", modalidad));
        }
        if let Some(tipo) = &filter.tipo_servicio {
            query.push(" AND tipo_servicio ILIKE ");
            query.push_bind(format!("%{}%", tipo));
        }

        query.push(" ORDER BY id");

        if filter.limit > 0 {
            query.push(" LIMIT ");
            query.push_bind(filter.limit);
            if filter.page > 0 {
                query.push(" OFFSET ");
                query.push_bind((filter.page - 1) * filter.limit);
            }
        }

        let solicitudes = query
            .build_query_as::<Solicitud>()
            .fetch_all(&self.pool)
            .await?;

        Ok(solicitudes)
    }

    async fn get_by_id(&self, id: i64) -> Result<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            SELECT id, titulo, estado, area, pais, localizacion, numero_vacantes,
                   descripcion, base_educacional, conocimientos_excluyentes,
                   renta_desde, renta_hasta, modalidad_trabajo, tipo_servicio,
                   nivel_experiencia, fecha_inicio_proyecto, created_at, updated_at,
                   usuario_id
            FROM solicitudes
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::RowNotFound => Error::NotFound(format!("solicitud {} not found", id)),
            other => Error::Database(other),
        })?;

        Ok(solicitud)
    }

    async fn update(&self, id: i64, changes: SolicitudChanges) -> Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE solicitudes
            SET
                titulo = COALESCE($2, titulo),
                estado = COALESCE($3, estado),
                area = COALESCE($4, area),
                pais = COALESCE($5, pais),
                localizacion = COALESCE($6, localizacion),
                numero_vacantes = COALESCE($7, numero_vacantes),
                descripcion = COALESCE($8, descripcion),
                base_educacional = COALESCE($9, base_educacional),
                conocimientos_excluyentes = COALESCE($10, conocimientos_excluyentes),
                renta_desde = COALESCE($11, renta_desde),
                renta_hasta = COALESCE($12, renta_hasta),
                modalidad_trabajo = COALESCE($13, modalidad_trabajo),
                tipo_servicio = COALESCE($14, tipo_servicio),
                nivel_experiencia = COALESCE($15, nivel_experiencia),
                fecha_inicio_proyecto = COALESCE($16, fecha_inicio_proyecto),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(changes.titulo)
        .bind(changes.estado)
        .bind(changes.area)
        .bind(changes.pais)
        .bind(changes.localizacion)
        .bind(changes.numero_vacantes)
        .bind(changes.descripcion)
        .bind(changes.base_educacional)
        .bind(changes.conocimientos_excluyentes)
        .bind(changes.renta_desde)
        .bind(changes.renta_hasta)
        .bind(changes.modalidad_trabajo)
        .bind(changes.tipo_servicio)
        .bind(changes.nivel_experiencia)
        .bind(changes.fecha_inicio_proyecto)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("solicitud {} not found", id)));
        }
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query(
            "UPDATE solicitudes SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("solicitud {} not found", id)));
        }
        Ok(())
    }
}
