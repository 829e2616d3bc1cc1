//! Postgres storage for OpenFEMA disaster declarations.

use chrono::NaiveDate;
use openfema_api::types::DisasterDeclarationsElement;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::{Settings, StoreError};

const CREATE_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS fema_disasters(
    id                      TEXT PRIMARY KEY,
    disaster_number         INT,
    fema_declaration_string TEXT,
    state                   TEXT,
    declaration_type        TEXT,
    declaration_date        DATE,
    fiscal_year_declared    TEXT,
    incident_type           TEXT,
    declaration_title       TEXT,
    designated_area         TEXT,
    place_code              TEXT
)";

const INSERT_SQL: &str = "\
INSERT INTO fema_disasters(
    id,
    disaster_number,
    fema_declaration_string,
    state,
    declaration_type,
    declaration_date,
    fiscal_year_declared,
    incident_type,
    declaration_title,
    designated_area,
    place_code
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";

/// The eleven-column projection of one declaration, ready for insertion.
///
/// Building the row parses `declarationDate` under the fixed layout, so a
/// malformed date fails before any SQL is issued for that element.
#[derive(Debug, Clone)]
pub struct DisasterRow {
    pub id: String,
    pub disaster_number: i32,
    pub fema_declaration_string: String,
    pub state: String,
    pub declaration_type: String,
    pub declaration_date: NaiveDate,
    pub fiscal_year_declared: String,
    pub incident_type: String,
    pub declaration_title: String,
    pub designated_area: String,
    pub place_code: String,
}

impl TryFrom<&DisasterDeclarationsElement> for DisasterRow {
    type Error = StoreError;

    fn try_from(element: &DisasterDeclarationsElement) -> Result<Self, StoreError> {
        let declaration_date = element.parsed_declaration_date().map_err(|e| {
            tracing::error!("Unable to parse the declaration date: {}\n{:#?}", e, element);
            StoreError::DateParse {
                id: element.id.clone(),
                source: e,
            }
        })?;
        let disaster_number = i32::try_from(element.disaster_number).map_err(|_| {
            tracing::error!(
                "Disaster number does not fit the integer column: {}\n{:#?}",
                element.disaster_number,
                element
            );
            StoreError::DisasterNumberRange {
                id: element.id.clone(),
                value: element.disaster_number,
            }
        })?;
        Ok(Self {
            id: element.id.clone(),
            disaster_number,
            fema_declaration_string: element.fema_declaration_string.clone(),
            state: element.state.clone(),
            declaration_type: element.declaration_type.clone(),
            declaration_date: declaration_date.date(),
            fiscal_year_declared: element.fiscal_year_declared.to_string(),
            incident_type: element.incident_type.clone(),
            declaration_title: element.declaration_title.clone(),
            designated_area: element.designated_area.clone(),
            place_code: element.place_code.clone(),
        })
    }
}

/// Handle to the destination database.
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Opens a connection pool from the settings and verifies it with a ping.
    pub async fn connect(settings: &Settings) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&settings.connection_url())
            .await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Wraps an existing pool. Used by integration tests.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for tests).
    #[doc(hidden)]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the destination table if it is absent. Callers treat a
    /// failure here as a warning, not a hard stop.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts the elements strictly in input order, one parameterized
    /// statement per row. The batch aborts on the first date-parse or
    /// insert failure; no transaction wraps the batch, so rows inserted
    /// before the failure stay committed. Returns the number of rows
    /// inserted.
    pub async fn insert_declarations(
        &self,
        elements: &[DisasterDeclarationsElement],
    ) -> Result<u64, StoreError> {
        let mut inserted = 0;
        for element in elements {
            let row = DisasterRow::try_from(element)?;
            sqlx::query(INSERT_SQL)
                .bind(&row.id)
                .bind(row.disaster_number)
                .bind(&row.fema_declaration_string)
                .bind(&row.state)
                .bind(&row.declaration_type)
                .bind(row.declaration_date)
                .bind(&row.fiscal_year_declared)
                .bind(&row.incident_type)
                .bind(&row.declaration_title)
                .bind(&row.designated_area)
                .bind(&row.place_code)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Unable to insert the declaration: {}\n{:#?}", e, element);
                    StoreError::from(e)
                })?;
            inserted += 1;
        }
        Ok(inserted)
    }
}
