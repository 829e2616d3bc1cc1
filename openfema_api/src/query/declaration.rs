use chrono::{Datelike, Utc};
use url::form_urlencoded::byte_serialize;
use url::Url;

use super::Query;

/// Sort applied when no `$orderby` is supplied.
const DEFAULT_ORDER_BY: &str = "declarationDate desc";

/// Builder for the `$orderby` / `$top` / `$skip` / `$select` / `$filter`
/// parameters of the Disaster Declarations Summaries endpoint.
///
/// Filter-adding methods accumulate clauses that render as one AND-joined
/// `$filter` conjunction; the scalar options are last-write-wins. No
/// validation of semantic conflicts between options is performed.
#[derive(Default)]
pub struct DeclarationQuery {
    /// `$orderby` fields, e.g. `state desc, declaredCountyArea`.
    pub order_by: String,
    /// Upper bound on returned records (`$top`).
    pub max_count: Option<i64>,
    /// Number of leading records to skip (`$skip`).
    pub offset: Option<i64>,
    /// Columns to return (`$select`). Empty means all.
    pub selected_fields: Vec<String>,
    /// Accumulated filter clauses, AND-joined at render time.
    pub filters: Vec<String>,
}

impl Query for DeclarationQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.set_query(Some(&self.to_query_string()));
        url
    }
}

impl DeclarationQuery {
    /// Caps the number of returned records.
    pub fn with_max_count(mut self, count: i64) -> Self {
        self.max_count = Some(count);
        self
    }

    /// Skips the first `offset` records of the result set.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Overrides the default `declarationDate desc` sort.
    pub fn with_order_by(mut self, fields: &str) -> Self {
        self.order_by = fields.to_string();
        self
    }

    /// Restricts the returned columns. May be called repeatedly.
    pub fn with_selected_field(mut self, field: &str) -> Self {
        self.selected_fields.push(field.to_string());
        self
    }

    /// Adds a raw OData filter clause, AND-joined with any other clauses.
    pub fn with_filter(mut self, clause: &str) -> Self {
        self.filters.push(clause.to_string());
        self
    }

    /// Filters to declarations for a single state, e.g. `TN`.
    pub fn with_state(self, state: &str) -> Self {
        let clause = format!("state eq '{}'", state);
        self.with_filter(&clause)
    }

    /// Filters to declarations made after the start of the given month.
    pub fn with_declared_after(self, year: i32, month: u32) -> Self {
        self.with_filter(&date_filter_clause(year, month))
    }

    /// Filters to declarations made during the current calendar month.
    pub fn with_current_month(self) -> Self {
        let now = Utc::now();
        self.with_declared_after(now.year(), now.month())
    }

    /// Renders the accumulated options as a query string. Values are
    /// percent-encoded here, exactly once; parameter names keep their
    /// literal `$`.
    fn to_query_string(&self) -> String {
        let order_by = if self.order_by.is_empty() {
            DEFAULT_ORDER_BY
        } else {
            self.order_by.as_str()
        };
        let mut query = format!("$orderby={}", encode(order_by));
        if let Some(count) = self.max_count {
            query.push_str(&format!("&$top={}", count));
        }
        if let Some(offset) = self.offset {
            query.push_str(&format!("&$skip={}", offset));
        }
        if !self.selected_fields.is_empty() {
            query.push_str(&format!(
                "&$select={}",
                encode(&self.selected_fields.join(","))
            ));
        }
        if !self.filters.is_empty() {
            query.push_str(&format!("&$filter={}", encode(&self.filters.join(" and "))));
        }
        query
    }
}

fn date_filter_clause(year: i32, month: u32) -> String {
    format!(
        "declarationDate gt '{:04}-{:02}-01T00:00:01.000Z'",
        year, month
    )
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
