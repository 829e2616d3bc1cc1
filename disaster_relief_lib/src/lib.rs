//! Library layer for the disaster relief loader: connection settings and the
//! Postgres store that persists OpenFEMA disaster declarations.

pub mod error;
pub mod settings;
pub mod store;

pub use openfema_api;
pub use openfema_api::types;
pub use openfema_api::{Client, DeclarationQuery, Query};

pub use error::StoreError;
pub use settings::Settings;
pub use store::{DisasterRow, Store};
