//! Query builders for the OData-style parameters accepted by OpenFEMA.

mod declaration;

pub use declaration::DeclarationQuery;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
