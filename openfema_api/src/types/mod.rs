mod declaration;
mod meta;

pub use declaration::{DisasterDeclarationsElement, DECLARATION_DATE_LAYOUT};
pub use meta::{DisasterDeclarationsV2, MetaData};
