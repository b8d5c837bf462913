//! Card system: definitions and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`, `PatronId`: catalog indices
//! - `Level`: card tier (one draw pile and face-up slot per level)
//! - `Card`: bonus color, reputation, colored cost
//! - `Patron`: reputation awarded for meeting bonus counts
//! - `Catalog`: validated, id-indexed definitions shared by boards

pub mod definition;
pub mod catalog;

pub use definition::{Card, CardId, Level, Patron, PatronId};
pub use catalog::Catalog;
