//! Value records produced by the dump parser
//!
//! `Table` and `Field` are immutable once parsing finishes; the export side
//! only ever reads them.

pub mod field;
pub mod kind;
pub mod table;

pub use field::{Field, KeyKind};
pub use kind::{SemanticKind, classify_sql_type};
pub use table::Table;
