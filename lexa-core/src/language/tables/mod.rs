//! Runtime tables for language rules
//!
//! All tables are allocation-free during lookup.

pub mod abbreviation;
pub mod sonority;
pub mod terminator;

pub use abbreviation::AbbreviationTable;
pub use sonority::{SonorityEntry, SonorityTable};
pub use terminator::{EllipsisSet, TermTable};
