//! Mensura Units - conversion tables and unit-tagged quantities
//!
//! Builds a complete pairwise conversion table from a sparse set of
//! declared factors, then layers an immutable quantity value type on top:
//!
//! - `Conversion` / `ConversionTable`: declare "1 foot = 0.3048 meter" and
//!   a handful of neighbors; the table derives every transitive, reverse,
//!   and identity factor at construction, so lookups never search.
//! - `Quantity`: an amount plus a unit name, with unit-aware conversion,
//!   comparison, and arithmetic. Operations take an `Operand` (scalar or
//!   same-family quantity) and reject the wrong kind up front.
//! - `UnitFamily`: a table bound to a default unit, for call sites that
//!   build many quantities of one kind.
//!
//! Each table models exactly one dimension. Units from different tables
//! (or disjoint components of one table) never convert; the errors say so
//! instead of guessing.

mod error;
mod family;
mod operand;
mod quantity;
mod table;

pub use error::UnitError;
pub use family::UnitFamily;
pub use operand::Operand;
pub use quantity::Quantity;
pub use table::{Conversion, ConversionTable};
