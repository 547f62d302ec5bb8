//! Atom header, traversal path and the chunk offset table,
//! i.e. the few atom structures needed to locate telemetry.

mod header;
mod path;
mod stco;

pub use header::AtomHeader;
pub use path::AtomPath;
pub use stco::Stco;
