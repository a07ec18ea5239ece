pub mod coerce;
pub mod record;
pub mod subsector;

pub use coerce::Coerced;
pub use record::{build_row, ParsedRow, SqlValue};
pub use subsector::{subsector_name, Resolved, SubsectorIndex};
