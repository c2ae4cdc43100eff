pub mod model;
mod output;
pub mod runs;

pub use model::{yield_at_field, RadicalPairModel};
pub use output::write_csv;
pub use runs::{angle_sweep, field_sweep, rate_sweep};
