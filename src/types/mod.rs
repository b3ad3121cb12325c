pub mod header;
pub mod log;
pub mod record;

pub use header::*;
pub use log::*;
pub use record::*;
