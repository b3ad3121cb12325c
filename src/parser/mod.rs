pub mod battery;
pub mod frame;
pub mod header;
pub mod main;
pub mod osd;
pub mod stream;

pub use battery::*;
pub use frame::*;
pub use header::*;
pub use main::*;
pub use osd::*;
pub use stream::*;
