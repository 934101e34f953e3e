mod log;
pub use log::*;
