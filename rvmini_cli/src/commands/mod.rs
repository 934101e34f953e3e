mod common_args;

mod assemble;
pub use assemble::*;

mod decode;
pub use decode::*;

mod info;
pub use info::*;
