pub mod assembler;
pub mod frame;
pub mod line_buffer;

pub use assembler::StreamAssembler;
pub use frame::{RawFrame, data_payload};
pub use line_buffer::LineBuffer;
