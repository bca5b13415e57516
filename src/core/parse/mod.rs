pub mod classify;
pub mod range;
pub mod scalars;

mod assemble;

pub use assemble::assemble;
