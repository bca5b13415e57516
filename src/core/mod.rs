pub mod collection;
pub mod discover;
pub mod engine;
pub mod error;
pub mod io;
pub mod model;
pub mod naming;
pub mod parse;
pub mod sections;
