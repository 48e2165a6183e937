pub mod tabled_rowtype;

pub use tabled_rowtype::*;
