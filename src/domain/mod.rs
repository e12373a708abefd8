pub mod book;
pub mod isbn;
pub mod pagination;
pub mod value_objects;

pub use book::*;
pub use pagination::*;
pub use value_objects::*;
