pub mod book_repository;
pub mod isbn_generator;

pub use book_repository::{BookRepository, BookRepositoryError};
pub use isbn_generator::IsbnGenerator;
