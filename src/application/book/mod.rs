mod book_service;
pub mod dto;
mod errors;
pub mod mapping;
pub mod validation;

pub use book_service::{
    MAX_ISBN_ATTEMPTS, ServiceDependencies, create_book, delete_book, get_book_by_id, list_books,
    update_book,
};
pub use dto::BookDto;
pub use errors::{BookApplicationError, Result};
pub use mapping::MappingError;
pub use validation::{validate_book, violation_messages};
