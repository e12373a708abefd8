use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    AppState, create_book, delete_book, get_book_by_id, list_books, update_book,
};

/// Creates the API router with all book catalog endpoints
///
/// - POST /api/books - Create a book (ISBN is generated by the server)
/// - GET /api/books?page=&size= - List books page by page
/// - GET /api/books/:id - Get a book
/// - PUT /api/books/:id - Replace a book's fields
/// - DELETE /api/books/:id - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Book endpoints
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/:id",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
