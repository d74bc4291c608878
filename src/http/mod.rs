//! HTTP adapter exposing the message and user services as a JSON API.
//!
//! Routes:
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | `POST` | `/message` | send a message |
//! | `GET` | `/message/{user_id}` | list a user's inbox |
//! | `GET` | `/message/{user_id}/sorted` | list a user's inbox by timestamp |
//! | `DELETE` | `/message/{user_id}/{message_id}` | delete a message |
//! | `POST` | `/user` | register a user |
//! | `GET` | `/user/{user_id}` | look up a user |
//!
//! `DELETE /message/{user_id}/sorted` answers 405 because the static
//! `sorted` segment wins over `{message_id}`.
//!
//! Failures are rendered as `{"error": "..."}` with 400 for invalid input,
//! 404 for missing users or messages, and 500 for everything else.

mod error;
mod messages;
mod state;
mod users;

pub use error::{ApiError, ApiResult};
pub use messages::SendMessageRequest;
pub use state::{AppState, InMemoryAppState};
pub use users::CreateUserRequest;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::message::ports::MessageStore;
use crate::user::ports::UserRepository;

/// Builds the application router over the given state.
///
/// # Example
///
/// ```
/// use postbox::http::{AppState, router};
///
/// let app = router(AppState::in_memory());
/// # drop(app);
/// ```
pub fn router<S, U>(state: AppState<S, U>) -> Router
where
    S: MessageStore + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/message", post(messages::send_message::<S, U>))
        .route("/message/{user_id}", get(messages::list_messages::<S, U>))
        .route(
            "/message/{user_id}/sorted",
            get(messages::list_sorted_messages::<S, U>),
        )
        .route(
            "/message/{user_id}/{message_id}",
            delete(messages::delete_message::<S, U>),
        )
        .route("/user", post(users::create_user::<S, U>))
        .route("/user/{user_id}", get(users::get_user::<S, U>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
