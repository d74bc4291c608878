//! Handlers for the `/message` routes.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::{ApiResult, AppState};
use crate::message::{domain::Message, ports::MessageStore};
use crate::user::{domain::User, ports::UserRepository};

/// Body of `POST /message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Identifier of the sending user.
    pub sender_id: i64,
    /// Identifier of the receiving user.
    pub receiver_id: i64,
    /// Message text.
    pub content: String,
}

// Ids are checked by the message service before the registry lookup.
fn user_ref(user_id: i64) -> User {
    User::new(user_id, String::new())
}

pub(super) async fn send_message<S, U>(
    State(state): State<AppState<S, U>>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<Json<Message>>
where
    S: MessageStore,
    U: UserRepository,
{
    let Json(request) = payload?;
    let sender = user_ref(request.sender_id);
    let receiver = user_ref(request.receiver_id);
    let message = state
        .messages()
        .send_message(Some(&sender), Some(&receiver), request.content)
        .await?;
    Ok(Json(message))
}

pub(super) async fn list_messages<S, U>(
    State(state): State<AppState<S, U>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<Message>>>
where
    S: MessageStore,
    U: UserRepository,
{
    let Path(user_id) = path?;
    let user = user_ref(user_id);
    Ok(Json(state.messages().get_messages(Some(&user)).await?))
}

pub(super) async fn list_sorted_messages<S, U>(
    State(state): State<AppState<S, U>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<Message>>>
where
    S: MessageStore,
    U: UserRepository,
{
    let Path(user_id) = path?;
    let user = user_ref(user_id);
    let sorted = state
        .messages()
        .get_messages_sorted_by_timestamp(Some(&user))
        .await?;
    Ok(Json(sorted))
}

pub(super) async fn delete_message<S, U>(
    State(state): State<AppState<S, U>>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<StatusCode>
where
    S: MessageStore,
    U: UserRepository,
{
    let Path((user_id, message_id)) = path?;
    let user = user_ref(user_id);
    state
        .messages()
        .delete_message(Some(&user), message_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
