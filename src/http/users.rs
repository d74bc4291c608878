//! Handlers for the `/user` routes.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::{Deserialize, Serialize};

use super::{ApiResult, AppState};
use crate::message::ports::MessageStore;
use crate::user::{domain::User, ports::UserRepository};

/// Body of `POST /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name for the new user.
    pub user_name: String,
}

pub(super) async fn create_user<S, U>(
    State(state): State<AppState<S, U>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Json<User>>
where
    S: MessageStore,
    U: UserRepository,
{
    let Json(request) = payload?;
    Ok(Json(state.users().create_user(&request.user_name).await?))
}

pub(super) async fn get_user<S, U>(
    State(state): State<AppState<S, U>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<User>>
where
    S: MessageStore,
    U: UserRepository,
{
    let Path(user_id) = path?;
    Ok(Json(state.users().get_user_by_id(user_id).await?))
}
