// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API to post a comment on an item.

use crate::driver::Driver;
use crate::model::{ItemId, UserId};
use crate::rest::responses::CommentResponse;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::model::CommentText;
use shareit_core::rest::{JsonBody, RestError, SharerId};

/// Message sent to the server to comment on an item.
#[derive(Deserialize, Serialize)]
pub(crate) struct CommentCreateRequest {
    /// Content of the comment.
    pub(crate) text: CommentText,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(item): Path<ItemId>,
    JsonBody(request): JsonBody<CommentCreateRequest>,
) -> Result<impl IntoResponse, RestError> {
    let comment = driver.add_comment(UserId::new(caller), item, request.text).await?;
    Ok(Json(CommentResponse::from(comment)))
}
