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

//! API to create a new item owned by the caller.

use crate::driver::Driver;
use crate::model::{RequestId, UserId};
use crate::rest::responses::ItemResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::model::{Description, Name};
use shareit_core::rest::{JsonBody, RestError, SharerId};

/// Message sent to the server to create an item.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemCreateRequest {
    /// Display name of the item.
    pub(crate) name: Name,

    /// Free-form description of the item.
    pub(crate) description: Description,

    /// Whether the item can be booked right away.
    pub(crate) available: bool,

    /// Request that this item answers, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: Option<RequestId>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    JsonBody(request): JsonBody<ItemCreateRequest>,
) -> Result<impl IntoResponse, RestError> {
    let item = driver
        .create_item(
            UserId::new(caller),
            request.name,
            request.description,
            request.available,
            request.request_id,
        )
        .await?;
    Ok(Json(ItemResponse::from(item)))
}
