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

//! API to modify some of the details of an item.

use crate::driver::Driver;
use crate::model::{ItemId, ItemPatch, UserId};
use crate::rest::responses::ItemResponse;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::model::{Description, Name};
use shareit_core::rest::{JsonBody, RestError, SharerId};

/// Message sent to the server to update an item.  Absent fields are left untouched.
#[derive(Default, Deserialize, Serialize)]
pub(crate) struct ItemUpdateRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<Name>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<Description>,

    /// New availability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) available: Option<bool>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<ItemId>,
    JsonBody(request): JsonBody<ItemUpdateRequest>,
) -> Result<impl IntoResponse, RestError> {
    let patch = ItemPatch {
        name: request.name,
        description: request.description,
        available: request.available,
    };
    let item = driver.update_item(UserId::new(caller), id, patch).await?;
    Ok(Json(ItemResponse::from(item)))
}
