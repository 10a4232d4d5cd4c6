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

//! API to book an item.

use crate::driver::Driver;
use crate::model::{ItemId, UserId};
use crate::rest::responses::BookingResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::model::datetime;
use shareit_core::rest::{JsonBody, RestError, SharerId};
use time::OffsetDateTime;

/// Message sent to the server to book an item.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingCreateRequest {
    /// Item to book.
    pub(crate) item_id: ItemId,

    /// When the booking begins.
    #[serde(default, with = "datetime::option")]
    pub(crate) start: Option<OffsetDateTime>,

    /// When the booking ends.
    #[serde(default, with = "datetime::option")]
    pub(crate) end: Option<OffsetDateTime>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    JsonBody(request): JsonBody<BookingCreateRequest>,
) -> Result<impl IntoResponse, RestError> {
    let booking = driver
        .create_booking(UserId::new(caller), request.item_id, request.start, request.end)
        .await?;
    Ok(Json(BookingResponse::from(booking)))
}
