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

//! API to approve or reject a booking.

use crate::driver::Driver;
use crate::model::{BookingId, UserId};
use crate::rest::responses::BookingResponse;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::rest::{EmptyBody, QueryParams, RestError, SharerId};

/// Query parameters accepted by this API.
#[derive(Deserialize, Serialize)]
pub(crate) struct DecisionQuery {
    /// Whether the owner approves the booking.
    pub(crate) approved: bool,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<BookingId>,
    QueryParams(query): QueryParams<DecisionQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let booking = driver.decide_booking(UserId::new(caller), id, query.approved).await?;
    Ok(Json(BookingResponse::from(booking)))
}
