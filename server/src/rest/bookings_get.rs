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

//! API to list the bookings made by the caller.

use crate::driver::Driver;
use crate::model::UserId;
use crate::rest::responses::BookingResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use shareit_core::rest::{EmptyBody, QueryParams, RestError, SharerId};

/// Query parameters accepted by the booking listing APIs.
#[derive(Default, Deserialize)]
pub(crate) struct StateQuery {
    /// Name of the state filter to apply.  Defaults to all bookings.
    #[serde(default)]
    pub(crate) state: Option<String>,
}

impl StateQuery {
    /// Returns the requested state filter.
    pub(crate) fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("ALL")
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    QueryParams(query): QueryParams<StateQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let bookings = driver.get_bookings_by_booker(UserId::new(caller), query.state()).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect::<Vec<_>>()))
}
