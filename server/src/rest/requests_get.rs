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

//! API to list the requests posted by the caller.

use crate::driver::Driver;
use crate::model::UserId;
use crate::rest::responses::RequestResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use shareit_core::rest::{EmptyBody, RestError, SharerId};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let requests = driver.get_own_requests(UserId::new(caller)).await?;
    Ok(Json(requests.into_iter().map(RequestResponse::from).collect::<Vec<_>>()))
}
