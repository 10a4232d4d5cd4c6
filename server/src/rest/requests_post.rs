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

//! API to post a request for an item that nobody shares yet.

use crate::driver::Driver;
use crate::model::UserId;
use crate::rest::responses::RequestResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::model::Description;
use shareit_core::rest::{JsonBody, RestError, SharerId};

/// Message sent to the server to create a request.
#[derive(Deserialize, Serialize)]
pub(crate) struct RequestCreateRequest {
    /// Description of the wanted item.
    pub(crate) description: Description,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    JsonBody(request): JsonBody<RequestCreateRequest>,
) -> Result<impl IntoResponse, RestError> {
    let request = driver.create_request(UserId::new(caller), request.description).await?;
    Ok(Json(RequestResponse::from(request)))
}
