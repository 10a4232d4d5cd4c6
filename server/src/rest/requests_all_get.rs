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

//! API to page through the requests posted by other users.

use crate::driver::Driver;
use crate::model::UserId;
use crate::rest::responses::RequestResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::rest::{EmptyBody, QueryParams, RestError, SharerId};

/// Default number of requests per page.
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Returns the page size to use when the query does not specify one.
fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query parameters accepted by this API.
#[derive(Deserialize, Serialize)]
pub(crate) struct PageQuery {
    /// Zero-based index of the page to return.
    #[serde(default)]
    pub(crate) from: i64,

    /// Maximum number of requests per page.
    #[serde(default = "default_page_size")]
    pub(crate) size: i64,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    QueryParams(query): QueryParams<PageQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let requests = driver.get_other_requests(UserId::new(caller), query.from, query.size).await?;
    Ok(Json(requests.into_iter().map(RequestResponse::from).collect::<Vec<_>>()))
}
