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

//! API to search available items by text.

use crate::driver::Driver;
use crate::rest::responses::ItemResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use shareit_core::rest::{EmptyBody, QueryParams, RestError};

/// Query parameters accepted by this API.
#[derive(Default, Deserialize)]
pub(crate) struct SearchQuery {
    /// Text to look for in item names and descriptions.
    #[serde(default)]
    text: Option<String>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    QueryParams(query): QueryParams<SearchQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let text = query.text.unwrap_or_default();
    let items = driver.search_items(&text).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect::<Vec<_>>()))
}
