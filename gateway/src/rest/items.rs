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

//! APIs to manage items and their comments.

use crate::driver::Driver;
use crate::model::{ItemUpdate, NewComment, NewItem, SearchQuery};
use crate::upstream::{UpstreamRequest, UpstreamResponse};
use axum::extract::{Path, State};
use http::Method;
use shareit_core::rest::{EmptyBody, JsonBody, QueryParams, RestError, SharerId};

/// Handler to create an item owned by the caller.
pub(crate) async fn create(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    JsonBody(item): JsonBody<NewItem>,
) -> Result<UpstreamResponse, RestError> {
    let request =
        UpstreamRequest::new(Method::POST, "/items").with_caller(caller).with_json(&item)?;
    Ok(driver.forward(request).await?)
}

/// Handler to list the items owned by the caller.
pub(crate) async fn list(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::GET, "/items").with_caller(caller);
    Ok(driver.forward(request).await?)
}

/// Handler to get an item.
pub(crate) async fn get(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<i32>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::GET, format!("/items/{}", id)).with_caller(caller);
    Ok(driver.forward(request).await?)
}

/// Handler to update some of the details of an item.
pub(crate) async fn update(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<i32>,
    JsonBody(update): JsonBody<ItemUpdate>,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::PATCH, format!("/items/{}", id))
        .with_caller(caller)
        .with_json(&update)?;
    Ok(driver.forward(request).await?)
}

/// Handler to search available items.
pub(crate) async fn search(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    QueryParams(query): QueryParams<SearchQuery>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::GET, "/items/search")
        .with_caller(caller)
        .with_query(&query)?;
    Ok(driver.forward(request).await?)
}

/// Handler to comment on an item.
pub(crate) async fn comment(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<i32>,
    JsonBody(comment): JsonBody<NewComment>,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::POST, format!("/items/{}/comment", id))
        .with_caller(caller)
        .with_json(&comment)?;
    Ok(driver.forward(request).await?)
}
