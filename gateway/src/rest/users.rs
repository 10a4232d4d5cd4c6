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

//! APIs to manage users.  These are the only APIs that do not need a caller identity.

use crate::driver::Driver;
use crate::model::{NewUser, UserUpdate};
use crate::upstream::{UpstreamRequest, UpstreamResponse};
use axum::extract::{Path, State};
use http::Method;
use shareit_core::rest::{EmptyBody, JsonBody, RestError};

/// Handler to register a new user.
pub(crate) async fn create(
    State(driver): State<Driver>,
    JsonBody(user): JsonBody<NewUser>,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::POST, "/users").with_json(&user)?;
    Ok(driver.forward(request).await?)
}

/// Handler to list all users.
pub(crate) async fn list(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    Ok(driver.forward(UpstreamRequest::new(Method::GET, "/users")).await?)
}

/// Handler to get a user.
pub(crate) async fn get(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    Ok(driver.forward(UpstreamRequest::new(Method::GET, format!("/users/{}", id))).await?)
}

/// Handler to update some of the details of a user.
pub(crate) async fn update(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    JsonBody(update): JsonBody<UserUpdate>,
) -> Result<UpstreamResponse, RestError> {
    let request =
        UpstreamRequest::new(Method::PATCH, format!("/users/{}", id)).with_json(&update)?;
    Ok(driver.forward(request).await?)
}

/// Handler to delete a user.
pub(crate) async fn delete(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    Ok(driver.forward(UpstreamRequest::new(Method::DELETE, format!("/users/{}", id))).await?)
}
