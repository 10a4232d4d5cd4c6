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

//! API to modify some of the details of a user.

use crate::driver::Driver;
use crate::model::{UserId, UserPatch};
use crate::rest::responses::UserResponse;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::model::{EmailAddress, Name};
use shareit_core::rest::{JsonBody, RestError};

/// Message sent to the server to update a user.  Absent fields are left untouched.
#[derive(Default, Deserialize, Serialize)]
pub(crate) struct UserUpdateRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<Name>,

    /// New contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<EmailAddress>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<UserId>,
    JsonBody(request): JsonBody<UserUpdateRequest>,
) -> Result<impl IntoResponse, RestError> {
    let patch = UserPatch { name: request.name, email: request.email };
    let user = driver.update_user(id, patch).await?;
    Ok(Json(UserResponse::from(user)))
}
