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

//! API to get the details of a user.

use crate::driver::Driver;
use crate::model::UserId;
use crate::rest::responses::UserResponse;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shareit_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<UserId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let user = driver.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use shareit_core::rest::testutils::*;
    use shareit_core::test_payload_must_be_empty;

    fn route(id: i32) -> (http::Method, String) {
        (http::Method::GET, format!("/users/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        let _alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;

        let response = OneShotBuilder::new(context.app(), route(bob.id().as_i32()))
            .send_empty()
            .await
            .expect_json::<UserResponse>()
            .await;
        assert_eq!(UserResponse::from(bob), response);
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route(42))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("User with id 42 not found")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route(1));
}
