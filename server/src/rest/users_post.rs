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

//! API to register a new user.

use crate::driver::Driver;
use crate::rest::responses::UserResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shareit_core::model::{EmailAddress, Name};
use shareit_core::rest::{JsonBody, RestError};

/// Message sent to the server to create a user.
#[derive(Deserialize, Serialize)]
pub(crate) struct UserCreateRequest {
    /// Display name of the new user.
    pub(crate) name: Name,

    /// Contact address of the new user.
    pub(crate) email: EmailAddress,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(request): JsonBody<UserCreateRequest>,
) -> Result<impl IntoResponse, RestError> {
    let user = driver.create_user(request.name, request.email).await?;
    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::model::UserId;
    use crate::rest::testutils::*;
    use axum::http;
    use serde_json::json;
    use shareit_core::rest::testutils::*;
    use shareit_core::test_payload_must_be_json;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/users".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let request = UserCreateRequest {
            name: Name::from("Alice"),
            email: EmailAddress::from("alice@example.com"),
        };
        let response = OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_json::<UserResponse>()
            .await;
        assert_eq!("Alice", response.name.as_str());
        assert_eq!("alice@example.com", response.email.as_str());

        let user = db::get_user(&mut context.ex().await, response.id).await.unwrap();
        assert_eq!(UserResponse::from(user), response);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let context = TestContext::setup().await;
        context.create_user("Alice").await;

        let request = UserCreateRequest {
            name: Name::from("Impostor"),
            email: EmailAddress::from("alice@example.com"),
        };
        OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CONFLICT)
            .expect_error("alice@example.com is already in use")
            .await;

        assert!(db::get_user(&mut context.ex().await, UserId::new(2)).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_fields() {
        for (body, exp_error) in [
            (json!({"name": "", "email": "a@example.com"}), "Name cannot be blank"),
            (json!({"name": "Alice", "email": "not-an-email"}), "valid address"),
            (json!({"email": "a@example.com"}), "missing field `name`"),
        ] {
            OneShotBuilder::new(TestContext::setup().await.into_app(), route())
                .send_json(body)
                .await
                .expect_status(http::StatusCode::BAD_REQUEST)
                .expect_error(exp_error)
                .await;
        }
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
