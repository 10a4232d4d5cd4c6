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

//! API to get the details of a request.

use crate::driver::Driver;
use crate::model::{RequestId, UserId};
use crate::rest::responses::RequestResponse;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shareit_core::rest::{EmptyBody, RestError, SharerId};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<RequestId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let request = driver.get_request(UserId::new(caller), id).await?;
    Ok(Json(RequestResponse::from(request)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use shareit_core::rest::testutils::*;
    use shareit_core::test_payload_must_be_empty;

    fn route(id: i32) -> (http::Method, String) {
        (http::Method::GET, format!("/requests/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let request = context.create_request(&alice, "A ladder", context.now()).await;

        let response = OneShotBuilder::new(context.app(), route(request.id().as_i32()))
            .with_sharer_id(bob.id().as_i32())
            .send_empty()
            .await
            .expect_json::<RequestResponse>()
            .await;
        assert_eq!(RequestResponse::from(request), response);
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;

        OneShotBuilder::new(context.app(), route(10))
            .with_sharer_id(alice.id().as_i32())
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("Request with id 10 not found")
            .await;
    }

    #[tokio::test]
    async fn test_unknown_caller() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let request = context.create_request(&alice, "A ladder", context.now()).await;

        OneShotBuilder::new(context.app(), route(request.id().as_i32()))
            .with_sharer_id(99)
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("User with id 99 not found")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route(1));
}
