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

//! APIs to manage item requests.

use crate::driver::Driver;
use crate::model::{NewRequest, PageQuery};
use crate::upstream::{UpstreamRequest, UpstreamResponse};
use axum::extract::{Path, State};
use http::Method;
use shareit_core::rest::{EmptyBody, JsonBody, QueryParams, RestError, SharerId};

/// Handler to post a request for an item.
pub(crate) async fn create(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    JsonBody(request): JsonBody<NewRequest>,
) -> Result<UpstreamResponse, RestError> {
    let request =
        UpstreamRequest::new(Method::POST, "/requests").with_caller(caller).with_json(&request)?;
    Ok(driver.forward(request).await?)
}

/// Handler to list the requests posted by the caller.
pub(crate) async fn list_own(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::GET, "/requests").with_caller(caller);
    Ok(driver.forward(request).await?)
}

/// Handler to page through the requests posted by other users.
pub(crate) async fn list_others(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    QueryParams(page): QueryParams<PageQuery>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    Ok(driver.get_other_requests(caller, page).await?)
}

/// Handler to get a request.
pub(crate) async fn get(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<i32>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request =
        UpstreamRequest::new(Method::GET, format!("/requests/{}", id)).with_caller(caller);
    Ok(driver.forward(request).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use serde_json::json;
    use shareit_core::rest::testutils::*;
    use shareit_core::{test_payload_must_be_empty, test_payload_must_be_json};

    mod create {
        use super::*;

        fn route() -> (http::Method, String) {
            (http::Method::POST, "/requests".to_owned())
        }

        #[tokio::test]
        async fn test_ok() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), route())
                .with_sharer_id(6)
                .send_json(json!({"description": "A ladder"}))
                .await
                .expect_json::<serde_json::Value>()
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!(
                UpstreamRequest::new(Method::POST, "/requests")
                    .with_caller(6)
                    .with_json(&json!({"description": "A ladder"}))
                    .unwrap(),
                request
            );
        }

        #[tokio::test]
        async fn test_blank_description() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), route())
                .with_sharer_id(6)
                .send_json(json!({"description": ""}))
                .await
                .expect_status(http::StatusCode::BAD_REQUEST)
                .expect_error("Description cannot be blank")
                .await;
            context.upstream.expect_no_requests().await;
        }

        test_payload_must_be_json!(TestContext::setup().into_app(), route());
    }

    mod list_own {
        use super::*;

        fn route() -> (http::Method, String) {
            (http::Method::GET, "/requests".to_owned())
        }

        #[tokio::test]
        async fn test_ok() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), route())
                .with_sharer_id(6)
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!(UpstreamRequest::new(Method::GET, "/requests").with_caller(6), request);
        }

        test_payload_must_be_empty!(TestContext::setup().into_app(), route());
    }

    mod list_others {
        use super::*;

        fn route() -> (http::Method, String) {
            (http::Method::GET, "/requests/all".to_owned())
        }

        #[tokio::test]
        async fn test_ok() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), route())
                .with_sharer_id(6)
                .with_query([("from", "0"), ("size", "20")])
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!(Some("from=0&size=20"), request.query.as_deref());
        }

        #[tokio::test]
        async fn test_invalid_pages() {
            for (query, exp_error) in [
                (vec![("size", "20")], "missing field `from`"),
                (vec![("from", "0")], "missing field `size`"),
                (vec![("from", "-1"), ("size", "20")], "Page index cannot be negative"),
                (vec![("from", "0"), ("size", "0")], "Page size must be positive"),
                (vec![("from", "x"), ("size", "1")], "Failed to deserialize query string"),
            ] {
                let context = TestContext::setup();
                OneShotBuilder::new(context.app(), route())
                    .with_sharer_id(6)
                    .with_query(query)
                    .send_empty()
                    .await
                    .expect_status(http::StatusCode::BAD_REQUEST)
                    .expect_error(exp_error)
                    .await;
                context.upstream.expect_no_requests().await;
            }
        }

        test_payload_must_be_empty!(
            TestContext::setup().into_app(),
            route(),
            [("from", "0"), ("size", "1")]
        );
    }

    mod get {
        use super::*;

        fn route(id: i32) -> (http::Method, String) {
            (http::Method::GET, format!("/requests/{}", id))
        }

        #[tokio::test]
        async fn test_ok() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), route(3))
                .with_sharer_id(6)
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!(UpstreamRequest::new(Method::GET, "/requests/3").with_caller(6), request);
        }

        test_payload_must_be_empty!(TestContext::setup().into_app(), route(1));
    }
}
