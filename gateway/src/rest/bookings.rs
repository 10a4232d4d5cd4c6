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

//! APIs to manage bookings.

use crate::driver::Driver;
use crate::model::{ApprovalQuery, NewBooking, StateQuery};
use crate::upstream::{UpstreamRequest, UpstreamResponse};
use axum::extract::{Path, State};
use http::Method;
use shareit_core::rest::{EmptyBody, JsonBody, QueryParams, RestError, SharerId};

/// Handler to book an item.
pub(crate) async fn create(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    JsonBody(booking): JsonBody<NewBooking>,
) -> Result<UpstreamResponse, RestError> {
    Ok(driver.create_booking(caller, booking).await?)
}

/// Handler to get a booking.
pub(crate) async fn get(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<i32>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request =
        UpstreamRequest::new(Method::GET, format!("/bookings/{}", id)).with_caller(caller);
    Ok(driver.forward(request).await?)
}

/// Handler to approve or reject a booking.
pub(crate) async fn decide(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    Path(id): Path<i32>,
    QueryParams(query): QueryParams<ApprovalQuery>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::PATCH, format!("/bookings/{}", id))
        .with_caller(caller)
        .with_query(&query)?;
    Ok(driver.forward(request).await?)
}

/// Handler to list the bookings made by the caller.
pub(crate) async fn list_by_booker(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    QueryParams(query): QueryParams<StateQuery>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request =
        UpstreamRequest::new(Method::GET, "/bookings").with_caller(caller).with_query(&query)?;
    Ok(driver.forward(request).await?)
}

/// Handler to list the bookings of the items owned by the caller.
pub(crate) async fn list_by_owner(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    QueryParams(query): QueryParams<StateQuery>,
    _: EmptyBody,
) -> Result<UpstreamResponse, RestError> {
    let request = UpstreamRequest::new(Method::GET, "/bookings/owner")
        .with_caller(caller)
        .with_query(&query)?;
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
            (http::Method::POST, "/bookings".to_owned())
        }

        #[tokio::test]
        async fn test_ok() {
            let context = TestContext::setup();
            let reply = json!({"id": 1, "status": "WAITING"});
            context.upstream.push_response(http::StatusCode::OK, reply.clone()).await;

            let response = OneShotBuilder::new(context.app(), route())
                .with_sharer_id(2)
                .send_json(json!({
                    "itemId": 1,
                    "start": "2024-06-16T10:00:00",
                    "end": "2024-06-17T10:00:00",
                }))
                .await
                .expect_json::<serde_json::Value>()
                .await;
            assert_eq!(reply, response);

            let request = context.upstream.expect_one_request().await;
            assert_eq!(Some(2), request.caller);
            assert_eq!("/bookings", request.path);
        }

        #[tokio::test]
        async fn test_invalid() {
            for (body, exp_error) in [
                (json!({"start": "2024-06-16T10:00:00", "end": "2024-06-17T10:00:00"}), "itemId"),
                (json!({"itemId": 1, "end": "2024-06-17T10:00:00"}), "missing field `start`"),
                (json!({"itemId": 1, "start": "2024-06-16T10:00:00", "end": null}), "null"),
                (
                    json!({
                        "itemId": 1,
                        "start": "2024-06-14T10:00:00",
                        "end": "2024-06-17T10:00:00",
                    }),
                    "start cannot be in the past",
                ),
                (
                    json!({
                        "itemId": 1,
                        "start": "2024-06-15T12:00:00",
                        "end": "2024-06-15T11:00:00",
                    }),
                    "end must be in the future",
                ),
            ] {
                let context = TestContext::setup();
                OneShotBuilder::new(context.app(), route())
                    .with_sharer_id(2)
                    .send_json(body)
                    .await
                    .expect_status(http::StatusCode::BAD_REQUEST)
                    .expect_error(exp_error)
                    .await;
                context.upstream.expect_no_requests().await;
            }
        }

        test_payload_must_be_json!(TestContext::setup().into_app(), route());
    }

    mod get {
        use super::*;

        fn route(id: i32) -> (http::Method, String) {
            (http::Method::GET, format!("/bookings/{}", id))
        }

        #[tokio::test]
        async fn test_ok() {
            let context = TestContext::setup();
            let error = json!({"error": "Forbidden", "message": "Access denied: no"});
            context.upstream.push_response(http::StatusCode::FORBIDDEN, error).await;

            OneShotBuilder::new(context.app(), route(9))
                .with_sharer_id(2)
                .send_empty()
                .await
                .expect_status(http::StatusCode::FORBIDDEN)
                .expect_error("Access denied")
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!(UpstreamRequest::new(Method::GET, "/bookings/9").with_caller(2), request);
        }

        test_payload_must_be_empty!(TestContext::setup().into_app(), route(1));
    }

    mod decide {
        use super::*;

        fn route(id: i32) -> (http::Method, String) {
            (http::Method::PATCH, format!("/bookings/{}", id))
        }

        #[tokio::test]
        async fn test_ok() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), route(9))
                .with_sharer_id(2)
                .with_query([("approved", "false")])
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!("/bookings/9", request.path);
            assert_eq!(Some("approved=false"), request.query.as_deref());
        }

        #[tokio::test]
        async fn test_not_a_boolean() {
            for (query, exp_error) in [
                (vec![], "missing field `approved`"),
                (vec![("approved", "yes")], "Failed to deserialize query string"),
            ] {
                let context = TestContext::setup();
                OneShotBuilder::new(context.app(), route(9))
                    .with_sharer_id(2)
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
            route(1),
            [("approved", "true")]
        );
    }

    mod list {
        use super::*;

        #[tokio::test]
        async fn test_by_booker() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), (http::Method::GET, "/bookings".to_owned()))
                .with_sharer_id(2)
                .with_query([("state", "PAST")])
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!("/bookings", request.path);
            assert_eq!(Some("state=PAST"), request.query.as_deref());
        }

        #[tokio::test]
        async fn test_by_owner_without_state() {
            let context = TestContext::setup();

            OneShotBuilder::new(context.app(), (http::Method::GET, "/bookings/owner".to_owned()))
                .with_sharer_id(2)
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;

            let request = context.upstream.expect_one_request().await;
            assert_eq!(
                UpstreamRequest::new(Method::GET, "/bookings/owner").with_caller(2),
                request
            );
        }

        #[tokio::test]
        async fn test_unknown_state_is_left_to_server() {
            let context = TestContext::setup();
            let error = json!({"error": "Bad Request", "message": "Unknown state: FOO"});
            context.upstream.push_response(http::StatusCode::BAD_REQUEST, error).await;

            OneShotBuilder::new(context.app(), (http::Method::GET, "/bookings".to_owned()))
                .with_sharer_id(2)
                .with_query([("state", "FOO")])
                .send_empty()
                .await
                .expect_status(http::StatusCode::BAD_REQUEST)
                .expect_error("Unknown state: FOO")
                .await;
        }

        test_payload_must_be_empty!(
            TestContext::setup().into_app(),
            (http::Method::GET, "/bookings/owner".to_owned())
        );
    }
}
