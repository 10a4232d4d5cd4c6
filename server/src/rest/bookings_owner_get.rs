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

//! API to list the bookings of the items owned by the caller.

use crate::driver::Driver;
use crate::model::UserId;
use crate::rest::bookings_get::StateQuery;
use crate::rest::responses::BookingResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use shareit_core::rest::{EmptyBody, QueryParams, RestError, SharerId};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    SharerId(caller): SharerId,
    QueryParams(query): QueryParams<StateQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let bookings = driver.get_bookings_by_owner(UserId::new(caller), query.state()).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect::<Vec<_>>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookingStatus;
    use crate::rest::testutils::*;
    use axum::http;
    use shareit_core::rest::testutils::*;
    use shareit_core::test_payload_must_be_empty;
    use time::Duration;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/bookings/owner".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let carol = context.create_user("Carol").await;
        let drill = context.create_item(&alice, "Drill", true).await;
        let saw = context.create_item(&carol, "Saw", true).await;
        let now = context.now();
        let current = context
            .create_booking(
                &drill,
                &bob,
                now - Duration::hours(1),
                now + Duration::hours(1),
                BookingStatus::Approved,
            )
            .await;
        let rejected = context
            .create_booking(
                &drill,
                &carol,
                now + Duration::days(1),
                now + Duration::days(2),
                BookingStatus::Rejected,
            )
            .await;
        context
            .create_booking(
                &saw,
                &bob,
                now + Duration::days(1),
                now + Duration::days(2),
                BookingStatus::Waiting,
            )
            .await;

        let response = OneShotBuilder::new(context.app(), route())
            .with_sharer_id(alice.id().as_i32())
            .send_empty()
            .await
            .expect_json::<Vec<BookingResponse>>()
            .await;
        assert_eq!(
            vec![BookingResponse::from(rejected.clone()), BookingResponse::from(current.clone())],
            response
        );

        let response = OneShotBuilder::new(context.app(), route())
            .with_sharer_id(alice.id().as_i32())
            .with_query([("state", "CURRENT")])
            .send_empty()
            .await
            .expect_json::<Vec<BookingResponse>>()
            .await;
        assert_eq!(vec![BookingResponse::from(current)], response);

        let response = OneShotBuilder::new(context.app(), route())
            .with_sharer_id(alice.id().as_i32())
            .with_query([("state", "REJECTED")])
            .send_empty()
            .await
            .expect_json::<Vec<BookingResponse>>()
            .await;
        assert_eq!(vec![BookingResponse::from(rejected)], response);
    }

    #[tokio::test]
    async fn test_unknown_state() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;

        OneShotBuilder::new(context.app(), route())
            .with_sharer_id(alice.id().as_i32())
            .with_query([("state", "all")])
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Unknown state: all")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
