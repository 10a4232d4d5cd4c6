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

//! REST interface for the sharing service.

use crate::driver::Driver;
use axum::Router;

mod booking_get;
mod booking_patch;
mod bookings_get;
mod bookings_owner_get;
mod bookings_post;
mod item_comment_post;
mod item_get;
mod item_patch;
mod items_get;
mod items_post;
mod items_search_get;
mod request_get;
mod requests_all_get;
mod requests_get;
mod requests_post;
mod responses;
#[cfg(test)]
mod testutils;
mod user_delete;
mod user_get;
mod user_patch;
mod users_get;
mod users_post;

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/users", get(users_get::handler).post(users_post::handler))
        .route(
            "/users/:id",
            get(user_get::handler).patch(user_patch::handler).delete(user_delete::handler),
        )
        .route("/items", get(items_get::handler).post(items_post::handler))
        .route("/items/search", get(items_search_get::handler))
        .route("/items/:id", get(item_get::handler).patch(item_patch::handler))
        .route("/items/:id/comment", post(item_comment_post::handler))
        .route("/bookings", get(bookings_get::handler).post(bookings_post::handler))
        .route("/bookings/owner", get(bookings_owner_get::handler))
        .route("/bookings/:id", get(booking_get::handler).patch(booking_patch::handler))
        .route("/requests", get(requests_get::handler).post(requests_post::handler))
        .route("/requests/all", get(requests_all_get::handler))
        .route("/requests/:id", get(request_get::handler))
        .with_state(driver)
}

#[cfg(test)]
mod tests {
    use crate::model::BookingStatus;
    use crate::rest::responses::*;
    use crate::rest::testutils::*;
    use axum::http;
    use serde_json::json;
    use shareit_core::rest::testutils::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_rent_and_review() {
        let context = TestContext::setup().await;

        let alice = OneShotBuilder::new(context.app(), (http::Method::POST, "/users".to_owned()))
            .send_json(json!({"name": "Alice", "email": "alice@example.com"}))
            .await
            .expect_json::<UserResponse>()
            .await;
        let bob = OneShotBuilder::new(context.app(), (http::Method::POST, "/users".to_owned()))
            .send_json(json!({"name": "Bob", "email": "bob@example.com"}))
            .await
            .expect_json::<UserResponse>()
            .await;

        let drill = OneShotBuilder::new(context.app(), (http::Method::POST, "/items".to_owned()))
            .with_sharer_id(alice.id.as_i32())
            .send_json(json!({"name": "Drill", "description": "Cordless drill", "available": true}))
            .await
            .expect_json::<ItemResponse>()
            .await;

        let booking =
            OneShotBuilder::new(context.app(), (http::Method::POST, "/bookings".to_owned()))
                .with_sharer_id(bob.id.as_i32())
                .send_json(json!({
                    "itemId": drill.id,
                    "start": "2024-06-16T10:00:00",
                    "end": "2024-06-16T18:00:00",
                }))
                .await
                .expect_json::<BookingResponse>()
                .await;

        let approved = OneShotBuilder::new(
            context.app(),
            (http::Method::PATCH, format!("/bookings/{}", booking.id)),
        )
        .with_sharer_id(alice.id.as_i32())
        .with_query([("approved", "true")])
        .send_empty()
        .await
        .expect_json::<BookingResponse>()
        .await;
        assert_eq!(BookingStatus::Approved, approved.status);

        let comment_route = (http::Method::POST, format!("/items/{}/comment", drill.id));
        OneShotBuilder::new(context.app(), comment_route.clone())
            .with_sharer_id(bob.id.as_i32())
            .send_json(json!({"text": "Great drill"}))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("has not rented")
            .await;

        context.clock().advance(Duration::from_secs(2 * 24 * 60 * 60));
        OneShotBuilder::new(context.app(), comment_route)
            .with_sharer_id(bob.id.as_i32())
            .send_json(json!({"text": "Great drill"}))
            .await
            .expect_json::<CommentResponse>()
            .await;

        let details =
            OneShotBuilder::new(context.app(), (http::Method::GET, format!("/items/{}", drill.id)))
                .with_sharer_id(alice.id.as_i32())
                .send_empty()
                .await
                .expect_json::<ItemResponse>()
                .await;
        assert_eq!(
            Some(BookingRefResponse { id: booking.id, booker_id: bob.id }),
            details.last_booking
        );
        assert_eq!(None, details.next_booking);
        assert_eq!(1, details.comments.len());
        assert_eq!("Bob", details.comments[0].author_name.as_str());
    }
}
