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

//! REST interface of the gateway.
//!
//! Every API validates its input and then hands the call to the server, relaying whatever the
//! server answers.

use crate::driver::Driver;
use crate::upstream::UpstreamResponse;
use axum::response::{IntoResponse, Response};
use axum::Router;
use http::header::CONTENT_TYPE;

mod bookings;
mod items;
mod requests;
#[cfg(test)]
mod testutils;
mod users;

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        let headers = response.headers_mut();
        match self.content_type {
            Some(content_type) => {
                headers.insert(CONTENT_TYPE, content_type);
            }
            None => {
                headers.remove(CONTENT_TYPE);
            }
        }
        response
    }
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get).patch(users::update).delete(users::delete))
        .route("/items", get(items::list).post(items::create))
        .route("/items/search", get(items::search))
        .route("/items/:id", get(items::get).patch(items::update))
        .route("/items/:id/comment", post(items::comment))
        .route("/bookings", get(bookings::list_by_booker).post(bookings::create))
        .route("/bookings/owner", get(bookings::list_by_owner))
        .route("/bookings/:id", get(bookings::get).patch(bookings::decide))
        .route("/requests", get(requests::list_own).post(requests::create))
        .route("/requests/all", get(requests::list_others))
        .route("/requests/:id", get(requests::get))
        .with_state(driver)
}
