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

//! Validation of booking operations.

use crate::driver::Driver;
use crate::model::NewBooking;
use crate::upstream::{UpstreamRequest, UpstreamResponse};
use http::Method;
use shareit_core::clocks::Clock;
use shareit_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Books an item on behalf of `caller`.
    ///
    /// The booking may start right now but not earlier, and must end in the future.  The rest of
    /// the range checks are done by the server.
    pub(crate) async fn create_booking(
        self,
        caller: i32,
        booking: NewBooking,
    ) -> DriverResult<UpstreamResponse> {
        let now = self.clock.now_utc();
        if booking.start < now {
            return Err(DriverError::InvalidInput(
                "Booking start cannot be in the past".to_owned(),
            ));
        }
        if booking.end <= now {
            return Err(DriverError::InvalidInput("Booking end must be in the future".to_owned()));
        }

        let request =
            UpstreamRequest::new(Method::POST, "/bookings").with_caller(caller).with_json(&booking)?;
        self.forward(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use serde_json::json;
    use time::Duration;

    #[tokio::test]
    async fn test_create_booking_ok() {
        let context = TestContext::setup();
        let now = context.now();

        let booking = NewBooking { item_id: 4, start: now, end: now + Duration::hours(2) };
        context.driver().create_booking(8, booking).await.unwrap();

        let request = context.upstream.expect_one_request().await;
        assert_eq!(Method::POST, request.method);
        assert_eq!("/bookings", request.path);
        assert_eq!(Some(8), request.caller);
        let exp_body = json!({
            "itemId": 4,
            "start": "2024-06-15T12:00:00",
            "end": "2024-06-15T14:00:00",
        });
        assert_eq!(Some(exp_body), request.body);
    }

    #[tokio::test]
    async fn test_create_booking_keeps_subsecond_range() {
        let context = TestContext::setup();
        let now = context.now();

        let booking = NewBooking {
            item_id: 4,
            start: now + Duration::days(1) + Duration::milliseconds(200),
            end: now + Duration::days(1) + Duration::milliseconds(700),
        };
        context.driver().create_booking(8, booking).await.unwrap();

        let request = context.upstream.expect_one_request().await;
        let exp_body = json!({
            "itemId": 4,
            "start": "2024-06-16T12:00:00.2",
            "end": "2024-06-16T12:00:00.7",
        });
        assert_eq!(Some(exp_body), request.body);
    }

    #[tokio::test]
    async fn test_create_booking_start_in_past() {
        let context = TestContext::setup();
        let now = context.now();

        let booking = NewBooking {
            item_id: 4,
            start: now - Duration::seconds(1),
            end: now + Duration::hours(2),
        };
        match context.driver().create_booking(8, booking).await {
            Err(DriverError::InvalidInput(e)) => assert!(e.contains("start cannot be in the past")),
            e => panic!("{:?}", e),
        }
        context.upstream.expect_no_requests().await;
    }

    #[tokio::test]
    async fn test_create_booking_end_not_in_future() {
        let context = TestContext::setup();
        let now = context.now();

        for end in [now - Duration::hours(1), now] {
            let booking = NewBooking { item_id: 4, start: now, end };
            match context.driver().create_booking(8, booking).await {
                Err(DriverError::InvalidInput(e)) => {
                    assert!(e.contains("end must be in the future"))
                }
                e => panic!("{:?}", e),
            }
        }
        context.upstream.expect_no_requests().await;
    }

    #[tokio::test]
    async fn test_create_booking_leaves_range_order_to_server() {
        let context = TestContext::setup();
        let now = context.now();

        let booking = NewBooking {
            item_id: 4,
            start: now + Duration::days(2),
            end: now + Duration::days(1),
        };
        context.driver().create_booking(8, booking).await.unwrap();
        context.upstream.expect_one_request().await;
    }
}
