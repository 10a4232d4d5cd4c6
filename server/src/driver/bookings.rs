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

//! Operations on bookings.

use crate::db;
use crate::driver::{not_found, Driver};
use crate::model::*;
use log::info;
use shareit_core::clocks::Clock;
use shareit_core::driver::{DriverError, DriverResult};
use time::OffsetDateTime;

impl Driver {
    /// Books `item` on behalf of `booker` for the `[start, end]` range.
    ///
    /// The range is optional at this level so that missing values are reported with the same
    /// error category as other invalid ranges.
    pub(crate) async fn create_booking(
        self,
        booker: UserId,
        item: ItemId,
        start: Option<OffsetDateTime>,
        end: Option<OffsetDateTime>,
    ) -> DriverResult<Booking> {
        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), booker).await.map_err(not_found("User", booker))?;
        let item = db::get_item(tx.ex(), item).await.map_err(not_found("Item", item))?;
        if !item.available() {
            return Err(DriverError::InvalidInput(format!(
                "Item {} is not available for booking",
                item.id()
            )));
        }
        if *item.owner() == booker {
            return Err(DriverError::NotFound(format!(
                "User {} cannot book their own item {}",
                booker,
                item.id()
            )));
        }

        let start = start.ok_or_else(|| {
            DriverError::InvalidInput("Booking start cannot be null".to_owned())
        })?;
        let end =
            end.ok_or_else(|| DriverError::InvalidInput("Booking end cannot be null".to_owned()))?;
        if start == end {
            return Err(DriverError::InvalidInput("Booking start equals end".to_owned()));
        }
        if start > end {
            return Err(DriverError::InvalidInput("Booking start is after end".to_owned()));
        }

        let id =
            db::create_booking(tx.ex(), *item.id(), booker, start, end, BookingStatus::Waiting)
                .await?;
        let booking = db::get_booking(tx.ex(), id).await?;
        tx.commit().await?;
        info!("User {} booked item {} as booking {}", booker, item.id(), id);
        Ok(booking)
    }

    /// Gets booking `id` on behalf of `caller`, who must be its booker or the owner of its item.
    pub(crate) async fn get_booking(self, caller: UserId, id: BookingId) -> DriverResult<Booking> {
        let mut tx = self.db.begin().await?;
        let booking = db::get_booking(tx.ex(), id).await.map_err(not_found("Booking", id))?;
        db::get_user(tx.ex(), caller).await.map_err(not_found("User", caller))?;
        tx.commit().await?;

        if *booking.booker().id() != caller && *booking.item().owner() != caller {
            return Err(DriverError::Unauthorized(format!(
                "User {} is neither the booker nor the item owner of booking {}",
                caller, id
            )));
        }
        Ok(booking)
    }

    /// Approves or rejects booking `id` on behalf of `caller`, who must own the booked item.
    pub(crate) async fn decide_booking(
        self,
        caller: UserId,
        id: BookingId,
        approved: bool,
    ) -> DriverResult<Booking> {
        let mut tx = self.db.begin().await?;
        let booking = db::get_booking(tx.ex(), id).await.map_err(not_found("Booking", id))?;
        if *booking.item().owner() != caller {
            return Err(DriverError::Unauthorized(format!(
                "User {} is not the owner of the item in booking {}",
                caller, id
            )));
        }
        if *booking.status() != BookingStatus::Waiting {
            return Err(DriverError::InvalidInput(format!(
                "Status of booking {} has already been changed",
                id
            )));
        }

        let status = if approved { BookingStatus::Approved } else { BookingStatus::Rejected };
        db::update_booking_status(tx.ex(), id, status).await?;
        let booking = db::get_booking(tx.ex(), id).await?;
        tx.commit().await?;
        info!("User {} set booking {} to {}", caller, id, status.as_str());
        Ok(booking)
    }

    /// Gets the bookings made by `booker` that match the `state` filter.
    pub(crate) async fn get_bookings_by_booker(
        self,
        booker: UserId,
        state: &str,
    ) -> DriverResult<Vec<Booking>> {
        let now = self.clock.now_utc();
        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), booker).await.map_err(not_found("User", booker))?;
        let state = BookingState::parse(state)?;
        let bookings = db::get_bookings_by_booker(tx.ex(), booker).await?;
        tx.commit().await?;
        Ok(bookings.into_iter().filter(|b| state.includes(b, now)).collect())
    }

    /// Gets the bookings of the items owned by `owner` that match the `state` filter.
    pub(crate) async fn get_bookings_by_owner(
        self,
        owner: UserId,
        state: &str,
    ) -> DriverResult<Vec<Booking>> {
        let now = self.clock.now_utc();
        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), owner).await.map_err(not_found("User", owner))?;
        let state = BookingState::parse(state)?;
        let bookings = db::get_bookings_by_owner(tx.ex(), owner).await?;
        tx.commit().await?;
        Ok(bookings.into_iter().filter(|b| state.includes(b, now)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use time::Duration;

    #[tokio::test]
    async fn test_create_booking_ok() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let item = context.create_item(&alice, "Drill", true).await;

        let start = context.now() + Duration::days(1);
        let end = context.now() + Duration::days(2);
        let booking = context
            .driver()
            .create_booking(*bob.id(), *item.id(), Some(start), Some(end))
            .await
            .unwrap();

        assert_eq!(
            Booking::new(*booking.id(), start, end, item, bob, BookingStatus::Waiting),
            booking
        );
        assert_eq!(booking, db::get_booking(&mut context.ex().await, *booking.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_booking_missing_entities() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let item = context.create_item(&alice, "Drill", true).await;
        let start = Some(context.now() + Duration::days(1));
        let end = Some(context.now() + Duration::days(2));

        assert_eq!(
            DriverError::NotFound("User with id 50 not found".to_owned()),
            context.driver().create_booking(UserId::new(50), *item.id(), start, end).await.unwrap_err()
        );
        assert_eq!(
            DriverError::NotFound("Item with id 60 not found".to_owned()),
            context.driver().create_booking(*alice.id(), ItemId::new(60), start, end).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_create_booking_item_not_available() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let item = context.create_item(&alice, "Drill", false).await;

        let err = context
            .driver()
            .create_booking(
                *bob.id(),
                *item.id(),
                Some(context.now() + Duration::days(1)),
                Some(context.now() + Duration::days(2)),
            )
            .await
            .unwrap_err();
        assert_eq!(
            DriverError::InvalidInput(format!("Item {} is not available for booking", item.id())),
            err
        );
    }

    #[tokio::test]
    async fn test_create_booking_own_item() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let item = context.create_item(&alice, "Drill", true).await;

        match context
            .driver()
            .create_booking(
                *alice.id(),
                *item.id(),
                Some(context.now() + Duration::days(1)),
                Some(context.now() + Duration::days(2)),
            )
            .await
        {
            Err(DriverError::NotFound(msg)) => assert!(msg.contains("own item")),
            e => panic!("{:?}", e),
        }
    }

    #[tokio::test]
    async fn test_create_booking_invalid_ranges() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let item = context.create_item(&alice, "Drill", true).await;
        let t = context.now() + Duration::days(1);

        let cases = [
            (None, Some(t), "Booking start cannot be null"),
            (Some(t), None, "Booking end cannot be null"),
            (Some(t), Some(t), "Booking start equals end"),
            (Some(t + Duration::hours(1)), Some(t), "Booking start is after end"),
        ];
        for (start, end, exp_message) in cases {
            assert_eq!(
                DriverError::InvalidInput(exp_message.to_owned()),
                context.driver().create_booking(*bob.id(), *item.id(), start, end).await.unwrap_err()
            );
        }
        assert!(db::get_bookings_by_item(&mut context.ex().await, *item.id())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_booking_access() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let carol = context.create_user("Carol").await;
        let item = context.create_item(&alice, "Drill", true).await;
        let booking = context
            .create_booking(
                &item,
                &bob,
                context.now() + Duration::days(1),
                context.now() + Duration::days(2),
                BookingStatus::Waiting,
            )
            .await;

        assert_eq!(booking, context.driver().get_booking(*alice.id(), *booking.id()).await.unwrap());
        assert_eq!(booking, context.driver().get_booking(*bob.id(), *booking.id()).await.unwrap());
        match context.driver().get_booking(*carol.id(), *booking.id()).await {
            Err(DriverError::Unauthorized(_)) => (),
            e => panic!("{:?}", e),
        }
        assert_eq!(
            DriverError::NotFound("User with id 99 not found".to_owned()),
            context.driver().get_booking(UserId::new(99), *booking.id()).await.unwrap_err()
        );
        assert_eq!(
            DriverError::NotFound("Booking with id 98 not found".to_owned()),
            context.driver().get_booking(*alice.id(), BookingId::new(98)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_decide_booking_once() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let item = context.create_item(&alice, "Drill", true).await;
        let booking = context
            .create_booking(
                &item,
                &bob,
                context.now() + Duration::days(1),
                context.now() + Duration::days(2),
                BookingStatus::Waiting,
            )
            .await;

        let approved =
            context.driver().decide_booking(*alice.id(), *booking.id(), true).await.unwrap();
        assert_eq!(BookingStatus::Approved, *approved.status());

        assert_eq!(
            DriverError::InvalidInput(format!(
                "Status of booking {} has already been changed",
                booking.id()
            )),
            context.driver().decide_booking(*alice.id(), *booking.id(), false).await.unwrap_err()
        );
        assert_eq!(
            BookingStatus::Approved,
            *db::get_booking(&mut context.ex().await, *booking.id()).await.unwrap().status()
        );
    }

    #[tokio::test]
    async fn test_decide_booking_reject_and_errors() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let item = context.create_item(&alice, "Drill", true).await;
        let booking = context
            .create_booking(
                &item,
                &bob,
                context.now() + Duration::days(1),
                context.now() + Duration::days(2),
                BookingStatus::Waiting,
            )
            .await;

        match context.driver().decide_booking(*bob.id(), *booking.id(), true).await {
            Err(DriverError::Unauthorized(_)) => (),
            e => panic!("{:?}", e),
        }
        assert_eq!(
            DriverError::NotFound("Booking with id 1234 not found".to_owned()),
            context.driver().decide_booking(*alice.id(), BookingId::new(1234), true).await.unwrap_err()
        );

        let rejected =
            context.driver().decide_booking(*alice.id(), *booking.id(), false).await.unwrap();
        assert_eq!(BookingStatus::Rejected, *rejected.status());
    }

    #[tokio::test]
    async fn test_get_bookings_by_state() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;
        let item = context.create_item(&alice, "Drill", true).await;
        let now = context.now();

        let past = context
            .create_booking(
                &item,
                &bob,
                now - Duration::days(3),
                now - Duration::days(2),
                BookingStatus::Approved,
            )
            .await;
        let current = context
            .create_booking(
                &item,
                &bob,
                now - Duration::hours(1),
                now + Duration::hours(1),
                BookingStatus::Approved,
            )
            .await;
        let future = context
            .create_booking(
                &item,
                &bob,
                now + Duration::days(2),
                now + Duration::days(3),
                BookingStatus::Waiting,
            )
            .await;
        let rejected = context
            .create_booking(
                &item,
                &bob,
                now + Duration::days(4),
                now + Duration::days(5),
                BookingStatus::Rejected,
            )
            .await;

        let ids = |bookings: Vec<Booking>| bookings.iter().map(|b| *b.id()).collect::<Vec<_>>();
        for (state, exp) in [
            ("ALL", vec![*rejected.id(), *future.id(), *current.id(), *past.id()]),
            ("CURRENT", vec![*current.id()]),
            ("PAST", vec![*past.id()]),
            ("FUTURE", vec![*rejected.id(), *future.id()]),
            ("WAITING", vec![*future.id()]),
            ("REJECTED", vec![*rejected.id()]),
        ] {
            assert_eq!(
                exp,
                ids(context.driver().get_bookings_by_booker(*bob.id(), state).await.unwrap()),
                "Booker listing for state {}",
                state
            );
            assert_eq!(
                exp,
                ids(context.driver().get_bookings_by_owner(*alice.id(), state).await.unwrap()),
                "Owner listing for state {}",
                state
            );
        }

        assert!(context.driver().get_bookings_by_booker(*alice.id(), "ALL").await.unwrap().is_empty());
        assert!(context.driver().get_bookings_by_owner(*bob.id(), "ALL").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_bookings_unknown_state() {
        let context = TestContext::setup().await;
        let alice = context.create_user("Alice").await;

        assert_eq!(
            DriverError::InvalidInput("Unknown state: UNSUPPORTED_STATUS".to_owned()),
            context
                .driver()
                .get_bookings_by_booker(*alice.id(), "UNSUPPORTED_STATUS")
                .await
                .unwrap_err()
        );
        assert_eq!(
            DriverError::InvalidInput("Unknown state: current".to_owned()),
            context.driver().get_bookings_by_owner(*alice.id(), "current").await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_get_bookings_unknown_user() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("User with id 8 not found".to_owned()),
            context.driver().get_bookings_by_booker(UserId::new(8), "BOGUS").await.unwrap_err()
        );
        assert_eq!(
            DriverError::NotFound("User with id 8 not found".to_owned()),
            context.driver().get_bookings_by_owner(UserId::new(8), "ALL").await.unwrap_err()
        );
    }
}
