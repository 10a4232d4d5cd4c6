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

//! The `Booking` data type and the states used to filter bookings.

use crate::model::{BookingId, Item, User};
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use shareit_core::model::{ModelError, ModelResult};
use time::OffsetDateTime;

/// Approval status of a booking.
///
/// Bookings are created as `Waiting` and can move to `Approved` or `Rejected` exactly once.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum BookingStatus {
    /// The owner has accepted the booking.
    Approved,

    /// The owner has declined the booking.
    Rejected,

    /// The owner has not acted on the booking yet.
    Waiting,
}

impl BookingStatus {
    /// Returns the textual representation of the status as stored in the database.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Waiting => "WAITING",
        }
    }

    /// Parses a status as stored in the database.
    pub(crate) fn parse(s: &str) -> ModelResult<Self> {
        match s {
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            "WAITING" => Ok(BookingStatus::Waiting),
            _ => Err(ModelError(format!("Unknown booking status '{}'", s))),
        }
    }
}

/// A reservation of an item by a user other than its owner.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct Booking {
    /// Unique identifier of the booking.
    id: BookingId,

    /// When the reservation begins.
    start: OffsetDateTime,

    /// When the reservation ends.
    end: OffsetDateTime,

    /// The reserved item.
    item: Item,

    /// The user that made the reservation.
    booker: User,

    /// Approval status of the reservation.
    status: BookingStatus,
}

/// Subset of bookings to return from listing operations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum BookingState {
    /// All bookings.
    #[default]
    All,

    /// Bookings in progress.
    Current,

    /// Bookings that have finished.
    Past,

    /// Bookings that have not started yet.
    Future,

    /// Bookings pending approval.
    Waiting,

    /// Bookings declined by the owner.
    Rejected,
}

impl BookingState {
    /// Parses a state filter as provided by clients.  Matching is case-sensitive.
    pub(crate) fn parse(s: &str) -> ModelResult<Self> {
        match s {
            "ALL" => Ok(BookingState::All),
            "CURRENT" => Ok(BookingState::Current),
            "PAST" => Ok(BookingState::Past),
            "FUTURE" => Ok(BookingState::Future),
            "WAITING" => Ok(BookingState::Waiting),
            "REJECTED" => Ok(BookingState::Rejected),
            _ => Err(ModelError(format!("Unknown state: {}", s))),
        }
    }

    /// Checks whether `booking` belongs to this state at time `now`.
    pub(crate) fn includes(self, booking: &Booking, now: OffsetDateTime) -> bool {
        match self {
            BookingState::All => true,
            BookingState::Current => booking.start < now && now < booking.end,
            BookingState::Past => booking.end < now,
            BookingState::Future => booking.start > now,
            BookingState::Waiting => booking.status == BookingStatus::Waiting,
            BookingState::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, UserId};
    use shareit_core::model::{Description, EmailAddress, Name};
    use time::macros::datetime;

    fn booking(start: OffsetDateTime, end: OffsetDateTime, status: BookingStatus) -> Booking {
        let item = Item::new(
            ItemId::new(1),
            Name::from("Ladder"),
            Description::from("Three meters"),
            true,
            UserId::new(1),
            None,
        );
        let booker = User::new(UserId::new(2), Name::from("Bob"), EmailAddress::from("b@example.com"));
        Booking::new(BookingId::new(1), start, end, item, booker, status)
    }

    #[test]
    fn test_booking_status_round_trip() {
        for status in [BookingStatus::Approved, BookingStatus::Rejected, BookingStatus::Waiting] {
            assert_eq!(status, BookingStatus::parse(status.as_str()).unwrap());
        }
        BookingStatus::parse("waiting").unwrap_err();
    }

    #[test]
    fn test_booking_status_json() {
        assert_eq!("\"APPROVED\"", serde_json::to_string(&BookingStatus::Approved).unwrap());
    }

    #[test]
    fn test_booking_state_parse() {
        assert_eq!(BookingState::Current, BookingState::parse("CURRENT").unwrap());
        assert_eq!(
            ModelError("Unknown state: UNSUPPORTED_STATUS".to_owned()),
            BookingState::parse("UNSUPPORTED_STATUS").unwrap_err()
        );
        assert_eq!(
            ModelError("Unknown state: all".to_owned()),
            BookingState::parse("all").unwrap_err()
        );
    }

    #[test]
    fn test_booking_state_includes() {
        let now = datetime!(2024-05-10 12:00:00 UTC);
        let past = booking(
            datetime!(2024-05-01 10:00:00 UTC),
            datetime!(2024-05-02 10:00:00 UTC),
            BookingStatus::Approved,
        );
        let current = booking(
            datetime!(2024-05-10 10:00:00 UTC),
            datetime!(2024-05-11 10:00:00 UTC),
            BookingStatus::Waiting,
        );
        let future = booking(
            datetime!(2024-06-01 10:00:00 UTC),
            datetime!(2024-06-02 10:00:00 UTC),
            BookingStatus::Rejected,
        );

        let check = |state: BookingState| {
            [&past, &current, &future].iter().map(|b| state.includes(b, now)).collect::<Vec<_>>()
        };
        assert_eq!(vec![true, true, true], check(BookingState::All));
        assert_eq!(vec![false, true, false], check(BookingState::Current));
        assert_eq!(vec![true, false, false], check(BookingState::Past));
        assert_eq!(vec![false, false, true], check(BookingState::Future));
        assert_eq!(vec![false, true, false], check(BookingState::Waiting));
        assert_eq!(vec![false, false, true], check(BookingState::Rejected));
    }
}
