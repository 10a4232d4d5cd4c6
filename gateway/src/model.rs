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

//! Payloads accepted by the gateway.
//!
//! Every payload is validated while being deserialized, so a value of any of these types is
//! known to be acceptable to the server.  The types serialize back into the same wire format to
//! be forwarded.

use serde::{Deserialize, Serialize};
use shareit_core::model::{datetime, CommentText, Description, EmailAddress, Name};
use time::OffsetDateTime;

/// Payload to register a user.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct NewUser {
    /// Display name of the user.
    pub(crate) name: Name,

    /// Contact address of the user.
    pub(crate) email: EmailAddress,
}

/// Payload to update a user.  Absent fields are left untouched by the server.
#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) struct UserUpdate {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<Name>,

    /// New contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<EmailAddress>,
}

/// Payload to create an item.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewItem {
    /// Display name of the item.
    pub(crate) name: Name,

    /// Free-form description of the item.
    pub(crate) description: Description,

    /// Whether the item can be booked right away.
    pub(crate) available: bool,

    /// Request that the item answers, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: Option<i32>,
}

/// Payload to update an item.  Absent fields are left untouched by the server.
#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) struct ItemUpdate {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<Name>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<Description>,

    /// New availability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) available: Option<bool>,
}

/// Payload to comment on an item.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct NewComment {
    /// Content of the comment.
    pub(crate) text: CommentText,
}

/// Payload to post an item request.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct NewRequest {
    /// Description of the wanted item.
    pub(crate) description: Description,
}

/// Payload to book an item.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewBooking {
    /// Item to book.
    pub(crate) item_id: i32,

    /// When the booking begins.
    #[serde(with = "datetime")]
    pub(crate) start: OffsetDateTime,

    /// When the booking ends.
    #[serde(with = "datetime")]
    pub(crate) end: OffsetDateTime,
}

/// Query to filter bookings by state.
#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) struct StateQuery {
    /// Name of the state filter.  The server defaults to all bookings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) state: Option<String>,
}

/// Query to approve or reject a booking.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct ApprovalQuery {
    /// Whether the owner approves the booking.
    pub(crate) approved: bool,
}

/// Query to page through item requests.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct PageQuery {
    /// Zero-based index of the page.
    pub(crate) from: i64,

    /// Number of entries per page.
    pub(crate) size: i64,
}

/// Query to search items.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct SearchQuery {
    /// Text to look for.
    pub(crate) text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn test_new_user_validates_fields() {
        let user: NewUser =
            serde_json::from_value(json!({"name": "Alice", "email": "alice@example.com"}))
                .unwrap();
        assert_eq!(Name::from("Alice"), user.name);

        for (raw, exp_error) in [
            (json!({"name": " ", "email": "alice@example.com"}), "Name cannot be blank"),
            (json!({"name": "Alice", "email": "alice"}), "valid address"),
            (json!({"name": "Alice"}), "missing field `email`"),
        ] {
            let err = serde_json::from_value::<NewUser>(raw).unwrap_err();
            assert!(err.to_string().contains(exp_error), "Unexpected error: {}", err);
        }
    }

    #[test]
    fn test_updates_skip_absent_fields() {
        let update: UserUpdate = serde_json::from_value(json!({"name": "Bob"})).unwrap();
        assert_eq!(json!({"name": "Bob"}), serde_json::to_value(update).unwrap());

        let update: ItemUpdate = serde_json::from_value(json!({"available": false})).unwrap();
        assert_eq!(json!({"available": false}), serde_json::to_value(update).unwrap());

        let err = serde_json::from_value::<ItemUpdate>(json!({"description": ""})).unwrap_err();
        assert!(err.to_string().contains("Description cannot be blank"));
    }

    #[test]
    fn test_new_item_requires_available() {
        let err =
            serde_json::from_value::<NewItem>(json!({"name": "Drill", "description": "Drill"}))
                .unwrap_err();
        assert!(err.to_string().contains("missing field `available`"));

        let err = serde_json::from_value::<NewItem>(
            json!({"name": "Drill", "description": "Drill", "available": null}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid type: null"));
    }

    #[test]
    fn test_new_booking_wire_format() {
        let booking: NewBooking = serde_json::from_value(json!({
            "itemId": 3,
            "start": "2024-07-01T10:00:00.250",
            "end": "2024-07-02T10:00:00",
        }))
        .unwrap();
        assert_eq!(datetime!(2024-07-01 10:00:00.250 UTC), booking.start);
        assert_eq!(
            json!({"itemId": 3, "start": "2024-07-01T10:00:00", "end": "2024-07-02T10:00:00"}),
            serde_json::to_value(booking).unwrap()
        );

        let err = serde_json::from_value::<NewBooking>(
            json!({"itemId": 3, "end": "2024-07-02T10:00:00"}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `start`"));
    }
}
