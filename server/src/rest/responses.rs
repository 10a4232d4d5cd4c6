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

//! Representations of the entities returned by the REST APIs.

use crate::model::*;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use shareit_core::model::datetime;
use shareit_core::model::{CommentText, Description, EmailAddress, Name};
use time::OffsetDateTime;

/// Public view of a user.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct UserResponse {
    /// Identifier of the entity.
    pub(crate) id: UserId,

    /// Display name.
    pub(crate) name: Name,

    /// Contact address.
    pub(crate) email: EmailAddress,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { id: *user.id(), name: user.name().clone(), email: user.email().clone() }
    }
}

/// Short view of a booking shown alongside an item.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingRefResponse {
    /// Identifier of the entity.
    pub(crate) id: BookingId,

    /// User that made the booking.
    pub(crate) booker_id: UserId,
}

impl From<BookingRef> for BookingRefResponse {
    fn from(booking: BookingRef) -> Self {
        Self { id: *booking.id(), booker_id: *booking.booker() }
    }
}

/// Public view of a comment.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentResponse {
    /// Identifier of the entity.
    pub(crate) id: CommentId,

    /// Content of the comment.
    pub(crate) text: CommentText,

    /// Name of the user that wrote the comment.
    pub(crate) author_name: Name,

    /// When the entity was created.
    #[serde(with = "datetime")]
    pub(crate) created: OffsetDateTime,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: *comment.id(),
            text: comment.text().clone(),
            author_name: comment.author().name().clone(),
            created: *comment.created(),
        }
    }
}

/// Public view of an item.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemResponse {
    /// Identifier of the entity.
    pub(crate) id: ItemId,

    /// Display name.
    pub(crate) name: Name,

    /// Free-form description.
    pub(crate) description: Description,

    /// Whether the item can be booked.
    pub(crate) available: bool,

    /// Request that the item answers, if any.
    pub(crate) request_id: Option<RequestId>,

    /// Most recent booking that already started.  Only shown to the owner.
    pub(crate) last_booking: Option<BookingRefResponse>,

    /// Closest upcoming booking.  Only shown to the owner.
    pub(crate) next_booking: Option<BookingRefResponse>,

    /// Comments on the item, newest first.
    pub(crate) comments: Vec<CommentResponse>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: *item.id(),
            name: item.name().clone(),
            description: item.description().clone(),
            available: *item.available(),
            request_id: *item.request(),
            last_booking: None,
            next_booking: None,
            comments: vec![],
        }
    }
}

impl From<ItemDetails> for ItemResponse {
    fn from(details: ItemDetails) -> Self {
        let (item, last_booking, next_booking, comments) = details.dissolve();
        Self {
            last_booking: last_booking.map(BookingRefResponse::from),
            next_booking: next_booking.map(BookingRefResponse::from),
            comments: comments.into_iter().map(CommentResponse::from).collect(),
            ..ItemResponse::from(item)
        }
    }
}

/// Public view of a booking.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct BookingResponse {
    /// Identifier of the entity.
    pub(crate) id: BookingId,

    /// When the booking begins.
    #[serde(with = "datetime")]
    pub(crate) start: OffsetDateTime,

    /// When the booking ends.
    #[serde(with = "datetime")]
    pub(crate) end: OffsetDateTime,

    /// Approval status of the booking.
    pub(crate) status: BookingStatus,

    /// User that made the booking.
    pub(crate) booker: UserResponse,

    /// The booked item.
    pub(crate) item: ItemResponse,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: *booking.id(),
            start: *booking.start(),
            end: *booking.end(),
            status: *booking.status(),
            booker: UserResponse::from(booking.booker().clone()),
            item: ItemResponse::from(booking.item().clone()),
        }
    }
}

/// Public view of an item request.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct RequestResponse {
    /// Identifier of the entity.
    pub(crate) id: RequestId,

    /// Free-form description.
    pub(crate) description: Description,

    /// When the entity was created.
    #[serde(with = "datetime")]
    pub(crate) created: OffsetDateTime,

    /// Items created in answer to the request.
    pub(crate) items: Vec<ItemResponse>,
}

impl From<ItemRequest> for RequestResponse {
    fn from(request: ItemRequest) -> Self {
        Self {
            id: *request.id(),
            description: request.description().clone(),
            created: *request.created(),
            items: request.items().iter().cloned().map(ItemResponse::from).collect(),
        }
    }
}
