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

//! The `Item` data type and its enriched views.

use crate::model::{BookingId, Comment, ItemId, RequestId, UserId};
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use shareit_core::model::{Description, Name};

/// An object that its owner offers for rent.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct Item {
    /// Unique identifier of the item.
    id: ItemId,

    /// Short name of the item.
    name: Name,

    /// Free-form description of the item.
    description: Description,

    /// Whether the item can currently be booked.
    available: bool,

    /// User that owns the item.
    owner: UserId,

    /// Request that this item was created to fulfill, if any.
    request: Option<RequestId>,
}

impl Item {
    /// Returns a copy of this item with the fields set in `patch` replaced.
    pub(crate) fn apply(self, patch: ItemPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            description: patch.description.unwrap_or(self.description),
            available: patch.available.unwrap_or(self.available),
            owner: self.owner,
            request: self.request,
        }
    }
}

/// Partial modification of an item.  Fields that are `None` are left untouched.
#[derive(Debug, Default)]
pub(crate) struct ItemPatch {
    /// New name for the item.
    pub(crate) name: Option<Name>,

    /// New description for the item.
    pub(crate) description: Option<Description>,

    /// New availability for the item.
    pub(crate) available: Option<bool>,
}

/// Short reference to a booking as shown in item views.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct BookingRef {
    /// Identifier of the booking.
    id: BookingId,

    /// User that made the booking.
    booker: UserId,
}

/// An item along with the booking and comment information shown to clients.
#[derive(Constructor, Debug, Dissolve, Getters, PartialEq)]
pub(crate) struct ItemDetails {
    /// The item itself.
    item: Item,

    /// Most recent booking that started before now.  Only known to the owner.
    last_booking: Option<BookingRef>,

    /// Closest non-rejected booking that starts after now.  Only known to the owner.
    next_booking: Option<BookingRef>,

    /// Comments on the item, newest first.
    comments: Vec<Comment>,
}
