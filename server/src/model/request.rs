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

//! The `ItemRequest` data type.

use crate::model::{Item, RequestId, UserId};
use derive_getters::Getters;
use derive_more::Constructor;
use shareit_core::model::Description;
use time::OffsetDateTime;

/// A user's solicitation for an item that nobody offers yet.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct ItemRequest {
    /// Unique identifier of the request.
    id: RequestId,

    /// What the requestor is looking for.
    description: Description,

    /// User that posted the request.
    requestor: UserId,

    /// When the request was posted.
    created: OffsetDateTime,

    /// Items that other users created in answer to this request.
    items: Vec<Item>,
}

impl ItemRequest {
    /// Replaces the items attached to this request.
    pub(crate) fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}
