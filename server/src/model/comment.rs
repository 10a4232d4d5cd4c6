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

//! The `Comment` data type.

use crate::model::{CommentId, ItemId, User};
use derive_getters::Getters;
use derive_more::Constructor;
use shareit_core::model::CommentText;
use time::OffsetDateTime;

/// Feedback left on an item by a user who rented it.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct Comment {
    /// Unique identifier of the comment.
    id: CommentId,

    /// Content of the comment.
    text: CommentText,

    /// Item the comment refers to.
    item: ItemId,

    /// User that wrote the comment.
    author: User,

    /// When the comment was posted.
    created: OffsetDateTime,
}
