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

//! High-level data types.

mod booking;
pub(crate) use booking::{Booking, BookingState, BookingStatus};
mod comment;
pub(crate) use comment::Comment;
mod ids;
pub(crate) use ids::{BookingId, CommentId, ItemId, RequestId, UserId};
mod item;
pub(crate) use item::{BookingRef, Item, ItemDetails, ItemPatch};
mod request;
pub(crate) use request::ItemRequest;
mod user;
pub(crate) use user::{User, UserPatch};
