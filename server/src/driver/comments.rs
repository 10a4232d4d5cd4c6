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

//! Operations on comments.

use crate::db;
use crate::driver::{not_found, Driver};
use crate::model::*;
use log::info;
use shareit_core::clocks::Clock;
use shareit_core::driver::{DriverError, DriverResult};
use shareit_core::model::CommentText;

impl Driver {
    /// Posts a comment with `text` on `item` on behalf of `author`.
    ///
    /// The author must have rented the item before: that is, they must have a booking of the item
    /// that has already ended and that was not rejected.
    pub(crate) async fn add_comment(
        self,
        author: UserId,
        item: ItemId,
        text: CommentText,
    ) -> DriverResult<Comment> {
        let now = self.clock.now_utc();
        let mut tx = self.db.begin().await?;
        let item = db::get_item(tx.ex(), item).await.map_err(not_found("Item", item))?;
        let author = db::get_user(tx.ex(), author).await.map_err(not_found("User", author))?;

        let bookings = db::get_bookings_by_booker(tx.ex(), *author.id()).await?;
        let rented = bookings.iter().any(|b| {
            b.item().id() == item.id() && *b.end() < now && *b.status() != BookingStatus::Rejected
        });
        if !rented {
            return Err(DriverError::InvalidInput(format!(
                "User {} has not rented item {}",
                author.id(),
                item.id()
            )));
        }

        let id = db::create_comment(tx.ex(), *item.id(), *author.id(), &text, now).await?;
        tx.commit().await?;
        info!("User {} commented on item {}", author.id(), item.id());
        Ok(Comment::new(id, text, *item.id(), author, now))
    }
}
