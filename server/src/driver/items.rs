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

//! Operations on items.

use crate::db;
use crate::driver::{not_found, Driver};
use crate::model::*;
use log::info;
use shareit_core::clocks::Clock;
use shareit_core::db::Executor;
use shareit_core::driver::{DriverError, DriverResult};
use shareit_core::model::{Description, Name};
use time::OffsetDateTime;

/// Finds the last and next bookings among `bookings` as of `now`.
///
/// The last booking is the one with the latest start before `now`, regardless of its status.  The
/// next booking is the one with the earliest start after `now` that has not been rejected.
fn find_last_and_next(
    bookings: &[Booking],
    now: OffsetDateTime,
) -> (Option<BookingRef>, Option<BookingRef>) {
    let last = bookings.iter().filter(|b| *b.start() < now).max_by_key(|b| (*b.start(), *b.id()));
    let next = bookings
        .iter()
        .filter(|b| *b.start() > now && *b.status() != BookingStatus::Rejected)
        .min_by_key(|b| (*b.start(), *b.id()));
    let to_ref = |b: &Booking| BookingRef::new(*b.id(), *b.booker().id());
    (last.map(to_ref), next.map(to_ref))
}

/// Gathers the details of `item` to show to `caller`.  Booking information is only included
/// when the caller owns the item.
async fn describe_item(
    ex: &mut Executor,
    caller: UserId,
    item: Item,
    now: OffsetDateTime,
) -> DriverResult<ItemDetails> {
    let (last, next) = if *item.owner() == caller {
        let bookings = db::get_bookings_by_item(ex, *item.id()).await?;
        find_last_and_next(&bookings, now)
    } else {
        (None, None)
    };
    let comments = db::get_comments_by_item(ex, *item.id()).await?;
    Ok(ItemDetails::new(item, last, next, comments))
}

impl Driver {
    /// Creates a new item owned by `owner`, optionally in answer to `request`.
    pub(crate) async fn create_item(
        self,
        owner: UserId,
        name: Name,
        description: Description,
        available: bool,
        request: Option<RequestId>,
    ) -> DriverResult<Item> {
        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), owner).await.map_err(not_found("User", owner))?;
        if let Some(request) = request {
            db::get_request(tx.ex(), request).await.map_err(not_found("Request", request))?;
        }
        let item = db::create_item(tx.ex(), owner, name, description, available, request).await?;
        tx.commit().await?;
        info!("User {} created item {}", owner, item.id());
        Ok(item)
    }

    /// Modifies the item `id` owned by `caller` with the fields set in `patch`.
    pub(crate) async fn update_item(
        self,
        caller: UserId,
        id: ItemId,
        patch: ItemPatch,
    ) -> DriverResult<Item> {
        let mut tx = self.db.begin().await?;
        let item = db::get_item(tx.ex(), id).await.map_err(not_found("Item", id))?;
        db::get_user(tx.ex(), caller).await.map_err(not_found("User", caller))?;
        if *item.owner() != caller {
            return Err(DriverError::Unauthorized(format!(
                "User {} is not the owner of item {}",
                caller, id
            )));
        }
        let item = item.apply(patch);
        db::update_item(tx.ex(), &item).await.map_err(not_found("Item", id))?;
        tx.commit().await?;
        info!("User {} updated item {}", caller, id);
        Ok(item)
    }

    /// Gets the details of item `id` as seen by `caller`.
    pub(crate) async fn get_item(self, caller: UserId, id: ItemId) -> DriverResult<ItemDetails> {
        let now = self.clock.now_utc();
        let mut tx = self.db.begin().await?;
        let item = db::get_item(tx.ex(), id).await.map_err(not_found("Item", id))?;
        let details = describe_item(tx.ex(), caller, item, now).await?;
        tx.commit().await?;
        Ok(details)
    }

    /// Gets the details of all items owned by `owner`.
    pub(crate) async fn get_items(self, owner: UserId) -> DriverResult<Vec<ItemDetails>> {
        let now = self.clock.now_utc();
        let mut tx = self.db.begin().await?;
        let items = db::get_items_by_owner(tx.ex(), owner).await?;
        let mut details = Vec::with_capacity(items.len());
        for item in items {
            details.push(describe_item(tx.ex(), owner, item, now).await?);
        }
        tx.commit().await?;
        Ok(details)
    }

    /// Finds available items whose name or description contain `text`, ignoring case.
    ///
    /// Blank queries match nothing.
    pub(crate) async fn search_items(self, text: &str) -> DriverResult<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(vec![]);
        }
        let mut tx = self.db.begin().await?;
        let items = db::search_items(tx.ex(), text).await?;
        tx.commit().await?;
        Ok(items)
    }
}
