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

//! Operations on item requests.

use crate::db::{self, Page};
use crate::driver::{not_found, Driver};
use crate::model::*;
use log::info;
use shareit_core::clocks::Clock;
use shareit_core::db::Executor;
use shareit_core::driver::{DriverError, DriverResult};
use shareit_core::model::Description;

/// Attaches to each of the `requests` the items created in answer to it.
async fn with_items(
    ex: &mut Executor,
    requests: Vec<ItemRequest>,
) -> DriverResult<Vec<ItemRequest>> {
    let mut result = Vec::with_capacity(requests.len());
    for request in requests {
        let items = db::get_items_by_request(ex, *request.id()).await?;
        result.push(request.with_items(items));
    }
    Ok(result)
}

impl Driver {
    /// Posts a new request for an item described by `description` on behalf of `requestor`.
    pub(crate) async fn create_request(
        self,
        requestor: UserId,
        description: Description,
    ) -> DriverResult<ItemRequest> {
        let now = self.clock.now_utc();
        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), requestor).await.map_err(not_found("User", requestor))?;
        let request = db::create_request(tx.ex(), requestor, description, now).await?;
        tx.commit().await?;
        info!("User {} posted request {}", requestor, request.id());
        Ok(request)
    }

    /// Gets the requests posted by `requestor`, newest first.
    pub(crate) async fn get_own_requests(self, requestor: UserId) -> DriverResult<Vec<ItemRequest>> {
        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), requestor).await.map_err(not_found("User", requestor))?;
        let requests = db::get_requests_by_requestor(tx.ex(), requestor).await?;
        let requests = with_items(tx.ex(), requests).await?;
        tx.commit().await?;
        Ok(requests)
    }

    /// Gets page number `from` of size `size` of the requests posted by users other than
    /// `caller`, newest first.
    pub(crate) async fn get_other_requests(
        self,
        caller: UserId,
        from: i64,
        size: i64,
    ) -> DriverResult<Vec<ItemRequest>> {
        if from < 0 {
            return Err(DriverError::InvalidInput("Page index cannot be negative".to_owned()));
        }
        if size < 1 {
            return Err(DriverError::InvalidInput("Page size must be positive".to_owned()));
        }
        let offset = from.checked_mul(size).ok_or_else(|| {
            DriverError::InvalidInput(format!("Page {} of size {} is out of range", from, size))
        })?;

        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), caller).await.map_err(not_found("User", caller))?;
        let requests =
            db::get_requests_by_others(tx.ex(), caller, Page { limit: size, offset }).await?;
        let requests = with_items(tx.ex(), requests).await?;
        tx.commit().await?;
        Ok(requests)
    }

    /// Gets request `id` on behalf of `caller`.
    pub(crate) async fn get_request(self, caller: UserId, id: RequestId) -> DriverResult<ItemRequest> {
        let mut tx = self.db.begin().await?;
        db::get_user(tx.ex(), caller).await.map_err(not_found("User", caller))?;
        let request = db::get_request(tx.ex(), id).await.map_err(not_found("Request", id))?;
        let items = db::get_items_by_request(tx.ex(), id).await?;
        tx.commit().await?;
        Ok(request.with_items(items))
    }
}
