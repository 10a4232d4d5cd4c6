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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use shareit_core::clocks::testutils::SettableClock;
use shareit_core::db::sqlite::testutils::setup;
use shareit_core::db::{Db, Executor};
use shareit_core::model::{Description, EmailAddress, Name};
use std::sync::Arc;
use time::macros::datetime;
use time::OffsetDateTime;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver.
    db: Arc<dyn Db + Send + Sync>,

    /// The clock used by the driver.
    clock: Arc<SettableClock>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes a driver backed by an in-memory database and a fake clock.
    pub(crate) async fn setup() -> Self {
        let db = Arc::new(setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let clock = Arc::new(SettableClock::new(datetime!(2024-06-15 12:00:00 UTC)));
        let driver = Driver::new(db.clone(), clock.clone());
        Self { db, clock, driver }
    }

    /// Obtains a direct executor against the test database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Gets a copy of the driver under test.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Gets the fake clock used by the driver.
    pub(crate) fn clock(&self) -> &SettableClock {
        &self.clock
    }

    /// Returns the current time as seen by the driver.
    pub(crate) fn now(&self) -> OffsetDateTime {
        use shareit_core::clocks::Clock;
        self.clock.now_utc()
    }

    /// Creates a user called `name` with an email address derived from it.
    pub(crate) async fn create_user(&self, name: &str) -> User {
        db::create_user(
            &mut self.ex().await,
            Name::new(name).unwrap(),
            EmailAddress::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
        )
        .await
        .unwrap()
    }

    /// Creates an item called `name` owned by `owner`.
    pub(crate) async fn create_item(&self, owner: &User, name: &str, available: bool) -> Item {
        db::create_item(
            &mut self.ex().await,
            *owner.id(),
            Name::new(name).unwrap(),
            Description::new(format!("A {} for rent", name.to_lowercase())).unwrap(),
            available,
            None,
        )
        .await
        .unwrap()
    }

    /// Creates a booking of `item` by `booker` spanning `[start, end]` with `status`.
    pub(crate) async fn create_booking(
        &self,
        item: &Item,
        booker: &User,
        start: OffsetDateTime,
        end: OffsetDateTime,
        status: BookingStatus,
    ) -> Booking {
        let mut ex = self.ex().await;
        let id = db::create_booking(&mut ex, *item.id(), *booker.id(), start, end, status)
            .await
            .unwrap();
        db::get_booking(&mut ex, id).await.unwrap()
    }

    /// Creates a request for `description` by `requestor` posted at `created`.
    pub(crate) async fn create_request(
        &self,
        requestor: &User,
        description: &str,
        created: OffsetDateTime,
    ) -> ItemRequest {
        db::create_request(
            &mut self.ex().await,
            *requestor.id(),
            Description::new(description).unwrap(),
            created,
        )
        .await
        .unwrap()
    }
}
