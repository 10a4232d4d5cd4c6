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

//! Test utilities for the business logic.

use crate::driver::Driver;
use crate::upstream::testutils::RecorderUpstream;
use shareit_core::clocks::testutils::SettableClock;
use std::sync::Arc;
use time::macros::datetime;
use time::OffsetDateTime;

/// State of a driver test.
pub(crate) struct TestContext {
    /// Upstream that records the forwarded requests.
    pub(crate) upstream: RecorderUpstream,

    /// Clock seen by the driver.
    pub(crate) clock: Arc<SettableClock>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Creates a driver backed by a recorder and a fake clock.
    pub(crate) fn setup() -> Self {
        let _can_fail = env_logger::builder().is_test(true).try_init();

        let upstream = RecorderUpstream::default();
        let clock = Arc::from(SettableClock::new(datetime!(2024-06-15 12:00:00 UTC)));
        let driver = Driver::new(Arc::new(upstream.clone()), clock.clone());
        Self { upstream, clock, driver }
    }

    /// Returns a copy of the driver.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Returns the current time of the fake clock.
    pub(crate) fn now(&self) -> OffsetDateTime {
        use shareit_core::clocks::Clock;
        self.clock.now_utc()
    }
}
