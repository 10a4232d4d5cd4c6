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

//! Test utilities for the REST API.

use crate::driver::testutils::TestContext as DriverTestContext;
use crate::rest::app;
use axum::Router;
use std::ops::Deref;

/// State of a running test.  Gives access to the same helpers as the driver tests so that
/// fixtures can be prepared directly in the database.
pub(crate) struct TestContext {
    /// Context of the driver that backs the app.
    context: DriverTestContext,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app backed by an in-memory database and a fake clock.
    pub(crate) async fn setup() -> Self {
        let context = DriverTestContext::setup().await;
        let app = app(context.driver());
        Self { context, app }
    }

    /// Gets a copy of the app under test.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app under test.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }
}

impl Deref for TestContext {
    type Target = DriverTestContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}
