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

/// State of a REST test.
pub(crate) struct TestContext {
    /// Driver-level test state.
    context: DriverTestContext,

    /// Router under test.
    app: Router,
}

impl TestContext {
    /// Creates the router backed by a recorder upstream and a fake clock.
    pub(crate) fn setup() -> Self {
        let context = DriverTestContext::setup();
        let app = app(context.driver());
        Self { context, app }
    }

    /// Returns a copy of the router.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the router.
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
