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

//! Business logic of the gateway: last-mile validation before forwarding calls to the server.

use crate::upstream::{Upstream, UpstreamRequest, UpstreamResponse};
use shareit_core::clocks::Clock;
use shareit_core::driver::DriverResult;
use std::sync::Arc;

mod bookings;
mod requests;
#[cfg(test)]
pub(crate) mod testutils;

/// Business logic.
#[derive(Clone)]
pub(crate) struct Driver {
    /// Transport to reach the server.
    upstream: Arc<dyn Upstream + Send + Sync>,

    /// Clock used to validate booking ranges.
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(
        upstream: Arc<dyn Upstream + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self { upstream, clock }
    }

    /// Forwards an already-validated `request` to the server.
    pub(crate) async fn forward(self, request: UpstreamRequest) -> DriverResult<UpstreamResponse> {
        self.upstream.forward(request).await
    }
}
