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

//! Validation of item request operations.

use crate::driver::Driver;
use crate::model::PageQuery;
use crate::upstream::{UpstreamRequest, UpstreamResponse};
use http::Method;
use shareit_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Gets a page of the requests posted by users other than `caller`.
    pub(crate) async fn get_other_requests(
        self,
        caller: i32,
        page: PageQuery,
    ) -> DriverResult<UpstreamResponse> {
        if page.from < 0 {
            return Err(DriverError::InvalidInput("Page index cannot be negative".to_owned()));
        }
        if page.size < 1 {
            return Err(DriverError::InvalidInput("Page size must be positive".to_owned()));
        }

        let request = UpstreamRequest::new(Method::GET, "/requests/all")
            .with_caller(caller)
            .with_query(&page)?;
        self.forward(request).await
    }
}
