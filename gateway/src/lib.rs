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

//! ShareIt gateway: validates the shape of incoming calls and forwards them to the server.

#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use log::info;
use shareit_core::clocks::SystemClock;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

pub(crate) mod driver;
use driver::Driver;
pub(crate) mod model;
mod rest;
use rest::app;
mod upstream;
pub use upstream::HttpUpstreamOptions;
use upstream::HttpUpstream;

/// Serves the REST API on `bind_addr`, forwarding calls to the server described by
/// `upstream_opts`, until the gateway fails.
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    upstream_opts: HttpUpstreamOptions,
) -> Result<(), Box<dyn Error>> {
    info!("Forwarding calls to {}", upstream_opts.server_url);
    let upstream = HttpUpstream::new(upstream_opts)?;
    let driver = Driver::new(Arc::new(upstream), Arc::new(SystemClock::default()));
    let app = app(driver);

    let bind_addr = bind_addr.into();
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Gateway listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
