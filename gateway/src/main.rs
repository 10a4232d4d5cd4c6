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

//! Entry point to the ShareIt gateway.

#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use shareit_core::env::get_optional_var;
use shareit_gateway::{serve, HttpUpstreamOptions};
use std::net::Ipv4Addr;

/// Port to listen on when `SHAREIT_GATEWAY_PORT` is not set.
const DEFAULT_PORT: u16 = 8080;

/// Gathers the configuration from the environment and runs the gateway.
async fn run() -> Result<(), String> {
    let port = get_optional_var::<u16>("SHAREIT_GATEWAY", "PORT")?.unwrap_or(DEFAULT_PORT);
    let addr = (Ipv4Addr::UNSPECIFIED, port);

    let upstream_opts = HttpUpstreamOptions::from_env("SHAREIT_GATEWAY")?;

    serve(addr, upstream_opts).await.map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
