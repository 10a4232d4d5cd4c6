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

//! Entry point to the ShareIt server.

#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use shareit_core::db::postgres::{PostgresDb, PostgresOptions};
use shareit_core::db::Db;
use shareit_core::env::get_optional_var;
use shareit_server::db::init_schema;
use shareit_server::serve;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Port to listen on when `SHAREIT_SERVER_PORT` is not set.
const DEFAULT_PORT: u16 = 9090;

/// Gathers the configuration from the environment and runs the server.
async fn run() -> Result<(), String> {
    let port = get_optional_var::<u16>("SHAREIT_SERVER", "PORT")?.unwrap_or(DEFAULT_PORT);
    let addr = (Ipv4Addr::UNSPECIFIED, port);

    let db_opts = PostgresOptions::from_env("PGSQL_PROD")?;
    let db = Arc::from(PostgresDb::connect(db_opts).map_err(|e| e.to_string())?);
    let mut ex = db.ex().await.map_err(|e| e.to_string())?;
    init_schema(&mut ex).await.map_err(|e| e.to_string())?;
    drop(ex);

    serve(addr, db).await.map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
