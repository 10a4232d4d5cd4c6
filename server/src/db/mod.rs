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

//! Database abstraction in terms of the operations needed by the server.
//!
//! Every operation is a free function that takes an `Executor` and issues the queries for each
//! supported database backend.

#[cfg(feature = "postgres")]
use shareit_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use shareit_core::db::sqlite;
use shareit_core::db::{DbResult, Executor};

mod bookings;
pub(crate) use bookings::*;
mod comments;
pub(crate) use comments::*;
mod items;
pub(crate) use items::*;
mod requests;
pub(crate) use requests::*;
mod users;
pub(crate) use users::*;


/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Converts the raw identifier of a freshly-inserted SQLite row into our identifier type.
#[cfg(any(feature = "sqlite", test))]
fn last_insert_id(rowid: i64) -> DbResult<i32> {
    i32::try_from(rowid).map_err(|e| {
        shareit_core::db::DbError::DataIntegrityError(format!("Row id {} out of range: {}", rowid, e))
    })
}

/// Turns a `text` search term into a case-insensitive `LIKE` pattern that matches `text` as a
/// substring.  Wildcards in `text` are escaped with a backslash.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
