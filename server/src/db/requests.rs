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

//! Database operations on item requests.

#[cfg(any(feature = "sqlite", test))]
use crate::db::last_insert_id;
use crate::model::{ItemRequest, RequestId, UserId};
#[cfg(feature = "postgres")]
use shareit_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use shareit_core::db::sqlite::{self, build_timestamp, unpack_timestamp};
use shareit_core::db::{DbError, DbResult, Executor};
use shareit_core::model::Description;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use time::OffsetDateTime;

/// Page of results to return from a listing operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Page {
    /// Maximum number of rows to return.
    pub(crate) limit: i64,

    /// Number of rows to skip.
    pub(crate) offset: i64,
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for ItemRequest {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let description: String = row.try_get("description").map_err(postgres::map_sqlx_error)?;
        let requestor_id: i32 = row.try_get("requestor_id").map_err(postgres::map_sqlx_error)?;
        let created: OffsetDateTime = row.try_get("created").map_err(postgres::map_sqlx_error)?;

        Ok(ItemRequest::new(
            RequestId::new(id),
            Description::new(description)?,
            UserId::new(requestor_id),
            created,
            vec![],
        ))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for ItemRequest {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let description: String = row.try_get("description").map_err(sqlite::map_sqlx_error)?;
        let requestor_id: i32 = row.try_get("requestor_id").map_err(sqlite::map_sqlx_error)?;
        let created_secs: i64 = row.try_get("created_secs").map_err(sqlite::map_sqlx_error)?;
        let created_nsecs: i64 = row.try_get("created_nsecs").map_err(sqlite::map_sqlx_error)?;

        Ok(ItemRequest::new(
            RequestId::new(id),
            Description::new(description)?,
            UserId::new(requestor_id),
            build_timestamp(created_secs, created_nsecs)?,
            vec![],
        ))
    }
}

/// Records a new request posted by `requestor` at time `created` and returns it.
///
/// The returned request has no items attached.
pub(crate) async fn create_request(
    ex: &mut Executor,
    requestor: UserId,
    description: Description,
    created: OffsetDateTime,
) -> DbResult<ItemRequest> {
    let id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO requests (description, requestor_id, created)
                VALUES ($1, $2, $3)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(description.as_str())
                .bind(requestor.as_i32())
                .bind(created)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i32, _>("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let (created_secs, created_nsecs) = unpack_timestamp(created)?;

            let query_str = "
                INSERT INTO requests (description, requestor_id, created_secs, created_nsecs)
                VALUES (?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(description.as_str())
                .bind(requestor.as_i32())
                .bind(created_secs)
                .bind(created_nsecs)
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            last_insert_id(done.last_insert_rowid())?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(ItemRequest::new(RequestId::new(id), description, requestor, created, vec![]))
}

/// Gets the request identified by `id`, without its items.
pub(crate) async fn get_request(ex: &mut Executor, id: RequestId) -> DbResult<ItemRequest> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let raw_request = sqlx::query("SELECT * FROM requests WHERE id = $1")
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            ItemRequest::try_from(raw_request)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let raw_request = sqlx::query("SELECT * FROM requests WHERE id = ?")
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            ItemRequest::try_from(raw_request)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the requests posted by `requestor`, newest first and without their items.
pub(crate) async fn get_requests_by_requestor(
    ex: &mut Executor,
    requestor: UserId,
) -> DbResult<Vec<ItemRequest>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str =
                "SELECT * FROM requests WHERE requestor_id = $1 ORDER BY created DESC, id DESC";
            let rows = sqlx::query(query_str)
                .bind(requestor.as_i32())
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(ItemRequest::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT * FROM requests
                WHERE requestor_id = ?
                ORDER BY created_secs DESC, created_nsecs DESC, id DESC";
            let rows = sqlx::query(query_str)
                .bind(requestor.as_i32())
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(ItemRequest::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets a `page` of the requests posted by anyone other than `requestor`, newest first and
/// without their items.
pub(crate) async fn get_requests_by_others(
    ex: &mut Executor,
    requestor: UserId,
    page: Page,
) -> DbResult<Vec<ItemRequest>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT * FROM requests
                WHERE requestor_id <> $1
                ORDER BY created DESC, id DESC
                LIMIT $2 OFFSET $3";
            let rows = sqlx::query(query_str)
                .bind(requestor.as_i32())
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(ItemRequest::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT * FROM requests
                WHERE requestor_id <> ?
                ORDER BY created_secs DESC, created_nsecs DESC, id DESC
                LIMIT ? OFFSET ?";
            let rows = sqlx::query(query_str)
                .bind(requestor.as_i32())
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(ItemRequest::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}
