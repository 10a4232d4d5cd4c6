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

//! Database operations on bookings.

#[cfg(feature = "postgres")]
use crate::db::items::item_from_pg_row;
#[cfg(any(feature = "sqlite", test))]
use crate::db::items::item_from_sqlite_row;
#[cfg(any(feature = "sqlite", test))]
use crate::db::last_insert_id;
#[cfg(feature = "postgres")]
use crate::db::users::user_from_pg_row;
#[cfg(any(feature = "sqlite", test))]
use crate::db::users::user_from_sqlite_row;
use crate::model::{Booking, BookingId, BookingStatus, ItemId, UserId};
#[cfg(feature = "postgres")]
use shareit_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use shareit_core::db::sqlite::{self, build_timestamp, unpack_timestamp};
use shareit_core::db::{DbError, DbResult, Executor};
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use time::OffsetDateTime;

/// Query to fetch bookings joined with their items and bookers in PostgreSQL.
#[cfg(feature = "postgres")]
const PG_SELECT_BOOKINGS: &str = "
    SELECT
        b.id, b.start_time, b.end_time, b.status,
        i.id AS item_id, i.name AS item_name, i.description AS item_description,
        i.available AS item_available, i.owner_id AS item_owner_id,
        i.request_id AS item_request_id,
        u.id AS booker_id, u.name AS booker_name, u.email AS booker_email
    FROM bookings b
        JOIN items i ON b.item_id = i.id
        JOIN users u ON b.booker_id = u.id";

/// Ordering of booking listings in PostgreSQL.
#[cfg(feature = "postgres")]
const PG_ORDER_BOOKINGS: &str = "ORDER BY b.start_time DESC, b.id DESC";

/// Query to fetch bookings joined with their items and bookers in SQLite.
#[cfg(any(feature = "sqlite", test))]
const SQLITE_SELECT_BOOKINGS: &str = "
    SELECT
        b.id, b.start_time_secs, b.start_time_nsecs, b.end_time_secs, b.end_time_nsecs, b.status,
        i.id AS item_id, i.name AS item_name, i.description AS item_description,
        i.available AS item_available, i.owner_id AS item_owner_id,
        i.request_id AS item_request_id,
        u.id AS booker_id, u.name AS booker_name, u.email AS booker_email
    FROM bookings b
        JOIN items i ON b.item_id = i.id
        JOIN users u ON b.booker_id = u.id";

/// Ordering of booking listings in SQLite.
#[cfg(any(feature = "sqlite", test))]
const SQLITE_ORDER_BOOKINGS: &str =
    "ORDER BY b.start_time_secs DESC, b.start_time_nsecs DESC, b.id DESC";

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Booking {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let start: OffsetDateTime = row.try_get("start_time").map_err(postgres::map_sqlx_error)?;
        let end: OffsetDateTime = row.try_get("end_time").map_err(postgres::map_sqlx_error)?;
        let status: String = row.try_get("status").map_err(postgres::map_sqlx_error)?;

        let item = item_from_pg_row(&row, "item_")?;
        let booker = user_from_pg_row(&row, "booker_")?;

        Ok(Booking::new(
            BookingId::new(id),
            start,
            end,
            item,
            booker,
            BookingStatus::parse(&status)?,
        ))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Booking {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let start_secs: i64 = row.try_get("start_time_secs").map_err(sqlite::map_sqlx_error)?;
        let start_nsecs: i64 = row.try_get("start_time_nsecs").map_err(sqlite::map_sqlx_error)?;
        let end_secs: i64 = row.try_get("end_time_secs").map_err(sqlite::map_sqlx_error)?;
        let end_nsecs: i64 = row.try_get("end_time_nsecs").map_err(sqlite::map_sqlx_error)?;
        let status: String = row.try_get("status").map_err(sqlite::map_sqlx_error)?;

        let item = item_from_sqlite_row(&row, "item_")?;
        let booker = user_from_sqlite_row(&row, "booker_")?;

        Ok(Booking::new(
            BookingId::new(id),
            build_timestamp(start_secs, start_nsecs)?,
            build_timestamp(end_secs, end_nsecs)?,
            item,
            booker,
            BookingStatus::parse(&status)?,
        ))
    }
}

/// Records a new booking of `item` by `booker` for the `[start, end]` range.
pub(crate) async fn create_booking(
    ex: &mut Executor,
    item: ItemId,
    booker: UserId,
    start: OffsetDateTime,
    end: OffsetDateTime,
    status: BookingStatus,
) -> DbResult<BookingId> {
    let id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO bookings (start_time, end_time, item_id, booker_id, status)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(start)
                .bind(end)
                .bind(item.as_i32())
                .bind(booker.as_i32())
                .bind(status.as_str())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i32, _>("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let (start_secs, start_nsecs) = unpack_timestamp(start)?;
            let (end_secs, end_nsecs) = unpack_timestamp(end)?;

            let query_str = "
                INSERT INTO bookings (
                    start_time_secs, start_time_nsecs, end_time_secs, end_time_nsecs,
                    item_id, booker_id, status
                )
                VALUES (?, ?, ?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(start_secs)
                .bind(start_nsecs)
                .bind(end_secs)
                .bind(end_nsecs)
                .bind(item.as_i32())
                .bind(booker.as_i32())
                .bind(status.as_str())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            last_insert_id(done.last_insert_rowid())?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(BookingId::new(id))
}

/// Gets the booking identified by `id`.
pub(crate) async fn get_booking(ex: &mut Executor, id: BookingId) -> DbResult<Booking> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = format!("{} WHERE b.id = $1", PG_SELECT_BOOKINGS);
            let raw_booking = sqlx::query(&query_str)
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Booking::try_from(raw_booking)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = format!("{} WHERE b.id = ?", SQLITE_SELECT_BOOKINGS);
            let raw_booking = sqlx::query(&query_str)
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Booking::try_from(raw_booking)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Sets the `status` of the booking identified by `id`.
pub(crate) async fn update_booking_status(
    ex: &mut Executor,
    id: BookingId,
    status: BookingStatus,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let done = sqlx::query("UPDATE bookings SET status = $1 WHERE id = $2")
                .bind(status.as_str())
                .bind(id.as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let done = sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(id.as_i32())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError("Update affected more than one row".to_owned())),
    }
}

/// Runs a booking listing query that filters on a single `column` equal to `id`.
///
/// `column` must be a trusted, hardcoded name.
async fn get_bookings_where(ex: &mut Executor, column: &str, id: i32) -> DbResult<Vec<Booking>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str =
                format!("{} WHERE {} = $1 {}", PG_SELECT_BOOKINGS, column, PG_ORDER_BOOKINGS);
            let rows = sqlx::query(&query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Booking::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str =
                format!("{} WHERE {} = ? {}", SQLITE_SELECT_BOOKINGS, column, SQLITE_ORDER_BOOKINGS);
            let rows = sqlx::query(&query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Booking::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all bookings made by `booker`, most recent start first.
pub(crate) async fn get_bookings_by_booker(
    ex: &mut Executor,
    booker: UserId,
) -> DbResult<Vec<Booking>> {
    get_bookings_where(ex, "b.booker_id", booker.as_i32()).await
}

/// Gets all bookings of the items owned by `owner`, most recent start first.
pub(crate) async fn get_bookings_by_owner(
    ex: &mut Executor,
    owner: UserId,
) -> DbResult<Vec<Booking>> {
    get_bookings_where(ex, "i.owner_id", owner.as_i32()).await
}

/// Gets all bookings of `item`, most recent start first.
pub(crate) async fn get_bookings_by_item(
    ex: &mut Executor,
    item: ItemId,
) -> DbResult<Vec<Booking>> {
    get_bookings_where(ex, "b.item_id", item.as_i32()).await
}
