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

//! Database operations on items.

#[cfg(any(feature = "sqlite", test))]
use crate::db::last_insert_id;
use crate::db::like_pattern;
use crate::model::{Item, ItemId, RequestId, UserId};
#[cfg(feature = "postgres")]
use shareit_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use shareit_core::db::sqlite;
use shareit_core::db::{DbError, DbResult, Executor};
use shareit_core::model::{Description, Name};
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Extracts an item from a PostgreSQL `row` whose item columns are named with `prefix`.
#[cfg(feature = "postgres")]
pub(super) fn item_from_pg_row(row: &PgRow, prefix: &str) -> DbResult<Item> {
    let get = |name: &str| format!("{}{}", prefix, name);
    let id: i32 = row.try_get(get("id").as_str()).map_err(postgres::map_sqlx_error)?;
    let name: String = row.try_get(get("name").as_str()).map_err(postgres::map_sqlx_error)?;
    let description: String =
        row.try_get(get("description").as_str()).map_err(postgres::map_sqlx_error)?;
    let available: bool =
        row.try_get(get("available").as_str()).map_err(postgres::map_sqlx_error)?;
    let owner_id: i32 = row.try_get(get("owner_id").as_str()).map_err(postgres::map_sqlx_error)?;
    let request_id: Option<i32> =
        row.try_get(get("request_id").as_str()).map_err(postgres::map_sqlx_error)?;

    Ok(Item::new(
        ItemId::new(id),
        Name::new(name)?,
        Description::new(description)?,
        available,
        UserId::new(owner_id),
        request_id.map(RequestId::new),
    ))
}

/// Extracts an item from a SQLite `row` whose item columns are named with `prefix`.
#[cfg(any(feature = "sqlite", test))]
pub(super) fn item_from_sqlite_row(row: &SqliteRow, prefix: &str) -> DbResult<Item> {
    let get = |name: &str| format!("{}{}", prefix, name);
    let id: i32 = row.try_get(get("id").as_str()).map_err(sqlite::map_sqlx_error)?;
    let name: String = row.try_get(get("name").as_str()).map_err(sqlite::map_sqlx_error)?;
    let description: String =
        row.try_get(get("description").as_str()).map_err(sqlite::map_sqlx_error)?;
    let available: bool = row.try_get(get("available").as_str()).map_err(sqlite::map_sqlx_error)?;
    let owner_id: i32 = row.try_get(get("owner_id").as_str()).map_err(sqlite::map_sqlx_error)?;
    let request_id: Option<i32> =
        row.try_get(get("request_id").as_str()).map_err(sqlite::map_sqlx_error)?;

    Ok(Item::new(
        ItemId::new(id),
        Name::new(name)?,
        Description::new(description)?,
        available,
        UserId::new(owner_id),
        request_id.map(RequestId::new),
    ))
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Item {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        item_from_pg_row(&row, "")
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Item {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        item_from_sqlite_row(&row, "")
    }
}

/// Creates a new item owned by `owner` and returns it.
pub(crate) async fn create_item(
    ex: &mut Executor,
    owner: UserId,
    name: Name,
    description: Description,
    available: bool,
    request: Option<RequestId>,
) -> DbResult<Item> {
    let id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO items (name, description, available, owner_id, request_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(description.as_str())
                .bind(available)
                .bind(owner.as_i32())
                .bind(request.map(RequestId::as_i32))
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i32, _>("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO items (name, description, available, owner_id, request_id)
                VALUES (?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(description.as_str())
                .bind(available)
                .bind(owner.as_i32())
                .bind(request.map(RequestId::as_i32))
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            last_insert_id(done.last_insert_rowid())?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(Item::new(ItemId::new(id), name, description, available, owner, request))
}

/// Gets the item identified by `id`.
pub(crate) async fn get_item(ex: &mut Executor, id: ItemId) -> DbResult<Item> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let raw_item = sqlx::query("SELECT * FROM items WHERE id = $1")
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Item::try_from(raw_item)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let raw_item = sqlx::query("SELECT * FROM items WHERE id = ?")
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Item::try_from(raw_item)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Overwrites the mutable details of `item` (name, description and availability).
pub(crate) async fn update_item(ex: &mut Executor, item: &Item) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str =
                "UPDATE items SET name = $1, description = $2, available = $3 WHERE id = $4";
            let done = sqlx::query(query_str)
                .bind(item.name().as_str())
                .bind(item.description().as_str())
                .bind(*item.available())
                .bind(item.id().as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "UPDATE items SET name = ?, description = ?, available = ? WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(item.name().as_str())
                .bind(item.description().as_str())
                .bind(*item.available())
                .bind(item.id().as_i32())
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

/// Gets all items owned by `owner` sorted by their identifier.
pub(crate) async fn get_items_by_owner(ex: &mut Executor, owner: UserId) -> DbResult<Vec<Item>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let rows = sqlx::query("SELECT * FROM items WHERE owner_id = $1 ORDER BY id")
                .bind(owner.as_i32())
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Item::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let rows = sqlx::query("SELECT * FROM items WHERE owner_id = ? ORDER BY id")
                .bind(owner.as_i32())
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Item::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all items created in answer to `request` sorted by their identifier.
pub(crate) async fn get_items_by_request(
    ex: &mut Executor,
    request: RequestId,
) -> DbResult<Vec<Item>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let rows = sqlx::query("SELECT * FROM items WHERE request_id = $1 ORDER BY id")
                .bind(request.as_i32())
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Item::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let rows = sqlx::query("SELECT * FROM items WHERE request_id = ? ORDER BY id")
                .bind(request.as_i32())
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Item::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Finds available items whose name or description contain `text`, ignoring case, sorted by
/// their identifier.
pub(crate) async fn search_items(ex: &mut Executor, text: &str) -> DbResult<Vec<Item>> {
    let pattern = like_pattern(text);
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT * FROM items
                WHERE available
                    AND (LOWER(name) LIKE $1 ESCAPE '\\' OR LOWER(description) LIKE $1 ESCAPE '\\')
                ORDER BY id";
            let rows = sqlx::query(query_str)
                .bind(pattern.as_str())
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Item::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT * FROM items
                WHERE available
                    AND (LOWER(name) LIKE ?1 ESCAPE '\\' OR LOWER(description) LIKE ?1 ESCAPE '\\')
                ORDER BY id";
            let rows = sqlx::query(query_str)
                .bind(pattern.as_str())
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Item::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}
