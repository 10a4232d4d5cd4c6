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

//! Database operations on users.

use crate::model::{User, UserId};
#[cfg(any(feature = "sqlite", test))]
use crate::db::last_insert_id;
#[cfg(feature = "postgres")]
use shareit_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use shareit_core::db::sqlite;
use shareit_core::db::{DbError, DbResult, Executor};
use shareit_core::model::{EmailAddress, Name};
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Extracts a user from a PostgreSQL `row` whose user columns are named with `prefix`.
#[cfg(feature = "postgres")]
pub(super) fn user_from_pg_row(row: &PgRow, prefix: &str) -> DbResult<User> {
    let id: i32 = row.try_get(format!("{}id", prefix).as_str()).map_err(postgres::map_sqlx_error)?;
    let name: String =
        row.try_get(format!("{}name", prefix).as_str()).map_err(postgres::map_sqlx_error)?;
    let email: String =
        row.try_get(format!("{}email", prefix).as_str()).map_err(postgres::map_sqlx_error)?;
    Ok(User::new(UserId::new(id), Name::new(name)?, EmailAddress::new(email)?))
}

/// Extracts a user from a SQLite `row` whose user columns are named with `prefix`.
#[cfg(any(feature = "sqlite", test))]
pub(super) fn user_from_sqlite_row(row: &SqliteRow, prefix: &str) -> DbResult<User> {
    let id: i32 = row.try_get(format!("{}id", prefix).as_str()).map_err(sqlite::map_sqlx_error)?;
    let name: String =
        row.try_get(format!("{}name", prefix).as_str()).map_err(sqlite::map_sqlx_error)?;
    let email: String =
        row.try_get(format!("{}email", prefix).as_str()).map_err(sqlite::map_sqlx_error)?;
    Ok(User::new(UserId::new(id), Name::new(name)?, EmailAddress::new(email)?))
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for User {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        user_from_pg_row(&row, "")
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for User {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        user_from_sqlite_row(&row, "")
    }
}

/// Creates a new user with `name` and `email` and returns it.
pub(crate) async fn create_user(
    ex: &mut Executor,
    name: Name,
    email: EmailAddress,
) -> DbResult<User> {
    let id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(email.as_str())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i32, _>("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO users (name, email) VALUES (?, ?)";
            let done = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(email.as_str())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            last_insert_id(done.last_insert_rowid())?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(User::new(UserId::new(id), name, email))
}

/// Gets the user identified by `id`.
pub(crate) async fn get_user(ex: &mut Executor, id: UserId) -> DbResult<User> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM users WHERE id = $1";
            let raw_user = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            User::try_from(raw_user)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM users WHERE id = ?";
            let raw_user = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            User::try_from(raw_user)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all users sorted by their identifier.
pub(crate) async fn get_users(ex: &mut Executor) -> DbResult<Vec<User>> {
    let query_str = "SELECT * FROM users ORDER BY id";
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let rows = sqlx::query(query_str).fetch_all(ex).await.map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(User::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let rows = sqlx::query(query_str).fetch_all(ex).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(User::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Overwrites the stored details of `user` with the given values.
pub(crate) async fn update_user(ex: &mut Executor, user: &User) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";
            let done = sqlx::query(query_str)
                .bind(user.name().as_str())
                .bind(user.email().as_str())
                .bind(user.id().as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "UPDATE users SET name = ?, email = ? WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(user.name().as_str())
                .bind(user.email().as_str())
                .bind(user.id().as_i32())
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

/// Deletes the user identified by `id` along with everything that references it.
pub(crate) async fn delete_user(ex: &mut Executor, id: UserId) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let done = sqlx::query("DELETE FROM users WHERE id = $1")
                .bind(id.as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let done = sqlx::query("DELETE FROM users WHERE id = ?")
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
        _ => Err(DbError::BackendError("Deletion affected more than one row".to_owned())),
    }
}
