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

//! Database operations on comments.

#[cfg(any(feature = "sqlite", test))]
use crate::db::last_insert_id;
#[cfg(feature = "postgres")]
use crate::db::users::user_from_pg_row;
#[cfg(any(feature = "sqlite", test))]
use crate::db::users::user_from_sqlite_row;
use crate::model::{Comment, CommentId, ItemId, UserId};
#[cfg(feature = "postgres")]
use shareit_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use shareit_core::db::sqlite::{self, build_timestamp, unpack_timestamp};
use shareit_core::db::{DbError, DbResult, Executor};
use shareit_core::model::CommentText;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use time::OffsetDateTime;

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Comment {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let text: String = row.try_get("text").map_err(postgres::map_sqlx_error)?;
        let item_id: i32 = row.try_get("item_id").map_err(postgres::map_sqlx_error)?;
        let created: OffsetDateTime = row.try_get("created").map_err(postgres::map_sqlx_error)?;
        let author = user_from_pg_row(&row, "author_")?;

        Ok(Comment::new(
            CommentId::new(id),
            CommentText::new(text)?,
            ItemId::new(item_id),
            author,
            created,
        ))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Comment {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let text: String = row.try_get("text").map_err(sqlite::map_sqlx_error)?;
        let item_id: i32 = row.try_get("item_id").map_err(sqlite::map_sqlx_error)?;
        let created_secs: i64 = row.try_get("created_secs").map_err(sqlite::map_sqlx_error)?;
        let created_nsecs: i64 = row.try_get("created_nsecs").map_err(sqlite::map_sqlx_error)?;
        let author = user_from_sqlite_row(&row, "author_")?;

        Ok(Comment::new(
            CommentId::new(id),
            CommentText::new(text)?,
            ItemId::new(item_id),
            author,
            build_timestamp(created_secs, created_nsecs)?,
        ))
    }
}

/// Records a new comment on `item` written by `author` at time `created`.
pub(crate) async fn create_comment(
    ex: &mut Executor,
    item: ItemId,
    author: UserId,
    text: &CommentText,
    created: OffsetDateTime,
) -> DbResult<CommentId> {
    let id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO comments (text, item_id, author_id, created)
                VALUES ($1, $2, $3, $4)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(text.as_str())
                .bind(item.as_i32())
                .bind(author.as_i32())
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
                INSERT INTO comments (text, item_id, author_id, created_secs, created_nsecs)
                VALUES (?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(text.as_str())
                .bind(item.as_i32())
                .bind(author.as_i32())
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

    Ok(CommentId::new(id))
}

/// Gets all comments on `item`, newest first.
pub(crate) async fn get_comments_by_item(
    ex: &mut Executor,
    item: ItemId,
) -> DbResult<Vec<Comment>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT
                    c.id, c.text, c.item_id, c.created,
                    u.id AS author_id, u.name AS author_name, u.email AS author_email
                FROM comments c JOIN users u ON c.author_id = u.id
                WHERE c.item_id = $1
                ORDER BY c.created DESC, c.id DESC";
            let rows = sqlx::query(query_str)
                .bind(item.as_i32())
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Comment::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT
                    c.id, c.text, c.item_id, c.created_secs, c.created_nsecs,
                    u.id AS author_id, u.name AS author_name, u.email AS author_email
                FROM comments c JOIN users u ON c.author_id = u.id
                WHERE c.item_id = ?
                ORDER BY c.created_secs DESC, c.created_nsecs DESC, c.id DESC";
            let rows = sqlx::query(query_str)
                .bind(item.as_i32())
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Comment::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}
