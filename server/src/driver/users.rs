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

//! Operations on users.

use crate::db;
use crate::driver::{not_found, Driver};
use crate::model::{User, UserId, UserPatch};
use log::info;
use shareit_core::db::DbError;
use shareit_core::driver::{DriverError, DriverResult};
use shareit_core::model::{EmailAddress, Name};

/// Converts a `DbError::AlreadyExists` raised while storing `email` into a descriptive error.
fn email_in_use(email: &EmailAddress) -> impl FnOnce(DbError) -> DriverError + '_ {
    move |e| match e {
        DbError::AlreadyExists => {
            DriverError::AlreadyExists(format!("Email {} is already in use", email.as_str()))
        }
        e => e.into(),
    }
}

impl Driver {
    /// Registers a new user with `name` and `email`.
    pub(crate) async fn create_user(self, name: Name, email: EmailAddress) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;
        let user = db::create_user(tx.ex(), name, email.clone()).await.map_err(email_in_use(&email))?;
        tx.commit().await?;
        info!("Created user {}", user.id());
        Ok(user)
    }

    /// Gets the user identified by `id`.
    pub(crate) async fn get_user(self, id: UserId) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;
        let user = db::get_user(tx.ex(), id).await.map_err(not_found("User", id))?;
        tx.commit().await?;
        Ok(user)
    }

    /// Gets all registered users.
    pub(crate) async fn get_users(self) -> DriverResult<Vec<User>> {
        let mut tx = self.db.begin().await?;
        let users = db::get_users(tx.ex()).await?;
        tx.commit().await?;
        Ok(users)
    }

    /// Modifies the user identified by `id` with the fields set in `patch`.
    pub(crate) async fn update_user(self, id: UserId, patch: UserPatch) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;
        let user = db::get_user(tx.ex(), id).await.map_err(not_found("User", id))?;
        let user = user.apply(patch);
        db::update_user(tx.ex(), &user).await.map_err(email_in_use(user.email()))?;
        tx.commit().await?;
        info!("Updated user {}", id);
        Ok(user)
    }

    /// Deletes the user identified by `id` along with everything they own.
    pub(crate) async fn delete_user(self, id: UserId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        db::delete_user(tx.ex(), id).await.map_err(not_found("User", id))?;
        tx.commit().await?;
        info!("Deleted user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_create_user_ok() {
        let context = TestContext::setup().await;

        let user = context
            .driver()
            .create_user(Name::from("Alice"), EmailAddress::from("alice@example.com"))
            .await
            .unwrap();

        assert_eq!(user, db::get_user(&mut context.ex().await, *user.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let context = TestContext::setup().await;

        context.create_user("Alice").await;

        assert_eq!(
            DriverError::AlreadyExists("Email alice@example.com is already in use".to_owned()),
            context
                .driver()
                .create_user(Name::from("Other"), EmailAddress::from("alice@example.com"))
                .await
                .unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("User with id 7 not found".to_owned()),
            context.driver().get_user(UserId::new(7)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_get_users() {
        let context = TestContext::setup().await;

        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;

        assert_eq!(vec![alice, bob], context.driver().get_users().await.unwrap());
    }

    #[tokio::test]
    async fn test_update_user_partial() {
        let context = TestContext::setup().await;

        let alice = context.create_user("Alice").await;

        let patch = UserPatch { name: Some(Name::from("Alicia")), ..Default::default() };
        let user = context.driver().update_user(*alice.id(), patch).await.unwrap();
        assert_eq!(
            User::new(*alice.id(), Name::from("Alicia"), alice.email().clone()),
            user
        );
        assert_eq!(user, db::get_user(&mut context.ex().await, *alice.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_user_duplicate_email() {
        let context = TestContext::setup().await;

        let alice = context.create_user("Alice").await;
        let bob = context.create_user("Bob").await;

        let patch = UserPatch { email: Some(alice.email().clone()), ..Default::default() };
        assert_eq!(
            DriverError::AlreadyExists("Email alice@example.com is already in use".to_owned()),
            context.driver().update_user(*bob.id(), patch).await.unwrap_err()
        );
        assert_eq!(bob, db::get_user(&mut context.ex().await, *bob.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("User with id 3 not found".to_owned()),
            context.driver().update_user(UserId::new(3), UserPatch::default()).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_user() {
        let context = TestContext::setup().await;

        let alice = context.create_user("Alice").await;

        context.driver().delete_user(*alice.id()).await.unwrap();
        assert_eq!(
            DbError::NotFound,
            db::get_user(&mut context.ex().await, *alice.id()).await.unwrap_err()
        );

        assert_eq!(
            DriverError::NotFound(format!("User with id {} not found", alice.id())),
            context.driver().delete_user(*alice.id()).await.unwrap_err()
        );
    }
}
