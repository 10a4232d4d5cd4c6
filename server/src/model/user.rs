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

//! The `User` data type.

use crate::model::UserId;
use derive_getters::Getters;
use derive_more::Constructor;
use shareit_core::model::{EmailAddress, Name};

/// A registered user of the service.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct User {
    /// Unique identifier of the user.
    id: UserId,

    /// Display name of the user.
    name: Name,

    /// Contact address of the user, unique among all users.
    email: EmailAddress,
}

impl User {
    /// Returns a copy of this user with the fields set in `patch` replaced.
    pub(crate) fn apply(self, patch: UserPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            email: patch.email.unwrap_or(self.email),
        }
    }
}

/// Partial modification of a user.  Fields that are `None` are left untouched.
#[derive(Debug, Default)]
pub(crate) struct UserPatch {
    /// New name for the user.
    pub(crate) name: Option<Name>,

    /// New email address for the user.
    pub(crate) email: Option<EmailAddress>,
}
