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

//! Free-form text data types that must not be blank.

use crate::model::{ModelError, ModelResult};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum length of names per the schema.
pub(crate) const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of descriptions and comments per the schema.
pub(crate) const MAX_TEXT_LENGTH: usize = 1000;

/// Generates a newtype over a non-blank `String` of at most `max_len` bytes.
///
/// `what` is the human-readable name of the type used in error messages.
macro_rules! text_type [
    ( $(#[$meta:meta])* $name:ident, $what:literal, $max_len:expr ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new value from an untrusted string `s`, making sure it is valid.
            pub fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
                let s = s.into();
                if s.trim().is_empty() {
                    return Err(ModelError(format!("{} cannot be blank", $what)));
                }
                if s.len() > $max_len {
                    return Err(ModelError(format!(
                        "{} is too long (maximum {} bytes)",
                        $what, $max_len
                    )));
                }
                Ok(Self(s))
            }

            /// Creates a new value from an untrusted string `s`, without validation.  Useful
            /// for testing purposes only.
            #[cfg(any(test, feature = "testutils"))]
            pub fn new_invalid<S: Into<String>>(s: S) -> Self {
                Self(s.into())
            }

            /// Returns a string view of the value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        #[cfg(any(test, feature = "testutils"))]
        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw).expect("Hardcoded values for testing must be valid")
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                $name::new(raw).map_err(D::Error::custom)
            }
        }
    }
];

text_type!(
    /// The name of a user or of an item.
    Name,
    "Name",
    MAX_NAME_LENGTH
);

text_type!(
    /// The description of an item or of an item request.
    Description,
    "Description",
    MAX_TEXT_LENGTH
);

text_type!(
    /// The text of a comment left on an item.
    CommentText,
    "Comment text",
    MAX_TEXT_LENGTH
);
