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

//! Identifiers of the persisted entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generates a newtype over the `i32` primary key of a table.
macro_rules! id_type [
    ( $(#[$meta:meta])* $name:ident ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
        pub(crate) struct $name(i32);

        impl $name {
            /// Creates a new identifier from its raw database value.
            pub(crate) fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the raw database value of the identifier.
            pub(crate) fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    }
];

id_type!(
    /// Identifier of a booking.
    BookingId
);

id_type!(
    /// Identifier of a comment.
    CommentId
);

id_type!(
    /// Identifier of an item.
    ItemId
);

id_type!(
    /// Identifier of an item request.
    RequestId
);

id_type!(
    /// Identifier of a user.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_plain_numbers_in_json() {
        assert_eq!("42", serde_json::to_string(&UserId::new(42)).unwrap());
        assert_eq!(ItemId::new(7), serde_json::from_str::<ItemId>("7").unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!("123", format!("{}", BookingId::new(123)));
    }
}
