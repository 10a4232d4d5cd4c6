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

//! Generic data types shared by the gateway and the server.
//!
//! Every service keeps its own `model` module with the types of its domain.  The types in here
//! are validated primitives that both tiers agree on, so that a payload accepted by the gateway
//! is also accepted by the server.

pub mod datetime;
mod emailaddress;
pub use emailaddress::EmailAddress;
mod text;
pub use text::{CommentText, Description, Name};

/// Model errors.  Validation failures when constructing model types surface as these.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ModelError(pub String);

/// Result type for this module.
pub type ModelResult<T> = Result<T, ModelError>;
