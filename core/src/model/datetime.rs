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

//! Wire representation of timestamps.
//!
//! Timestamps travel as ISO-8601 local date-times (`2024-03-01T10:15:00`, with a fractional
//! part only when needed) that are interpreted as UTC.  Inputs may also carry fractional seconds or an explicit RFC 3339 offset.  Use with
//! `#[serde(with = "shareit_core::model::datetime")]` or, for optional fields,
//! `#[serde(default, with = "shareit_core::model::datetime::option")]`.

use crate::model::{ModelError, ModelResult};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Formats `ts` in its wire representation after converting it to UTC.
///
/// Fractional seconds are only written when present, with as many digits as needed to keep the
/// timestamp intact.
pub fn format(ts: OffsetDateTime) -> ModelResult<String> {
    let ts = ts.to_offset(UtcOffset::UTC);
    let formatted = if ts.nanosecond() == 0 {
        ts.format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
    } else {
        ts.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:1+]"
        ))
    };
    formatted.map_err(|e| ModelError(format!("Cannot format timestamp {}: {}", ts, e)))
}

/// Parses a timestamp `s` from its wire representation.
pub fn parse(s: &str) -> ModelResult<OffsetDateTime> {
    if let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(ts.to_offset(UtcOffset::UTC));
    }

    PrimitiveDateTime::parse(
        s,
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        ),
    )
    .map(PrimitiveDateTime::assume_utc)
    .map_err(|e| ModelError(format!("Invalid timestamp '{}': {}", s, e)))
}

/// Serializes a timestamp with `serde`.
pub fn serialize<S>(ts: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = format(*ts).map_err(S::Error::custom)?;
    serializer.serialize_str(&s)
}

/// Deserializes a timestamp with `serde`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(D::Error::custom)
}

/// Same as the parent module but for optional timestamps, which map to JSON nulls.
pub mod option {
    use super::*;
    use serde::de::Error as _;

    /// Serializes an optional timestamp with `serde`.
    pub fn serialize<S>(ts: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(ts) => super::serialize(ts, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp with `serde`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}
