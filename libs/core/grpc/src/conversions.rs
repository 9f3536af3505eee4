//! Generic protobuf ↔ domain conversions
//!
//! Helpers for the well-known types that show up in every service schema:
//! - UUIDs (domain `Uuid` ↔ protobuf canonical string)
//! - Timestamps (domain `DateTime<Utc>` ↔ `google.protobuf.Timestamp`)
//!
//! Errors are plain `String`s so handlers can turn them into
//! `Status::invalid_argument` with [`crate::error::ToTonicResult::to_tonic`].
//!
//! ```ignore
//! use core_grpc::conversions::*;
//!
//! let ts = datetime_to_timestamp(Utc::now());
//! let back = timestamp_to_datetime(&ts)?;
//! let id = parse_uuid(&request.id)?;
//! ```

use chrono::{DateTime, Utc};
use prost_types::Timestamp;
use uuid::Uuid;

// ============================================================================
// UUID Conversions (protobuf string ↔ Uuid)
// ============================================================================

/// Parse a UUID carried as a protobuf string.
pub fn parse_uuid(value: &str) -> Result<Uuid, String> {
  Uuid::parse_str(value.trim()).map_err(|e| format!("Invalid UUID '{}': {}", value, e))
}

/// Hyphenated lowercase form, always 36 characters.
pub fn uuid_to_string(uuid: Uuid) -> String {
  uuid.hyphenated().to_string()
}

// ============================================================================
// Timestamp Conversions (google.protobuf.Timestamp ↔ DateTime<Utc>)
// ============================================================================

/// Convert `DateTime<Utc>` to a protobuf `Timestamp`. Lossless down to the nanosecond.
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> Timestamp {
  Timestamp {
    seconds: dt.timestamp(),
    nanos: dt.timestamp_subsec_nanos() as i32,
  }
}

/// Convert a protobuf `Timestamp` to `DateTime<Utc>`.
///
/// Unnormalized inputs (negative or overflowing `nanos`) are normalized first.
/// Values outside chrono's representable range are rejected.
pub fn timestamp_to_datetime(ts: &Timestamp) -> Result<DateTime<Utc>, String> {
  let mut normalized = *ts;
  normalized.normalize();

  DateTime::from_timestamp(normalized.seconds, normalized.nanos as u32)
    .ok_or_else(|| format!("Timestamp out of range: {}s {}ns", ts.seconds, ts.nanos))
}

pub fn opt_datetime_to_timestamp(dt: Option<DateTime<Utc>>) -> Option<Timestamp> {
  dt.map(datetime_to_timestamp)
}

/// Absent stays absent; a present but invalid timestamp is an error.
pub fn opt_timestamp_to_datetime(ts: Option<&Timestamp>) -> Result<Option<DateTime<Utc>>, String> {
  ts.map(timestamp_to_datetime).transpose()
}
