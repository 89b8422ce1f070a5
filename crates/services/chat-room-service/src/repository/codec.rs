//! Conversion between `ChatRoomObject` and raw store values.
//!
//! Decoding is strict: unknown fields, missing required fields and wrong
//! types are all rejected. Collections are shape-checked before any record
//! is decoded.

use serde_json::Value;

use common::{DbError, DbResult};
use domain::ChatRoomObject;

/// Encode a record into the object stored at `ChatRooms/{owner}/{friend}`.
pub fn encode(room: &ChatRoomObject) -> DbResult<Value> {
    serde_json::to_value(room).map_err(DbError::encoding)
}

/// Decode a single stored record.
pub fn decode(value: Value) -> DbResult<ChatRoomObject> {
    serde_json::from_value(value).map_err(DbError::decoding)
}

/// Decode the value stored at a collection path (`ChatRooms/{owner}`).
///
/// The value must be an object whose every member is itself an object,
/// otherwise the whole value is rejected as a `Validation` error. Members are
/// decoded only after that check; the first bad member fails the call.
pub fn decode_collection(path: &str, value: Value) -> DbResult<Vec<ChatRoomObject>> {
    let Value::Object(members) = value else {
        return Err(DbError::validation(path));
    };
    if !members.values().all(Value::is_object) {
        return Err(DbError::validation(path));
    }

    members.into_iter().map(|(_, member)| decode(member)).collect()
}
