use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored post. `id` is assigned by the storage layer on insert and is
/// immutable afterwards; the serialized form carries exactly these three
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}
