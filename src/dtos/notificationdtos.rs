use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UnreadCountDto {
    pub unread_count: i64,
}

#[derive(Debug, Serialize)]
pub struct MarkAllReadDto {
    pub updated_count: u64,
}
