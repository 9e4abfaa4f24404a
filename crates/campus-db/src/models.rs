/// Database row types — these map directly to SQLite rows.
/// Distinct from the campus-types API models so the storage layer can evolve
/// its schema without touching callers.

pub struct UserRow {
    pub username: String,
    pub admin: bool,
    pub created_at: String,
}

pub struct ConversationRow {
    pub id: String,
    pub user1: String,
    pub user2: String,
    pub message_count: i64,
}

pub struct MessageRow {
    pub seq: i64,
    pub sender: String,
    pub body: String,
    pub created_at: String,
}

pub struct GuideRow {
    pub course_code: String,
    pub course_name: String,
    pub description: String,
}
