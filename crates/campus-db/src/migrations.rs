use rusqlite::Connection;
use tracing::info;

use campus_types::Error;

pub fn run(conn: &Connection) -> Result<(), Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            username    TEXT PRIMARY KEY,
            password    TEXT NOT NULL,
            admin       INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS friends (
            owner       TEXT NOT NULL REFERENCES users(username),
            friend      TEXT NOT NULL REFERENCES users(username),
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (owner, friend),
            CHECK (owner <> friend)
        );

        -- Canonical unordered pair: orientation is fixed by whichever call
        -- created the row, and lookups always try both orders. No foreign
        -- keys to users: history outlives deleted accounts.
        CREATE TABLE IF NOT EXISTS conversations (
            id            TEXT PRIMARY KEY,
            user1         TEXT NOT NULL,
            user2         TEXT NOT NULL,
            message_count INTEGER NOT NULL DEFAULT 0,
            created_at    TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE (user1, user2)
        );

        CREATE TABLE IF NOT EXISTS messages (
            conversation_id TEXT NOT NULL REFERENCES conversations(id),
            sender          TEXT NOT NULL,
            body            TEXT NOT NULL,
            seq             INTEGER NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (conversation_id, seq)
        );

        CREATE TABLE IF NOT EXISTS todos (
            username    TEXT NOT NULL REFERENCES users(username),
            task        TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (username, task)
        );

        CREATE TABLE IF NOT EXISTS guides (
            course_code TEXT PRIMARY KEY,
            course_name TEXT NOT NULL,
            description TEXT NOT NULL
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
