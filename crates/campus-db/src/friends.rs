use tracing::debug;

use campus_types::Error;

use crate::Database;

impl Database {
    /// Insert the directed edge owner -> friend. Idempotent: a duplicate
    /// insert changes nothing and is not an error.
    pub fn add_friend(&self, owner: &str, friend: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT OR IGNORE INTO friends (owner, friend) VALUES (?1, ?2)",
                (owner, friend),
            )?;
            Ok(())
        })
    }

    /// Delete the edge if present; no-op when absent.
    pub fn remove_friend(&self, owner: &str, friend: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "DELETE FROM friends WHERE owner = ?1 AND friend = ?2",
                (owner, friend),
            )?;
            Ok(())
        })
    }

    /// All friends of `owner`, in insertion order (rowid preserves it).
    pub fn list_friends(&self, owner: &str) -> Result<Vec<String>, Error> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT friend FROM friends WHERE owner = ?1 ORDER BY rowid")?;
            let rows = stmt
                .query_map([owner], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(rows)
        })
    }

    pub fn are_friends(&self, owner: &str, friend: &str) -> Result<bool, Error> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM friends WHERE owner = ?1 AND friend = ?2",
                (owner, friend),
                |row| row.get(0),
            )?;
            Ok(count > 0)
        })
    }

    /// Remove every edge touching `username`, whichever side it is on.
    /// This is the mute operation: it fully disconnects the user from the
    /// friend graph, unlike `remove_friend` which drops a single edge.
    pub fn disconnect_user(&self, username: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            let removed = conn.execute(
                "DELETE FROM friends WHERE owner = ?1 OR friend = ?1",
                [username],
            )?;
            debug!("disconnected {} ({} edges removed)", username, removed);
            Ok(())
        })
    }
}
