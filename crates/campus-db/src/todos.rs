use campus_types::Error;

use crate::Database;

impl Database {
    /// Insert-or-ignore on the (username, task) compound key. Adding the
    /// same task twice leaves a single entry and is not an error.
    pub fn add_todo(&self, username: &str, task: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT OR IGNORE INTO todos (username, task) VALUES (?1, ?2)",
                (username, task),
            )?;
            Ok(())
        })
    }

    /// Delete by exact task text; no-op when absent.
    pub fn remove_todo(&self, username: &str, task: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "DELETE FROM todos WHERE username = ?1 AND task = ?2",
                (username, task),
            )?;
            Ok(())
        })
    }

    pub fn list_todos(&self, username: &str) -> Result<Vec<String>, Error> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT task FROM todos WHERE username = ?1 ORDER BY rowid")?;
            let rows = stmt
                .query_map([username], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(rows)
        })
    }
}
