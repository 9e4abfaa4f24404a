use rusqlite::{OptionalExtension, Transaction};
use tracing::debug;
use uuid::Uuid;

use campus_types::Error;

use crate::Database;
use crate::models::{ConversationRow, MessageRow};

impl Database {
    /// Resolve the unordered pair (a, b) to its single conversation,
    /// creating it with an empty counter on first contact. Whichever
    /// orientation was stored first is the canonical one; both call orders
    /// converge on the same row forever after.
    pub fn resolve_conversation(&self, user_a: &str, user_b: &str) -> Result<ConversationRow, Error> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            if let Some(row) = lookup_pair(&tx, user_a, user_b)? {
                tx.commit()?;
                return Ok(row);
            }

            let id = Uuid::new_v4().to_string();
            tx.execute(
                "INSERT INTO conversations (id, user1, user2, message_count) VALUES (?1, ?2, ?3, 0)",
                (&id, user_a, user_b),
            )?;
            tx.commit()?;

            debug!("created conversation {} for ({}, {})", id, user_a, user_b);
            Ok(ConversationRow {
                id,
                user1: user_a.to_string(),
                user2: user_b.to_string(),
                message_count: 0,
            })
        })
    }

    /// Append a message and return its sequence number.
    ///
    /// The read of `message_count`, the insert, and the counter update run
    /// in one transaction under the connection lock, so two concurrent
    /// appends can never observe the same counter snapshot. Sequence numbers
    /// per conversation are exactly 1..=N with no gaps or repeats.
    pub fn append_message(
        &self,
        conversation_id: &str,
        sender: &str,
        body: &str,
    ) -> Result<i64, Error> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let count: Option<i64> = tx
                .query_row(
                    "SELECT message_count FROM conversations WHERE id = ?1",
                    [conversation_id],
                    |row| row.get(0),
                )
                .optional()?;
            let count = count.ok_or_else(|| Error::not_found("conversation", conversation_id))?;

            let seq = count + 1;
            tx.execute(
                "INSERT INTO messages (conversation_id, sender, body, seq) VALUES (?1, ?2, ?3, ?4)",
                (conversation_id, sender, body, seq),
            )?;
            tx.execute(
                "UPDATE conversations SET message_count = ?1 WHERE id = ?2",
                (seq, conversation_id),
            )?;

            tx.commit()?;
            Ok(seq)
        })
    }

    /// Full history in sequence order: stable, total, gap-free by the
    /// append invariant.
    pub fn get_history(&self, conversation_id: &str) -> Result<Vec<MessageRow>, Error> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT seq, sender, body, created_at
                 FROM messages
                 WHERE conversation_id = ?1
                 ORDER BY seq ASC",
            )?;

            let rows = stmt
                .query_map([conversation_id], |row| {
                    Ok(MessageRow {
                        seq: row.get(0)?,
                        sender: row.get(1)?,
                        body: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    pub fn get_conversation(&self, conversation_id: &str) -> Result<Option<ConversationRow>, Error> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, user1, user2, message_count FROM conversations WHERE id = ?1",
                [conversation_id],
                map_conversation,
            )
            .optional()
            .map_err(Error::from)
        })
    }
}

fn lookup_pair(
    tx: &Transaction<'_>,
    user_a: &str,
    user_b: &str,
) -> Result<Option<ConversationRow>, Error> {
    tx.query_row(
        "SELECT id, user1, user2, message_count
         FROM conversations
         WHERE (user1 = ?1 AND user2 = ?2) OR (user1 = ?2 AND user2 = ?1)",
        (user_a, user_b),
        map_conversation,
    )
    .optional()
    .map_err(Error::from)
}

fn map_conversation(row: &rusqlite::Row<'_>) -> rusqlite::Result<ConversationRow> {
    Ok(ConversationRow {
        id: row.get(0)?,
        user1: row.get(1)?,
        user2: row.get(2)?,
        message_count: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.register_user("alice", "pw").unwrap();
        db.register_user("bob", "pw").unwrap();
        db
    }

    #[test]
    fn pair_resolution_is_order_independent() {
        let db = db();
        let first = db.resolve_conversation("alice", "bob").unwrap();
        let second = db.resolve_conversation("bob", "alice").unwrap();
        let third = db.resolve_conversation("alice", "bob").unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.id, third.id);
        // Canonical orientation is whatever the first call stored
        assert_eq!(second.user1, "alice");
        assert_eq!(second.user2, "bob");
    }

    #[test]
    fn sequence_numbers_are_contiguous_from_one() {
        let db = db();
        let convo = db.resolve_conversation("alice", "bob").unwrap();

        assert_eq!(db.append_message(&convo.id, "alice", "hi").unwrap(), 1);
        assert_eq!(db.append_message(&convo.id, "bob", "yo").unwrap(), 2);
        assert_eq!(db.append_message(&convo.id, "alice", "how are you").unwrap(), 3);

        let history = db.get_history(&convo.id).unwrap();
        let seqs: Vec<i64> = history.iter().map(|m| m.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(history[0].sender, "alice");
        assert_eq!(history[1].sender, "bob");

        let row = db.get_conversation(&convo.id).unwrap().unwrap();
        assert_eq!(row.message_count, 3);
    }

    #[test]
    fn append_to_unknown_conversation_is_not_found() {
        let db = db();
        let err = db.append_message("no-such-id", "alice", "hi").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn conversations_are_isolated() {
        let db = db();
        db.register_user("carol", "pw").unwrap();

        let ab = db.resolve_conversation("alice", "bob").unwrap();
        let ac = db.resolve_conversation("alice", "carol").unwrap();
        assert_ne!(ab.id, ac.id);

        db.append_message(&ab.id, "alice", "to bob").unwrap();
        assert_eq!(db.append_message(&ac.id, "alice", "to carol").unwrap(), 1);
        assert_eq!(db.get_history(&ab.id).unwrap().len(), 1);
    }

    #[test]
    fn concurrent_appends_never_collide() {
        let db = Arc::new(db());
        let convo = db.resolve_conversation("alice", "bob").unwrap();

        let handles: Vec<_> = ["alice", "bob"]
            .into_iter()
            .map(|sender| {
                let db = Arc::clone(&db);
                let id = convo.id.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        db.append_message(&id, sender, &format!("msg {i}")).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let seqs: Vec<i64> = db
            .get_history(&convo.id)
            .unwrap()
            .iter()
            .map(|m| m.seq)
            .collect();
        assert_eq!(seqs, (1..=100).collect::<Vec<i64>>());
    }
}
