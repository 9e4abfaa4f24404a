use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use rusqlite::OptionalExtension;
use tracing::{debug, info};

use campus_types::Error;

use crate::models::UserRow;
use crate::{Database, is_unique_violation};

impl Database {
    /// Create a user with a fresh Argon2id hash. `Conflict` if the username
    /// is already taken — the existing row is left untouched.
    pub fn register_user(&self, username: &str, password: &str) -> Result<(), Error> {
        let hash = hash_password(password)?;

        self.with_conn_mut(|conn| {
            match conn.execute(
                "INSERT INTO users (username, password) VALUES (?1, ?2)",
                (username, &hash),
            ) {
                Ok(_) => {
                    debug!("registered user {}", username);
                    Ok(())
                }
                Err(e) if is_unique_violation(&e) => Err(Error::conflict("user", username)),
                Err(e) => Err(e.into()),
            }
        })
    }

    /// Check a password against the stored hash. `NotFound` for an unknown
    /// username; otherwise whether the password matched. The stored hash is
    /// never returned and never compared as a plain string.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<bool, Error> {
        let stored: Option<String> = self.with_conn(|conn| {
            conn.query_row(
                "SELECT password FROM users WHERE username = ?1",
                [username],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
        })?;

        let stored = stored.ok_or_else(|| Error::not_found("user", username))?;

        let parsed = PasswordHash::new(&stored)
            .map_err(|e| Error::Storage(format!("stored hash for {username} is corrupt: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(Error::Storage(format!("password verification: {e}"))),
        }
    }

    pub fn get_user(&self, username: &str) -> Result<Option<UserRow>, Error> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT username, admin, created_at FROM users WHERE username = ?1",
                [username],
                |row| {
                    Ok(UserRow {
                        username: row.get(0)?,
                        admin: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Error::from)
        })
    }

    pub fn user_exists(&self, username: &str) -> Result<bool, Error> {
        Ok(self.get_user(username)?.is_some())
    }

    /// Bootstrap the administrator account. Returns true if the account was
    /// created, false if it already existed (the stored password is then
    /// left as is).
    pub fn ensure_admin(&self, username: &str, password: &str) -> Result<bool, Error> {
        let hash = hash_password(password)?;

        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO users (username, password, admin) VALUES (?1, ?2, 1)",
                (username, &hash),
            )?;
            if changed > 0 {
                info!("created administrator account {}", username);
            }
            Ok(changed > 0)
        })
    }

    /// Remove a user together with their friend edges (both directions) and
    /// todos, in one transaction. Conversations and messages are retained as
    /// an audit trail. `NotFound` if no such user.
    pub fn delete_user(&self, username: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            tx.execute(
                "DELETE FROM friends WHERE owner = ?1 OR friend = ?1",
                [username],
            )?;
            tx.execute("DELETE FROM todos WHERE username = ?1", [username])?;
            let removed = tx.execute("DELETE FROM users WHERE username = ?1", [username])?;

            if removed == 0 {
                return Err(Error::not_found("user", username));
            }

            tx.commit()?;
            info!("removed user {}", username);
            Ok(())
        })
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Storage(format!("password hashing: {e}")))?
        .to_string())
}
