use tracing::info;

use campus_types::Error;
use campus_types::models::Role;

use crate::App;

impl App {
    /// One-time setup: create the administrator account and seed the
    /// starter guide catalog. Safe to run again; existing state wins.
    pub fn bootstrap(&self, admin_user: &str, admin_password: &str) -> Result<bool, Error> {
        let created = self.db.ensure_admin(admin_user, admin_password)?;
        self.db.seed_starter_guides()?;
        Ok(created)
    }

    /// Delete an account. Friend edges and todos go with it; conversations
    /// and message history stay behind.
    pub fn remove_user(&self, actor: &str, username: &str) -> Result<(), Error> {
        self.require_admin(actor)?;
        self.db.delete_user(username)?;
        info!("{} removed user {}", actor, username);
        Ok(())
    }

    /// Fully disconnect a user from the friend graph, both directions.
    /// Distinct from `remove_friend`: this severs every edge that touches
    /// the user, not one.
    pub fn mute_user(&self, actor: &str, username: &str) -> Result<(), Error> {
        self.require_admin(actor)?;
        if !self.db.user_exists(username)? {
            return Err(Error::not_found("user", username));
        }
        self.db.disconnect_user(username)?;
        info!("{} muted user {}", actor, username);
        Ok(())
    }

    /// Authority comes from the stored role flag, never from the shape of
    /// the username.
    pub(crate) fn require_admin(&self, actor: &str) -> Result<(), Error> {
        let row = self
            .db
            .get_user(actor)?
            .ok_or_else(|| Error::not_found("user", actor))?;

        if !Role::from_admin_flag(row.admin).is_admin() {
            return Err(Error::Forbidden(format!(
                "{actor} is not an administrator"
            )));
        }
        Ok(())
    }
}
