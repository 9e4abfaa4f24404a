use campus_types::Error;

use crate::App;

impl App {
    /// Add a directed friend edge. Idempotent; the friend must be a real
    /// user and may not be the owner themselves.
    pub fn add_friend(&self, owner: &str, friend: &str) -> Result<(), Error> {
        if owner == friend {
            return Err(Error::Validation(
                "cannot add yourself as a friend".into(),
            ));
        }
        for name in [owner, friend] {
            if !self.db.user_exists(name)? {
                return Err(Error::not_found("user", name));
            }
        }
        self.db.add_friend(owner, friend)
    }

    /// Drop a single edge; no-op when it does not exist.
    pub fn remove_friend(&self, owner: &str, friend: &str) -> Result<(), Error> {
        self.db.remove_friend(owner, friend)
    }

    pub fn list_friends(&self, owner: &str) -> Result<Vec<String>, Error> {
        if !self.db.user_exists(owner)? {
            return Err(Error::not_found("user", owner));
        }
        self.db.list_friends(owner)
    }
}
