use campus_types::Error;

use crate::App;

impl App {
    pub fn add_todo(&self, username: &str, task: &str) -> Result<(), Error> {
        let task = task.trim();
        if task.is_empty() {
            return Err(Error::Validation("todo text is required".into()));
        }
        if !self.db.user_exists(username)? {
            return Err(Error::not_found("user", username));
        }
        self.db.add_todo(username, task)
    }

    pub fn remove_todo(&self, username: &str, task: &str) -> Result<(), Error> {
        self.db.remove_todo(username, task.trim())
    }

    pub fn list_todos(&self, username: &str) -> Result<Vec<String>, Error> {
        if !self.db.user_exists(username)? {
            return Err(Error::not_found("user", username));
        }
        self.db.list_todos(username)
    }
}
