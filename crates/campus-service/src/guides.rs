use campus_types::Error;
use campus_types::models::Guide;

use crate::App;

impl App {
    /// The full catalog, visible to everyone.
    pub fn list_guides(&self) -> Result<Vec<Guide>, Error> {
        Ok(self
            .db
            .list_guides()?
            .into_iter()
            .map(|g| Guide {
                course_code: g.course_code,
                course_name: g.course_name,
                description: g.description,
            })
            .collect())
    }

    /// Admin-only. `Conflict` when the course code is already listed.
    pub fn add_guide(
        &self,
        actor: &str,
        code: &str,
        name: &str,
        description: &str,
    ) -> Result<(), Error> {
        self.require_admin(actor)?;

        let code = code.trim();
        if code.is_empty() || name.trim().is_empty() {
            return Err(Error::Validation(
                "course code and name are required".into(),
            ));
        }
        self.db.add_guide(code, name.trim(), description)
    }

    /// Admin-only. No-op when the code is not in the catalog.
    pub fn remove_guide(&self, actor: &str, code: &str) -> Result<(), Error> {
        self.require_admin(actor)?;
        self.db.remove_guide(code.trim())
    }
}
