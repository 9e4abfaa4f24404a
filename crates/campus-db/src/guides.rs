use rusqlite::OptionalExtension;
use tracing::info;

use campus_types::Error;

use crate::models::GuideRow;
use crate::{Database, is_unique_violation};

/// The starter catalog, seeded once at setup.
const STARTER_GUIDES: [(&str, &str, &str); 4] = [
    (
        "INFO1110",
        "Intro to Programming",
        "This course is an introduction to computer science. It covers the basics of programming in Python.",
    ),
    (
        "INFO1113",
        "Object-Oriented Programming",
        "This course is an introduction to computer science. It covers the basics of programming in Java.",
    ),
    (
        "COMP2123",
        "Data Structures and Algorithms",
        "This course is an introduction to data structures and algorithms. It covers the basics of data structures and algorithms.",
    ),
    (
        "COMP2017",
        "Systems Programming",
        "This course is an introduction to operating systems and machine principles. It covers the basics of operating systems and machine principles.",
    ),
];

impl Database {
    /// `Conflict` if the course code is already in the catalog.
    pub fn add_guide(&self, code: &str, name: &str, description: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            match conn.execute(
                "INSERT INTO guides (course_code, course_name, description) VALUES (?1, ?2, ?3)",
                (code, name, description),
            ) {
                Ok(_) => Ok(()),
                Err(e) if is_unique_violation(&e) => Err(Error::conflict("guide", code)),
                Err(e) => Err(e.into()),
            }
        })
    }

    /// Delete by course code; no-op when absent.
    pub fn remove_guide(&self, code: &str) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            conn.execute("DELETE FROM guides WHERE course_code = ?1", [code])?;
            Ok(())
        })
    }

    pub fn get_guide(&self, code: &str) -> Result<Option<GuideRow>, Error> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT course_code, course_name, description FROM guides WHERE course_code = ?1",
                [code],
                map_guide,
            )
            .optional()
            .map_err(Error::from)
        })
    }

    /// Full catalog, ordered by course code.
    pub fn list_guides(&self) -> Result<Vec<GuideRow>, Error> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT course_code, course_name, description FROM guides ORDER BY course_code",
            )?;
            let rows = stmt
                .query_map([], map_guide)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// One-time catalog seed; safe to call again, existing rows win.
    pub fn seed_starter_guides(&self) -> Result<(), Error> {
        self.with_conn_mut(|conn| {
            let mut stmt = conn.prepare(
                "INSERT OR IGNORE INTO guides (course_code, course_name, description) VALUES (?1, ?2, ?3)",
            )?;
            for (code, name, description) in STARTER_GUIDES {
                stmt.execute((code, name, description))?;
            }
            Ok(())
        })?;
        info!("starter guides seeded");
        Ok(())
    }
}

fn map_guide(row: &rusqlite::Row<'_>) -> rusqlite::Result<GuideRow> {
    Ok(GuideRow {
        course_code: row.get(0)?,
        course_name: row.get(1)?,
        description: row.get(2)?,
    })
}
