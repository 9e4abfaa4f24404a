use tracing::{info, warn};

use campus_types::Error;
use campus_types::api::{
    Dashboard, LoginOutcome, LoginRejection, RegisterOutcome, RegisterRejection,
};
use campus_types::models::{Guide, Role, User};

use crate::App;

impl App {
    /// Register a new account. The password/confirmation equality is a
    /// request-shape check and runs before the credential store is touched.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<RegisterOutcome, Error> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Ok(RegisterOutcome::Rejected {
                reason: RegisterRejection::MissingField,
            });
        }
        if password != confirm {
            return Ok(RegisterOutcome::Rejected {
                reason: RegisterRejection::PasswordMismatch,
            });
        }

        match self.db.register_user(username, password) {
            Ok(()) => {
                info!("registered {}", username);
                Ok(RegisterOutcome::Welcome {
                    username: username.to_string(),
                })
            }
            Err(e) if e.is_conflict() => Ok(RegisterOutcome::Rejected {
                reason: RegisterRejection::UserExists,
            }),
            Err(e) => Err(e),
        }
    }

    /// Verify credentials and, on success, assemble the dashboard. A storage
    /// fault propagates as `Err`; it is never flattened into a rejection or
    /// an empty dashboard.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, Error> {
        match self.db.verify_credentials(username, password) {
            Ok(true) => Ok(LoginOutcome::Dashboard(self.dashboard(username)?)),
            Ok(false) => {
                warn!("failed login for {}", username);
                Ok(LoginOutcome::Rejected {
                    reason: LoginRejection::IncorrectPassword,
                })
            }
            Err(e) if e.is_not_found() => Ok(LoginOutcome::Rejected {
                reason: LoginRejection::UnknownUser,
            }),
            Err(e) => Err(e),
        }
    }

    pub fn dashboard(&self, username: &str) -> Result<Dashboard, Error> {
        let row = self
            .db
            .get_user(username)?
            .ok_or_else(|| Error::not_found("user", username))?;

        let user = User {
            username: row.username,
            role: Role::from_admin_flag(row.admin),
            created_at: crate::parse_timestamp(&row.created_at),
        };
        let friends = self.db.list_friends(username)?;
        let todos = self.db.list_todos(username)?;
        let guides = self
            .db
            .list_guides()?
            .into_iter()
            .map(|g| Guide {
                course_code: g.course_code,
                course_name: g.course_name,
                description: g.description,
            })
            .collect();

        Ok(Dashboard {
            user,
            friends,
            todos,
            guides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_app;

    #[test]
    fn register_then_login() {
        let app = test_app();

        let outcome = app.register("alice", "pw1", "pw1").unwrap();
        assert!(matches!(outcome, RegisterOutcome::Welcome { ref username } if username == "alice"));

        let outcome = app.login("alice", "pw1").unwrap();
        let LoginOutcome::Dashboard(dash) = outcome else {
            panic!("expected a dashboard");
        };
        assert_eq!(dash.user.username, "alice");
        assert_eq!(dash.user.role, Role::Member);
    }

    #[test]
    fn mismatched_confirmation_never_reaches_storage() {
        let app = test_app();

        let outcome = app.register("alice", "pw1", "pw2").unwrap();
        assert!(matches!(
            outcome,
            RegisterOutcome::Rejected {
                reason: RegisterRejection::PasswordMismatch
            }
        ));

        // No half-registered account left behind
        assert!(matches!(
            app.login("alice", "pw1").unwrap(),
            LoginOutcome::Rejected {
                reason: LoginRejection::UnknownUser
            }
        ));
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let app = test_app();
        app.register("alice", "pw1", "pw1").unwrap();

        let outcome = app.register("alice", "pw2", "pw2").unwrap();
        assert!(matches!(
            outcome,
            RegisterOutcome::Rejected {
                reason: RegisterRejection::UserExists
            }
        ));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let app = test_app();
        let outcome = app.register("   ", "pw", "pw").unwrap();
        assert!(matches!(
            outcome,
            RegisterOutcome::Rejected {
                reason: RegisterRejection::MissingField
            }
        ));
    }

    #[test]
    fn wrong_password_is_a_rejection_not_an_error() {
        let app = test_app();
        app.register("alice", "pw1", "pw1").unwrap();

        assert!(matches!(
            app.login("alice", "wrong").unwrap(),
            LoginOutcome::Rejected {
                reason: LoginRejection::IncorrectPassword
            }
        ));
    }

    #[test]
    fn dashboard_carries_friends_todos_and_guides() {
        let app = test_app();
        app.register("alice", "pw", "pw").unwrap();
        app.register("bob", "pw", "pw").unwrap();
        app.add_friend("alice", "bob").unwrap();
        app.add_todo("alice", "buy milk").unwrap();

        let LoginOutcome::Dashboard(dash) = app.login("alice", "pw").unwrap() else {
            panic!("expected a dashboard");
        };
        assert_eq!(dash.friends, vec!["bob"]);
        assert_eq!(dash.todos, vec!["buy milk"]);
        assert!(dash.guides.is_empty());
    }
}
