//! End-to-end walkthrough of the whole service surface against an
//! in-memory database.

use campus_db::Database;
use campus_service::App;
use campus_types::api::{LoginOutcome, LoginRejection, RegisterOutcome, RegisterRejection};

#[test]
fn full_user_journey() {
    let app = App::new(Database::open_in_memory().unwrap());
    app.bootstrap("admin", "hunter2").unwrap();

    // Registration
    let outcome = app.register("alice", "pw1", "pw1").unwrap();
    assert!(matches!(outcome, RegisterOutcome::Welcome { ref username } if username == "alice"));

    let outcome = app.register("alice", "pw1", "pw1").unwrap();
    assert!(matches!(
        outcome,
        RegisterOutcome::Rejected {
            reason: RegisterRejection::UserExists
        }
    ));

    app.register("bob", "pw2", "pw2").unwrap();

    // Login
    assert!(matches!(
        app.login("alice", "wrong").unwrap(),
        LoginOutcome::Rejected {
            reason: LoginRejection::IncorrectPassword
        }
    ));
    assert!(matches!(
        app.login("nobody", "pw").unwrap(),
        LoginOutcome::Rejected {
            reason: LoginRejection::UnknownUser
        }
    ));

    // Friends
    app.add_friend("alice", "bob").unwrap();
    assert_eq!(app.list_friends("alice").unwrap(), vec!["bob"]);

    // Chat, both directions, one conversation
    app.send_message("alice", "bob", "hi").unwrap();
    let view = app.send_message("bob", "alice", "yo").unwrap();
    let lines: Vec<(i64, &str, &str)> = view
        .messages
        .iter()
        .map(|l| (l.seq, l.sender.as_str(), l.body.as_str()))
        .collect();
    assert_eq!(lines, vec![(1, "alice", "hi"), (2, "bob", "yo")]);

    // Todos, duplicate collapses
    app.add_todo("alice", "buy milk").unwrap();
    app.add_todo("alice", "buy milk").unwrap();
    assert_eq!(app.list_todos("alice").unwrap(), vec!["buy milk"]);

    // Guide catalog round trip
    app.add_guide("admin", "COMP9001", "Advanced Yak Shaving", "electives")
        .unwrap();
    assert!(
        app.list_guides()
            .unwrap()
            .iter()
            .any(|g| g.course_code == "COMP9001")
    );
    app.remove_guide("admin", "COMP9001").unwrap();
    assert!(
        !app.list_guides()
            .unwrap()
            .iter()
            .any(|g| g.course_code == "COMP9001")
    );

    // Dashboard reflects all of it
    let LoginOutcome::Dashboard(dash) = app.login("alice", "pw1").unwrap() else {
        panic!("expected a dashboard");
    };
    assert_eq!(dash.friends, vec!["bob"]);
    assert_eq!(dash.todos, vec!["buy milk"]);
    assert_eq!(dash.guides.len(), 4); // starter catalog

    // Administration
    app.mute_user("admin", "bob").unwrap();
    assert!(app.list_friends("alice").unwrap().is_empty());

    app.remove_user("admin", "bob").unwrap();
    assert!(matches!(
        app.login("bob", "pw2").unwrap(),
        LoginOutcome::Rejected {
            reason: LoginRejection::UnknownUser
        }
    ));
}
