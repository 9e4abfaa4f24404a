use anyhow::{Context, Result};
use tracing::info;

use campus_db::Database;
use campus_service::{App, config::Config};

const USAGE: &str = "\
usage: campus <command>

  init                                 create schema, seed guides, create admin
  guide list                           print the guide catalog as JSON
  guide add <code> <name> <description>
  guide remove <code>
  user remove <username>
  user mute <username>

Environment: CAMPUS_DB_PATH, CAMPUS_ADMIN_USER, CAMPUS_ADMIN_PASSWORD
(a .env file is honoured).";

fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus=info".into()),
        )
        .init();

    let config = Config::from_env();
    let db = Database::open(&config.db_path)?;
    let app = App::new(db);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();

    match argv.as_slice() {
        ["init"] => init(&app, &config),
        ["guide", "list"] => {
            let guides = app.list_guides()?;
            println!("{}", serde_json::to_string_pretty(&guides)?);
            Ok(())
        }
        ["guide", "add", code, name, description] => {
            app.add_guide(&config.admin_user, code, name, description)?;
            info!("guide {} added", code);
            Ok(())
        }
        ["guide", "remove", code] => {
            app.remove_guide(&config.admin_user, code)?;
            info!("guide {} removed", code);
            Ok(())
        }
        ["user", "remove", username] => {
            app.remove_user(&config.admin_user, username)?;
            Ok(())
        }
        ["user", "mute", username] => {
            app.mute_user(&config.admin_user, username)?;
            Ok(())
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}

fn init(app: &App, config: &Config) -> Result<()> {
    let password = config
        .admin_password
        .as_deref()
        .context("CAMPUS_ADMIN_PASSWORD must be set for init")?;

    let created = app.bootstrap(&config.admin_user, password)?;
    if created {
        info!("administrator {} created", config.admin_user);
    } else {
        info!("administrator {} already present, left unchanged", config.admin_user);
    }
    Ok(())
}
