// Bootstrap an admin account
//
// Usage: create-admin <username> <email> <password>
// Reads DATABASE_URL from the environment. Safe to re-run; refuses to
// overwrite an existing username.

use anyhow::{bail, Context, Result};
use seatline_storage::{models::CreateUser, password, Database};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        bail!("usage: create-admin <username> <email> <password>");
    }
    let (username, email, pass) = (&args[1], &args[2], &args[3]);

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url).await?;
    db.migrate().await?;

    if db.get_user_by_username(username).await?.is_some() {
        bail!("user '{}' already exists", username);
    }

    let user = db
        .create_user(CreateUser {
            username: username.clone(),
            email: email.clone(),
            password_hash: password::hash_password(pass)?,
            role: "admin".to_string(),
        })
        .await?;

    println!("created admin user {} ({})", user.username, user.id);
    Ok(())
}
