//! Offline credential migration: rewrites `users.csv` with argon2 hashes
//! in place of plain-text passwords. Run once, with the server stopped.
//! A timestamped backup is written first; there is no partial-write
//! recovery, so re-run after any failure.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use minerals_portal::{
    auth::password::{hash_password, is_hashed},
    db::{CsvStore, User},
};

fn main() -> Result<()> {
    let data_dir = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DATA_DIR").ok())
        .unwrap_or_else(|| "data".to_string());
    let data_dir = PathBuf::from(data_dir);

    let store = CsvStore::new(&data_dir);
    let users_file = store.table_path::<User>();
    if !users_file.is_file() {
        bail!("{} not found", users_file.display());
    }

    println!("This rewrites {} with hashed passwords.", users_file.display());
    println!("Do NOT run this while the server is live.");
    print!("Proceed? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    if !matches!(answer.trim(), "y" | "Y") {
        println!("Aborted, nothing written.");
        return Ok(());
    }

    let users = store
        .load_all_strict::<User>()
        .context("users table must be fully readable before rewriting")?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup_file = data_dir.join(format!("users_backup_{stamp}.csv"));
    std::fs::copy(&users_file, &backup_file)
        .with_context(|| format!("writing backup {}", backup_file.display()))?;
    println!("Backup written to {}", backup_file.display());

    let mut writer = csv::Writer::from_path(&users_file)
        .with_context(|| format!("rewriting {}", users_file.display()))?;

    let mut hashed = 0usize;
    for mut user in users {
        if is_hashed(&user.password_hash) {
            println!("  - {}: already hashed, left as is", user.username);
        } else {
            user.password_hash = hash_password(&user.password_hash)
                .with_context(|| format!("hashing password for {}", user.username))?;
            println!("  - {}: password hashed", user.username);
            hashed += 1;
        }
        writer.serialize(&user)?;
    }
    writer.flush()?;

    println!("Done: {hashed} password(s) hashed.");
    Ok(())
}
