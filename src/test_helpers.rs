//! Fixture plumbing shared by unit and integration tests: seeds a fresh
//! data directory with small CSV tables and builds a router over it.

use std::{
    path::{Path, PathBuf},
    sync::{
        OnceLock,
        atomic::{AtomicU32, Ordering},
    },
};

use axum::Router;

use crate::{
    auth::password::hash_password,
    db::{CsvStore, User},
    routes::router,
    state::AppState,
};

pub const ALICE_PASSWORD: &str = "wonderland1";
pub const BOB_PASSWORD: &str = "builder99";
pub const TEST_SECRET: &[u8] = b"test-secret";

static DIR_SEQ: AtomicU32 = AtomicU32::new(0);
static ALICE_HASH: OnceLock<String> = OnceLock::new();
static BOB_HASH: OnceLock<String> = OnceLock::new();

/// Creates a unique directory populated with all six tables. Each call
/// gets its own copy so tests can mutate files freely.
pub fn seed_data_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "minerals_portal_fixture_{}_{}",
        std::process::id(),
        DIR_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).expect("create fixture dir");

    let alice = ALICE_HASH.get_or_init(|| hash_password(ALICE_PASSWORD).expect("hash"));
    let bob = BOB_HASH.get_or_init(|| hash_password(BOB_PASSWORD).expect("hash"));

    // PHC hashes carry commas, so the user table goes through csv::Writer
    // (which quotes) instead of a formatted string.
    write_users(
        &dir,
        &[
            User {
                user_id: 1,
                username: "alice".into(),
                password_hash: alice.clone(),
                role_id: 1,
                email: "alice@example.com".into(),
            },
            User {
                user_id: 2,
                username: "bob".into(),
                password_hash: bob.clone(),
                role_id: 2,
                email: "bob@example.com".into(),
            },
        ],
    );
    write(
        &dir,
        "roles.csv",
        "RoleID,RoleName,Permissions\n\
         1,Administrator,\"manage_users, view_reports, view_analytics\"\n\
         2,Investor,view_reports\n",
    );
    write(
        &dir,
        "countries.csv",
        "CountryID,CountryName,GDP_BillionUSD,MiningRevenue_BillionUSD,KeyProjects\n\
         1,South Africa,405.0,24.3,Bushveld Complex PGMs\n\
         2,DR Congo,64.0,16.0,Kamoa-Kakula copper\n\
         3,Zimbabwe,27.0,2.7,Great Dyke lithium\n",
    );
    write(
        &dir,
        "minerals.csv",
        "MineralID,MineralName,Description,MarketPriceUSD_per_tonne\n\
         1,Platinum,Autocatalyst and jewellery metal,30500000.0\n\
         2,Cobalt,Battery cathode metal,33000.0\n\
         3,Lithium,Battery metal,14500.0\n",
    );
    write(
        &dir,
        "production_stats.csv",
        "StatID,Year,CountryID,MineralID,Production_tonnes,ExportValue_BillionUSD\n\
         1,2021,1,1,100,3.1\n\
         2,2021,2,1,50,1.5\n\
         3,2022,1,1,30,0.9\n\
         4,2022,3,3,1200,0.4\n",
    );
    write(
        &dir,
        "sites.csv",
        "SiteID,SiteName,CountryID,MineralID,Latitude,Longitude,Production_tonnes\n\
         1,Mogalakwena,1,1,-24.0,28.9,45\n\
         2,Kamoa,2,1,-10.7,25.4,20\n\
         3,Bikita,3,3,-20.1,31.4,600\n\
         4,Orphan Pit,9,7,-15.0,20.0,5\n",
    );

    dir
}

fn write(dir: &Path, file: &str, contents: &str) {
    std::fs::write(dir.join(file), contents).expect("write fixture table");
}

fn write_users(dir: &Path, users: &[User]) {
    let mut writer = csv::Writer::from_path(dir.join("users.csv")).expect("open users table");
    for user in users {
        writer.serialize(user).expect("write user row");
    }
    writer.flush().expect("flush users table");
}

pub fn test_router(data_dir: &Path) -> Router {
    let state = AppState::new(TEST_SECRET, CsvStore::new(data_dir));
    router(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::is_hashed;

    // PHC strings contain commas (`m=19456,t=2,p=1`); a naive unquoted
    // write would split each user row into extra fields and every row
    // would be dropped as malformed at load time.
    #[test]
    fn seeded_users_survive_hash_commas() {
        let store = CsvStore::new(seed_data_dir());
        let users: Vec<User> = store.load_all();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].email, "alice@example.com");
        assert_eq!(users[1].username, "bob");
        for user in &users {
            assert!(user.password_hash.contains(','));
            assert!(is_hashed(&user.password_hash));
        }
    }
}
