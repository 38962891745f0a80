use accounts;

use shared;

#[test]
fn builds_pool_from_settings() {
    let _ = shared::build_pool();

    let pool = accounts::build_pool_from_settings().expect("Failed to build pool");
    let settings = accounts::settings::read().expect("Failed to read settings");
    assert_eq!(pool.max_size(), settings.pool_size);
    assert!(!settings.database_url.is_empty());
}
