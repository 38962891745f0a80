use accounts::error::Error;
use accounts::models::Account;
use diesel;

use shared::{self, create_account, ACCOUNT_DATA};

#[test]
fn updates_an_account() {
    let pool = shared::build_pool();
    let conn = get_conn!(pool);
    shared::before_each(&conn);

    let mut account = create_account(&conn, &ACCOUNT_DATA[0]);
    account.name = "Updated Name".to_owned();
    account.email = "updated@example.com".to_owned();
    account.update(&conn).unwrap();

    let updated = Account::find(&conn, account.id().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Updated Name");
    assert_eq!(updated.email, "updated@example.com");
    assert_eq!(updated.phone_number, ACCOUNT_DATA[0].phone_number);
    assert_eq!(updated.date_joined, ACCOUNT_DATA[0].date_joined);
}

#[test]
fn update_without_id_is_rejected() {
    let pool = shared::build_pool();
    let conn = get_conn!(pool);
    shared::before_each(&conn);

    let account = Account::new(ACCOUNT_DATA[0].clone());

    let err = account.update(&conn).unwrap_err();
    assert_eq!(err.to_string(), "Update called with empty ID field");
    match err {
        Error::DataValidation(_) => {}
        e => panic!("unexpected error: {:?}", e),
    }
}

#[test]
fn update_clears_phone_number() {
    let pool = shared::build_pool();
    let conn = get_conn!(pool);
    shared::before_each(&conn);

    let mut account = create_account(&conn, &ACCOUNT_DATA[1]);
    account.phone_number = None;
    account.disabled = !account.disabled;
    account.update(&conn).unwrap();

    let updated = Account::find(&conn, account.id().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(updated, account);
}

#[test]
fn update_of_deleted_account_is_not_found() {
    let pool = shared::build_pool();
    let conn = get_conn!(pool);
    shared::before_each(&conn);

    let account = create_account(&conn, &ACCOUNT_DATA[2]);
    account.delete(&conn).unwrap();

    match account.update(&conn) {
        Err(Error::Db(diesel::result::Error::NotFound)) => {}
        res => panic!("unexpected result: {:?}", res),
    }
}
