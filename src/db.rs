use diesel::{self, prelude::*};

use error::Result;

const ACCOUNT_TABLE: &str = include_str!("../sql/account.sql");

/// Creates the tables the models are mapped to. Safe to call on an initialized database.
pub fn init_db(conn: &PgConnection) -> Result<()> {
    debug!("Creating account table");
    diesel::sql_query(ACCOUNT_TABLE).execute(conn)?;
    Ok(())
}
