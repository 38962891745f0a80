use actix::prelude::*;

use actors::DbExecutor;
use error::Result;
use models::Account;

#[derive(Debug)]
pub enum Select {
    All,
    ByName(String),
}

impl Message for Select {
    type Result = Result<Vec<Account>>;
}

impl Handler<Select> for DbExecutor {
    type Result = Result<Vec<Account>>;

    fn handle(&mut self, msg: Select, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get()?;
        match msg {
            Select::All => Account::all(conn),
            Select::ByName(ref name) => Account::find_by_name(conn, name),
        }
    }
}
