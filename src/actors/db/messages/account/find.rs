use actix::prelude::*;

use actors::DbExecutor;
use error::Result;
use models::Account;

#[derive(Debug)]
pub struct Find(pub i32);

impl Message for Find {
    type Result = Result<Option<Account>>;
}

impl Handler<Find> for DbExecutor {
    type Result = Result<Option<Account>>;

    fn handle(&mut self, msg: Find, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get()?;
        Account::find(conn, msg.0)
    }
}
