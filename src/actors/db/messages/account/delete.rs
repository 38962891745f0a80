use actix::prelude::*;

use actors::DbExecutor;
use error::Result;
use models::Account;

/// Removes the stored row. The account is handed back with its id intact.
#[derive(Debug)]
pub struct Delete(pub Account);

impl Message for Delete {
    type Result = Result<Account>;
}

impl Handler<Delete> for DbExecutor {
    type Result = Result<Account>;

    fn handle(&mut self, msg: Delete, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get()?;
        msg.0.delete(conn)?;
        Ok(msg.0)
    }
}
