use actix::prelude::*;

use actors::DbExecutor;
use error::Result;
use models::Account;

#[derive(Debug)]
pub struct Update(pub Account);

impl Message for Update {
    type Result = Result<Account>;
}

impl Handler<Update> for DbExecutor {
    type Result = Result<Account>;

    fn handle(&mut self, msg: Update, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get()?;
        msg.0.update(conn)?;
        Ok(msg.0)
    }
}
