use actix::prelude::*;

use actors::DbExecutor;
use error::Result;
use models::{Account, AccountData};

#[derive(Debug)]
pub struct Insert(pub AccountData);

impl Message for Insert {
    type Result = Result<Account>;
}

impl Handler<Insert> for DbExecutor {
    type Result = Result<Account>;

    fn handle(&mut self, msg: Insert, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get()?;

        let mut account = Account::new(msg.0);
        account.create(conn)?;
        debug!("account insert res: {:?}", account);

        Ok(account)
    }
}
