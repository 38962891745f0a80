mod account;

pub mod prelude {
    pub use models::account::{today, Account, AccountData};
}

pub use self::prelude::*;
