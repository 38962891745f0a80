use chrono::{NaiveDate, Utc};
use diesel::{self, prelude::*};

use std::fmt;

use error::{Error, Result};
use schema::account;

pub fn today() -> NaiveDate {
    Utc::now().naive_utc().date()
}

/// Plain field mapping of an account.
///
/// Used both to construct an `Account` and as the result of `Account::to_dict`.
/// Unknown keys are rejected when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default = "today")]
    pub date_joined: NaiveDate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub disabled: bool,
    pub date_joined: NaiveDate,
}

#[derive(Queryable, Debug)]
struct AccountRow {
    id: i32,
    name: String,
    email: String,
    phone_number: Option<String>,
    disabled: bool,
    date_joined: NaiveDate,
}

#[derive(AsChangeset, Insertable, Debug)]
#[table_name = "account"]
#[changeset_options(treat_none_as_null = "true")]
struct NewAccount<'a> {
    name: &'a str,
    email: &'a str,
    phone_number: Option<&'a str>,
    disabled: bool,
    date_joined: NaiveDate,
}

impl<'a> From<&'a Account> for NewAccount<'a> {
    fn from(account: &'a Account) -> Self {
        NewAccount {
            name: &account.name,
            email: &account.email,
            phone_number: account.phone_number.as_ref().map(String::as_str),
            disabled: account.disabled,
            date_joined: account.date_joined,
        }
    }
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: Some(row.id),
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            disabled: row.disabled,
            date_joined: row.date_joined,
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Account {
            id: None,
            name: String::new(),
            email: String::new(),
            phone_number: None,
            disabled: false,
            date_joined: today(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Account '{}'>", self.name)
    }
}

impl Account {
    /// Builds an unsaved account. The primary key is only ever assigned by `create`.
    pub fn new(data: AccountData) -> Self {
        let mut account = Account::default();
        account.from_dict(data);
        account
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn create(&mut self, conn: &PgConnection) -> Result<()> {
        if self.id.is_some() {
            return Err(Error::data_validation("Create called with existing ID field"));
        }

        debug!("Creating {}", self);
        let id = diesel::insert_into(account::table)
            .values(NewAccount::from(&*self))
            .returning(account::id)
            .get_result::<i32>(conn)?;

        self.id = Some(id);
        Ok(())
    }

    pub fn update(&self, conn: &PgConnection) -> Result<()> {
        let id = self.persisted_id("Update")?;

        debug!("Updating {} with id = {}", self, id);
        diesel::update(account::table.find(id))
            .set(NewAccount::from(self))
            .returning(account::id)
            .get_result::<i32>(conn)?;

        Ok(())
    }

    pub fn delete(&self, conn: &PgConnection) -> Result<()> {
        let id = self.persisted_id("Delete")?;

        let deleted = diesel::delete(account::table.find(id)).execute(conn)?;
        debug!("Deleted {} with id = {} ({} rows)", self, id, deleted);

        Ok(())
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Account>> {
        let rows = account::table
            .order(account::id.asc())
            .load::<AccountRow>(conn)?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    pub fn find(conn: &PgConnection, id: i32) -> Result<Option<Account>> {
        debug!("Looking up account with id = {}", id);
        let row = account::table
            .find(id)
            .get_result::<AccountRow>(conn)
            .optional()?;

        Ok(row.map(Account::from))
    }

    pub fn find_by_name(conn: &PgConnection, name: &str) -> Result<Vec<Account>> {
        let rows = account::table
            .filter(account::name.eq(name))
            .order(account::id.asc())
            .load::<AccountRow>(conn)?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    pub fn remove_all(conn: &PgConnection) -> Result<usize> {
        let removed = diesel::delete(account::table).execute(conn)?;
        debug!("Removed {} accounts", removed);
        Ok(removed)
    }

    pub fn to_dict(&self) -> AccountData {
        AccountData {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            disabled: self.disabled,
            date_joined: self.date_joined,
        }
    }

    /// Assigns every field from `data` except the primary key.
    pub fn from_dict(&mut self, data: AccountData) {
        self.name = data.name;
        self.email = data.email;
        self.phone_number = data.phone_number;
        self.disabled = data.disabled;
        self.date_joined = data.date_joined;
    }

    fn persisted_id(&self, operation: &str) -> Result<i32> {
        self.id.ok_or_else(|| {
            Error::DataValidation(format!("{} called with empty ID field", operation))
        })
    }
}
