use actix;
use diesel;
use diesel::r2d2::PoolError;
use diesel::result::DatabaseErrorKind;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    DataValidation(String),

    #[fail(display = "{}", _0)]
    Db(#[cause] diesel::result::Error),

    #[fail(display = "{}", _0)]
    Pool(#[cause] PoolError),

    #[fail(display = "{}", _0)]
    ActorMailbox(#[cause] actix::MailboxError),

    #[fail(display = "Settings lock is poisoned")]
    SettingsLock,
}

impl Error {
    pub fn data_validation<S: Into<String>>(message: S) -> Self {
        Error::DataValidation(message.into())
    }
}

impl From<diesel::result::Error> for Error {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(ref kind, ref info) if is_data_error(kind) => {
                Error::DataValidation(info.message().to_owned())
            }
            e => Error::Db(e),
        }
    }
}

fn is_data_error(kind: &DatabaseErrorKind) -> bool {
    match *kind {
        DatabaseErrorKind::UniqueViolation
        | DatabaseErrorKind::ForeignKeyViolation
        | DatabaseErrorKind::__Unknown => true,
        _ => false,
    }
}

impl From<PoolError> for Error {
    fn from(e: PoolError) -> Self {
        Error::Pool(e)
    }
}

impl From<actix::MailboxError> for Error {
    fn from(e: actix::MailboxError) -> Self {
        Error::ActorMailbox(e)
    }
}
