extern crate accounts;
extern crate actix;
extern crate chrono;
extern crate diesel;
extern crate env_logger;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate pretty_assertions;
extern crate serde_json;


mod account;
mod settings;
