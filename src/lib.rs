#![deny(missing_debug_implementations)]

extern crate actix;
extern crate chrono;
extern crate config;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num_cpus;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;
#[cfg(test)]
#[macro_use]
extern crate serde_json;

use actix::prelude::*;
use diesel::{r2d2, PgConnection};

use actors::DbExecutor;
use error::Result;

pub mod actors;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;
pub mod settings;

pub type DbPool = r2d2::Pool<r2d2::ConnectionManager<PgConnection>>;

#[allow(missing_debug_implementations)]
pub struct AppState {
    pub db: Addr<DbExecutor>,
}

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = r2d2::ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().max_size(max_size).build(manager)?;
    Ok(pool)
}

pub fn build_pool_from_settings() -> Result<DbPool> {
    let settings = settings::read()?;
    build_pool(&settings.database_url, settings.pool_size)
}

/// Starts the database executor. Has to be called from within a running actix `System`.
pub fn build_app_state(pool: DbPool) -> AppState {
    let threads = num_cpus::get();
    info!("Starting {} database executor threads", threads);

    let addr = SyncArbiter::start(threads, move || DbExecutor(pool.clone()));

    AppState { db: addr }
}
