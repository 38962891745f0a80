use config::{Config, Environment, File};
use failure;

use std::sync::{RwLock, RwLockReadGuard};

use error::{Error, Result};

lazy_static! {
    #[allow(missing_debug_implementations)]
    pub static ref SETTINGS: RwLock<Settings> = RwLock::new(Settings::default());
}

pub fn read() -> Result<RwLockReadGuard<'static, Settings>> {
    SETTINGS.read().map_err(|_| Error::SettingsLock)
}

pub fn init() -> ::std::result::Result<(), failure::Error> {
    debug!("Initializing settings");

    let mut c = Config::new();
    c.merge(File::with_name("Settings").required(false))?;
    c.merge(Environment::new())?;
    let loaded = c.try_into::<Settings>()?;

    let mut settings = SETTINGS.write().map_err(|_| Error::SettingsLock)?;
    *settings = loaded;

    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database_url: String,
    #[serde(default = "Settings::default_pool_size")]
    pub pool_size: u32,
}

impl Settings {
    pub fn default_pool_size() -> u32 {
        4
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: String::new(),
            pool_size: Settings::default_pool_size(),
        }
    }
}
