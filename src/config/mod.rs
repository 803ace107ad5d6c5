mod database;
mod hashing;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, init_schema};
pub use self::hashing::Hashing;
pub use self::myconfig::Config;
