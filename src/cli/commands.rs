pub mod initdb;
pub mod seed;
pub mod serve;

pub use initdb::init_database;
pub use seed::seed_lunches;
pub use serve::serve;
