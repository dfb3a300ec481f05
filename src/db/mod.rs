pub mod connection;
pub mod view_state;

pub use connection::{init_db, Database};
