pub mod dispatch;
pub mod evaluate;
pub mod profile;
pub mod schema;
