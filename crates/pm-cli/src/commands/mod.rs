pub mod browse;
pub mod categories;
pub mod digest;
pub mod dispatch;
pub mod duplicates;
pub mod list;
pub mod schema;
pub mod shared;
pub mod show;
pub mod trending;
