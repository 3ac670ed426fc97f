mod collection;
mod command;
mod input;
mod query;
mod record;
pub mod schema;

pub use collection::Collection;
pub use command::Command;
pub use input::{FormData, Input, parse};
pub use query::{ListQuery, Query, SortBy};
pub use record::{Record, ResultItem, Value};
