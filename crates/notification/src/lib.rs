mod channel;
mod contact;
mod dispatcher;
mod outcome;
mod service;
mod settle;
mod submission;

pub use channel::*;
pub use contact::*;
pub use dispatcher::*;
pub use outcome::*;
pub use service::*;
pub use settle::*;
pub use submission::*;
