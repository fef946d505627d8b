pub mod context;
pub mod countries;
pub mod query;

pub use context::HandlerContext;
