//! Campus facts and the system context they render into.

pub mod context;

pub use context::CampusInfo;
