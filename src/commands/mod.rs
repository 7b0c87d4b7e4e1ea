pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod serve;
pub mod show;
pub mod stats;
pub mod status;
