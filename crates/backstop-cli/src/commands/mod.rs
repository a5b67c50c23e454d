// One module per subcommand
pub mod about;
pub mod deployments;
pub mod get;
pub mod list;
pub mod start;
