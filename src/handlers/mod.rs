pub mod commands;
pub mod members;
pub mod messages;
pub mod utils;

pub use commands::command_handler;
pub use members::new_members_handler;
pub use messages::message_handler;
