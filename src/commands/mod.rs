pub mod list;
pub mod update_local;
pub mod update_remote;

pub use list::handle_list_command;
pub use update_local::handle_update_local_command;
pub use update_remote::handle_update_remote_command;
