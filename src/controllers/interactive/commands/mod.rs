pub mod view_command;
