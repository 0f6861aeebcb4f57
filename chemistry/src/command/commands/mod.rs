pub mod cmd_help;
pub mod cmd_reload;
