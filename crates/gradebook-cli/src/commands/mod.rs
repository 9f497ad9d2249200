pub mod init;
pub mod menu;
