pub mod notifier;
pub mod recipient_directory;
pub mod transport;
