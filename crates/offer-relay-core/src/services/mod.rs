/// External collaborators and configuration loading
pub mod config;
pub mod s3;
pub mod sendgrid;

// Re-export service traits
pub use config::load_config;
pub use s3::ObjectStore;
pub use sendgrid::MailTransport;
