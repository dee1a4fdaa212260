//! Commands module - lifecycle operations for the SAML provider custom resource

mod dispatch;
mod lifecycle;
pub(crate) mod service;

pub use dispatch::handle_event;
pub use service::LifecycleHandler;
