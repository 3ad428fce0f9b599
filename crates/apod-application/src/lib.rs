//! Application layer: drives date selection through the record store and
//! the remote service.

pub mod observer;
pub mod resolver;

pub use observer::ChannelObserver;
pub use resolver::Resolver;
