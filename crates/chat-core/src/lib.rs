pub mod event_bus;
pub mod gateway;
pub mod ports;
pub mod session;
