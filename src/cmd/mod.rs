pub mod layouts;
pub mod resolve;
