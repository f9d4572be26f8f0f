pub mod batch_loader;
pub mod resolve;
pub mod symbols;
