// Presentation layer: renders the catalog and the cart, turns typed commands into store calls.

pub mod command;
pub mod screen;
pub mod session;
