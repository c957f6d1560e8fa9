pub use board::*;
pub use errors::*;
pub use policy::*;
pub use protocol_types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod policy;
mod protocol_types;
mod visualization;
