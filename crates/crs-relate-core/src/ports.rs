//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

pub mod processor;
pub mod resolver;

pub use processor::Processor;
pub use resolver::AreaOfUseResolver;
