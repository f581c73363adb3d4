pub mod area;
pub mod input;
pub mod process;
pub mod record;

pub use area::AreaOfUse;
pub use input::{ProcessInputs, WktInput};
pub use process::{
    ExampleInput, ExampleRequest, InputDescriptor, Link, LiteralDataDomain, LiteralInput,
    OutputDescriptor, OutputFormat, OutputFormats, ProcessMetadata, ValueDefinition, DEFAULT_CRS,
    DEFAULT_WKT, PROCESS_ID, PROCESS_VERSION,
};
pub use record::{RelationRecord, DE9IM_OUTPUT_ID};
