use crate::error::Result;
use crate::models::{ProcessInputs, ProcessMetadata, RelationRecord};

/// A process a host can discover and execute.
pub trait Processor {
    /// Static description used for capability discovery
    fn metadata(&self) -> &ProcessMetadata;

    /// Run the process once. Inputs are consumed; no state is kept between calls.
    fn execute(&self, inputs: ProcessInputs) -> Result<Vec<RelationRecord>>;

    fn id(&self) -> &str {
        &self.metadata().id
    }
}
