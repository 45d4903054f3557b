//! Command line glue around the resolver

pub mod orchestration;

pub use orchestration::{run_resolve_workflow, ResolveWorkflowArgs, WorkflowResult};
