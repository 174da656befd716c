/// Dispatch to the bun entrypoint - Gateway
mod dispatcher;
mod invocation;

pub use dispatcher::{launch, Dispatcher, LaunchPlan};
pub use invocation::{exit_code_of, ChildInvocation};
