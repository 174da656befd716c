/// Bun runtime discovery module - Gateway
mod locator;

pub use locator::{ExecutableSearch, RuntimeLocator, SystemSearch};

#[cfg(test)]
pub use locator::MockExecutableSearch;
