#[cfg(test)]
pub mod call_log;
pub mod logging;
pub mod panic;
