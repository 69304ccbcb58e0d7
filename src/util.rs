#[cfg(test)]
pub use test_log::test_log;
