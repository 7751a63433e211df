mod skeleton;
mod suite;
mod test_case;

pub use skeleton::{SUITE_TEMPLATE, TEST_CASE_TEMPLATE};
pub use suite::{merge, SuiteDocument};
pub use test_case::{assemble, TestCaseSkeleton};
