//! Files written by the generator.


pub use header_test::{HeaderTest, LICENSE_BANNER, header_test_file_name};
