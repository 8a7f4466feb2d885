pub mod constructor;
pub mod test_utils;
