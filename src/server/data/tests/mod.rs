use mintgate_test_utils::prelude::*;
