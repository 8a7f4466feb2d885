//! Placeholder values used when wiring services to the test harness.

/// Ticker the test collections are deployed under.
pub static TEST_TICKER: &str = "B1T";

/// Node RPC user expected by the mock node server. Not a real credential.
pub static TEST_RPC_USER: &str = "rpc_user";

/// Node RPC password expected by the mock node server. Not a real credential.
pub static TEST_RPC_PASSWORD: &str = "rpc_password";
