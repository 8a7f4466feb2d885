use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn ledger<'a>(&'a mut self) -> LedgerFixtures<'a> {
        LedgerFixtures { setup: self }
    }
}

pub struct LedgerFixtures<'a> {
    pub setup: &'a mut TestContext,
}
