use crate::TestContext;

pub mod mockito;

impl TestContext {
    pub fn node<'a>(&'a mut self) -> NodeFixtures<'a> {
        NodeFixtures { setup: self }
    }
}

pub struct NodeFixtures<'a> {
    pub setup: &'a mut TestContext,
}
