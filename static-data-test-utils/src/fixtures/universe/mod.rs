use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn universe<'a>(&'a mut self) -> UniverseFixtures<'a> {
        UniverseFixtures { setup: self }
    }
}

pub struct UniverseFixtures<'a> {
    pub setup: &'a mut TestContext,
}
