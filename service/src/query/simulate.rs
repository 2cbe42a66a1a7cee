//! [`Query`] for simulating a [`Wizard`].

use std::convert::Infallible;

use common::DateTime;

use crate::{
    domain::{wizard::Selections, Wizard},
    Service,
};

use super::Query;

/// [`Query`] for restoring a [`Wizard`] out of the client [`Selections`].
#[derive(Clone, Debug)]
pub struct Simulate {
    /// [`Selections`] of the client.
    pub selections: Selections,

    /// [`DateTime`] to pick the running promotion at.
    pub at: DateTime,
}

impl<A, L> Query<Simulate> for Service<A, L> {
    type Ok = Wizard;
    type Err = Infallible;

    async fn execute(
        &self,
        Simulate { selections, at }: Simulate,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.wizard(selections, at))
    }
}
