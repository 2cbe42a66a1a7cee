//! [`Simulation`]-related definitions.

use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject};
use service::domain::{wizard, Wizard};

use crate::{api, Context, Error};

/// Snapshot of the pricing simulator.
#[derive(Clone, Debug, From, Into)]
pub struct Simulation(Wizard);

/// Snapshot of the pricing simulator: the client selections with their
/// `Quote`, address `Eligibility` and readiness to submit a lead.
#[graphql_object(context = Context)]
impl Simulation {
    /// Current step of this `Simulation`.
    pub fn step(&self) -> Step {
        self.0.step().into()
    }

    /// Step to move to forward. Stays on the last step.
    pub fn next_step(&self) -> Step {
        self.0.step().next().into()
    }

    /// Step to move to backward. Stays on the first step.
    pub fn previous_step(&self) -> Step {
        self.0.step().previous().into()
    }

    /// Number of persons to cook for, clamped to the allowed range.
    pub fn party_size(&self) -> Result<i32, Error> {
        api::int(self.0.input().party_size.into())
    }

    /// Indicator whether the subscription is selected.
    pub fn subscribed(&self) -> bool {
        self.0.selections().subscribed
    }

    /// Indicator whether the promotional offer is selected.
    pub fn promo(&self) -> bool {
        self.0.selections().promo
    }

    /// `Quote` of the current selections.
    pub fn quote(&self) -> api::Quote {
        self.0.quote().into()
    }

    /// Selected address, if any.
    pub fn address(&self) -> Option<api::address::Suggestion> {
        self.0.address().cloned().map(Into::into)
    }

    /// `Eligibility` of the selected address.
    pub fn eligibility(&self) -> api::Eligibility {
        self.0.eligibility().into()
    }

    /// Indicator whether the client agreed to be contacted despite an
    /// out-of-area address.
    pub fn out_of_area_acknowledged(&self) -> bool {
        self.0.selections().out_of_area_acknowledged
    }

    /// Readiness of this `Simulation` to submit a lead.
    pub fn readiness(&self) -> Readiness {
        self.0.readiness().into()
    }
}

/// Selections of the pricing simulator.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "SimulationInput")]
pub struct Input {
    /// Current step.
    pub step: Step,

    /// Selected `Tier`.
    pub tier: api::pricing::Id,

    /// Number of persons to cook for.
    pub party_size: i32,

    /// Frequency of the cooking visits.
    pub frequency: api::quote::Frequency,

    /// Indicator whether the subscription is requested.
    #[graphql(default)]
    pub subscribed: bool,

    /// Indicator whether the promotional offer is requested.
    ///
    /// Ignored when no `Promotion` is running. Takes precedence over the
    /// subscription.
    #[graphql(default)]
    pub promo: bool,

    /// Selected address.
    pub address: Option<api::address::Input>,

    /// Indicator whether the client agreed to be contacted despite an
    /// out-of-area address.
    #[graphql(default)]
    pub out_of_area_acknowledged: bool,
}

impl From<Input> for wizard::Selections {
    fn from(input: Input) -> Self {
        let Input {
            step,
            tier,
            party_size,
            frequency,
            subscribed,
            promo,
            address,
            out_of_area_acknowledged,
        } = input;
        Self {
            step: step.into(),
            tier: tier.into(),
            party_size: party_size.into(),
            subscribed,
            frequency: frequency.into(),
            promo,
            address: address.map(Into::into),
            out_of_area_acknowledged,
        }
    }
}

/// Step of the pricing simulator.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "SimulationStep")]
pub enum Step {
    /// Choosing a `Tier`.
    TierSelection,

    /// Choosing the number of persons.
    PartySize,

    /// Choosing between the subscription and the promotional offer.
    Engagement,

    /// Reviewing the `Quote` and leaving contact details.
    Summary,
}

impl From<wizard::Step> for Step {
    fn from(step: wizard::Step) -> Self {
        use wizard::Step as S;
        match step {
            S::TierSelection => Self::TierSelection,
            S::PartySize => Self::PartySize,
            S::Engagement => Self::Engagement,
            S::Summary => Self::Summary,
        }
    }
}

impl From<Step> for wizard::Step {
    fn from(step: Step) -> Self {
        match step {
            Step::TierSelection => Self::TierSelection,
            Step::PartySize => Self::PartySize,
            Step::Engagement => Self::Engagement,
            Step::Summary => Self::Summary,
        }
    }
}

/// Readiness of a `Simulation` to submit a lead.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "SimulationReadiness")]
pub enum Readiness {
    /// Lead may be submitted.
    Ready,

    /// `Simulation` hasn't reached the summary step yet.
    NotAtSummary,

    /// No address is selected.
    AddressRequired,

    /// Selected address is outside the service area, and the client hasn't
    /// agreed to be contacted anyway.
    OutOfAreaNotAcknowledged,
}

impl From<wizard::Readiness> for Readiness {
    fn from(readiness: wizard::Readiness) -> Self {
        use wizard::Readiness as R;
        match readiness {
            R::Ready => Self::Ready,
            R::NotAtSummary => Self::NotAtSummary,
            R::AddressRequired => Self::AddressRequired,
            R::OutOfAreaNotAcknowledged => Self::OutOfAreaNotAcknowledged,
        }
    }
}
