//! Simulator [`Wizard`] definitions.

use std::sync::Arc;

use common::{define_kind, Percent};

use crate::domain::{
    address::Suggestion,
    geo::{Area, Eligibility},
    pricing::{tier, Catalog, PartySize},
    quote::{self, DiscountPolicy, Frequency, Quote},
};

define_kind! {
    #[doc = "Step of a simulator [`Wizard`]."]
    enum Step {
        #[doc = "Choosing a pricing tier."]
        TierSelection = 0,

        #[doc = "Choosing the number of persons."]
        PartySize = 1,

        #[doc = "Choosing the subscription, the frequency and the promotion."]
        Engagement = 2,

        #[doc = "Reviewing the quote and contacting the cook."]
        Summary = 3,
    }
}

impl Step {
    /// First [`Step`].
    pub const FIRST: Self = Self::TierSelection;

    /// Last [`Step`].
    pub const LAST: Self = Self::Summary;

    /// Returns the [`Step`] following this one, staying on the
    /// [`Step::LAST`] one.
    #[must_use]
    pub const fn next(self) -> Self {
        match Self::from_u8(self.u8() + 1) {
            Some(s) => s,
            None => Self::LAST,
        }
    }

    /// Returns the [`Step`] preceding this one, staying on the
    /// [`Step::FIRST`] one.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self.u8().checked_sub(1) {
            Some(v) => match Self::from_u8(v) {
                Some(s) => s,
                None => Self::FIRST,
            },
            None => Self::FIRST,
        }
    }
}

/// Readiness of a [`Wizard`] to submit a lead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Readiness {
    /// Lead may be submitted.
    Ready,

    /// [`Wizard`] hasn't reached the [`Step::Summary`] yet.
    NotAtSummary,

    /// No address is selected.
    AddressRequired,

    /// Selected address is outside the service area, and the client hasn't
    /// agreed to be contacted anyway.
    OutOfAreaNotAcknowledged,
}

impl Readiness {
    /// Indicates whether this is [`Readiness::Ready`].
    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// Plain snapshot of the client selections of a [`Wizard`].
#[derive(Clone, Debug, PartialEq)]
pub struct Selections {
    /// Current [`Step`].
    pub step: Step,

    /// Selected [`tier::Id`].
    pub tier: tier::Id,

    /// Raw party size, clamped on restoring.
    pub party_size: i64,

    /// Indicator whether the subscription is requested.
    pub subscribed: bool,

    /// Selected [`Frequency`].
    pub frequency: Frequency,

    /// Indicator whether the promotional offer is requested.
    pub promo: bool,

    /// Selected address.
    pub address: Option<Suggestion>,

    /// Indicator whether the client agreed to be contacted despite an
    /// out-of-area address.
    pub out_of_area_acknowledged: bool,
}

/// Multi-step pricing simulator.
///
/// Each selection change is reflected by the [`Wizard::quote()`] and the
/// [`Wizard::eligibility()`] right away, as both are recalculated on every
/// call.
#[derive(Clone, Debug)]
pub struct Wizard {
    /// [`Catalog`] to price with.
    catalog: Arc<Catalog>,

    /// Service [`Area`] to check addresses against.
    area: Area,

    /// Discount of the currently running promotion, if any.
    offer: Option<Percent>,

    /// Current [`Step`].
    step: Step,

    /// Selected [`tier::Id`].
    tier: tier::Id,

    /// Selected [`PartySize`].
    party_size: PartySize,

    /// Indicator whether the subscription is selected.
    subscribed: bool,

    /// Selected [`Frequency`].
    frequency: Frequency,

    /// Indicator whether the promotional offer is selected.
    promo: bool,

    /// Selected address.
    address: Option<Suggestion>,

    /// Indicator whether the client agreed to be contacted despite an
    /// out-of-area address.
    out_of_area_acknowledged: bool,
}

impl Wizard {
    /// Creates a new [`Wizard`] on its [`Step::FIRST`] with the default
    /// [`Tier`] of the [`Catalog`] selected.
    ///
    /// [`Tier`]: crate::domain::Tier
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, area: Area, offer: Option<Percent>) -> Self {
        let tier = catalog.default_tier().id.clone();
        Self {
            catalog,
            area,
            offer,
            step: Step::FIRST,
            tier,
            party_size: PartySize::ONE,
            subscribed: false,
            frequency: Frequency::Weekly,
            promo: false,
            address: None,
            out_of_area_acknowledged: false,
        }
    }

    /// Restores a [`Wizard`] from the provided [`Selections`].
    ///
    /// Selections are replayed through the regular mutators, so the restored
    /// [`Wizard`] obeys the same rules: when both the subscription and the
    /// promotional offer are requested, the promotional offer wins.
    #[must_use]
    pub fn restore(
        catalog: Arc<Catalog>,
        area: Area,
        offer: Option<Percent>,
        selections: Selections,
    ) -> Self {
        let Selections {
            step,
            tier,
            party_size,
            subscribed,
            frequency,
            promo,
            address,
            out_of_area_acknowledged,
        } = selections;

        let mut wizard = Self::new(catalog, area, offer);
        wizard.step = step;
        wizard.select_tier(&tier);
        wizard.set_party_size(party_size);
        wizard.set_subscription(subscribed);
        wizard.set_promo(promo);
        wizard.set_frequency(frequency);
        if let Some(address) = address {
            wizard.select_address(address);
        }
        wizard.acknowledge_out_of_area(out_of_area_acknowledged);
        wizard
    }

    /// Returns the [`Selections`] of this [`Wizard`].
    #[must_use]
    pub fn selections(&self) -> Selections {
        Selections {
            step: self.step,
            tier: self.tier.clone(),
            party_size: i64::from(u32::from(self.party_size)),
            subscribed: self.subscribed,
            frequency: self.frequency,
            promo: self.promo,
            address: self.address.clone(),
            out_of_area_acknowledged: self.out_of_area_acknowledged,
        }
    }

    /// Returns the current [`Step`].
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Moves to the next [`Step`], if any.
    pub fn next(&mut self) -> Step {
        self.step = self.step.next();
        self.step
    }

    /// Moves to the previous [`Step`], if any.
    pub fn previous(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    /// Selects the [`Tier`] with the provided [`tier::Id`], or the default one
    /// if the [`Catalog`] has no such [`Tier`].
    ///
    /// [`Tier`]: crate::domain::Tier
    pub fn select_tier(&mut self, id: &tier::Id) {
        self.tier = self.catalog.tier(id).id.clone();
    }

    /// Sets the party size, clamping it into the range allowed by the
    /// [`Catalog`].
    pub fn set_party_size(&mut self, size: i64) {
        self.party_size = self.catalog.clamp_party_size(size);
    }

    /// Switches the subscription. Switching it on drops the promotional offer.
    pub fn set_subscription(&mut self, on: bool) {
        self.subscribed = on;
        if on {
            self.promo = false;
        }
    }

    /// Switches the promotional offer. Switching it on drops the
    /// subscription.
    ///
    /// Does nothing if no promotion is running.
    pub fn set_promo(&mut self, on: bool) {
        if self.offer.is_none() {
            return;
        }
        self.promo = on;
        if on {
            self.subscribed = false;
        }
    }

    /// Sets the visits [`Frequency`].
    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    /// Selects the provided address, resetting any previous out-of-area
    /// acknowledgement.
    pub fn select_address(&mut self, address: Suggestion) {
        self.address = Some(address);
        self.out_of_area_acknowledged = false;
    }

    /// Drops the selected address.
    pub fn clear_address(&mut self) {
        self.address = None;
        self.out_of_area_acknowledged = false;
    }

    /// Records whether the client agrees to be contacted despite an
    /// out-of-area address.
    pub fn acknowledge_out_of_area(&mut self, agreed: bool) {
        self.out_of_area_acknowledged = agreed;
    }

    /// Returns the selected address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&Suggestion> {
        self.address.as_ref()
    }

    /// Returns the [`DiscountPolicy`] resulting from the current selections.
    #[must_use]
    pub fn discount(&self) -> DiscountPolicy {
        match (self.subscribed, self.promo.then_some(self.offer).flatten()) {
            (true, _) => DiscountPolicy::Subscription,
            (false, Some(p)) => DiscountPolicy::Promo(p),
            (false, None) => DiscountPolicy::None,
        }
    }

    /// Returns the [`quote::Input`] resulting from the current selections.
    #[must_use]
    pub fn input(&self) -> quote::Input {
        quote::Input {
            tier: self.tier.clone(),
            party_size: self.party_size,
            frequency: self.frequency,
            discount: self.discount(),
        }
    }

    /// Calculates the [`Quote`] of the current selections.
    #[must_use]
    pub fn quote(&self) -> Quote {
        Quote::calculate(&self.catalog, &self.input())
    }

    /// Checks the [`Eligibility`] of the selected address.
    #[must_use]
    pub fn eligibility(&self) -> Eligibility {
        self.area
            .classify(self.address.as_ref().map(|a| a.coordinates))
    }

    /// Returns the [`Readiness`] of this [`Wizard`] to submit a lead.
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        if self.step != Step::Summary {
            return Readiness::NotAtSummary;
        }
        match self.eligibility() {
            Eligibility::Idle => Readiness::AddressRequired,
            Eligibility::NotEligible(_) if !self.out_of_area_acknowledged => {
                Readiness::OutOfAreaNotAcknowledged
            }
            Eligibility::Eligible(_) | Eligibility::NotEligible(_) => {
                Readiness::Ready
            }
        }
    }
}
