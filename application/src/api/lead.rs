//! [`Lead`]-related definitions.

use common::{DateTime, Money};
use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLInputObject};
use service::{
    command::submit_lead,
    domain::{lead, wizard::Readiness},
};

use crate::{define_error, AsError, Context, Error};

/// Lead submitted to the cook.
#[derive(Clone, Debug, From, Into)]
pub struct Lead(lead::Payload);

/// Lead submitted to the cook.
#[graphql_object(context = Context)]
impl Lead {
    /// `DateTime` this `Lead` was submitted at.
    pub fn submitted_at(&self) -> DateTime {
        self.0.submitted_at
    }

    /// Indicator whether the address of this `Lead` is within the service
    /// area.
    pub fn eligible(&self) -> bool {
        self.0.eligible
    }

    /// Distance from the service base to the address of this `Lead`, in
    /// kilometers.
    pub fn distance_km(&self) -> f64 {
        self.0.distance_km
    }

    /// Amount payable to the cook.
    pub fn amount_due(&self) -> Money {
        self.0.amount_due
    }

    /// Final cost after the tax credit.
    pub fn net_cost(&self) -> Money {
        self.0.net_cost
    }
}

/// Contact details of a client.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "ContactInput")]
pub struct ContactInput {
    /// Name of the client.
    pub name: String,

    /// Email address of the client.
    pub email: String,

    /// French phone number of the client.
    pub phone: String,

    /// Free-form message to the cook.
    pub message: Option<String>,
}

impl TryFrom<ContactInput> for lead::Contact {
    type Error = ContactError;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        let ContactInput {
            name,
            email,
            phone,
            message,
        } = input;
        Ok(Self {
            name: lead::Name::new(name.trim()).ok_or(ContactError::Name)?,
            email: lead::Email::new(email.trim())
                .ok_or(ContactError::Email)?,
            phone: lead::Phone::new(phone.trim())
                .ok_or(ContactError::Phone)?,
            message,
        })
    }
}

impl AsError for submit_lead::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Sink(_) | Self::Rejected => {
                Some(LeadError::SubmissionFailed.into())
            }
            Self::NotReady(readiness) => match readiness {
                Readiness::NotAtSummary => Some(LeadError::NotReady.into()),
                Readiness::AddressRequired => {
                    Some(LeadError::AddressRequired.into())
                }
                Readiness::OutOfAreaNotAcknowledged => {
                    Some(LeadError::OutOfAreaNotAcknowledged.into())
                }
                Readiness::Ready => None,
            },
        }
    }
}

define_error! {
    enum LeadError {
        #[code = "LEAD_NOT_READY"]
        #[status = CONFLICT]
        #[message = "`Simulation` hasn't reached the summary step"]
        NotReady,

        #[code = "ADDRESS_REQUIRED"]
        #[status = BAD_REQUEST]
        #[message = "An address must be selected"]
        AddressRequired,

        #[code = "OUT_OF_AREA_NOT_ACKNOWLEDGED"]
        #[status = BAD_REQUEST]
        #[message = "Address is outside the service area and the client \
                     hasn't agreed to be contacted anyway"]
        OutOfAreaNotAcknowledged,

        #[code = "LEAD_SUBMISSION_FAILED"]
        #[status = BAD_GATEWAY]
        #[message = "Failed to submit the lead, please try again"]
        SubmissionFailed,
    }
}

define_error! {
    enum ContactError {
        #[code = "INVALID_CONTACT"]
        #[status = BAD_REQUEST]
        #[message = "Name must be non-empty and at most 256 characters long"]
        Name,

        #[code = "INVALID_CONTACT"]
        #[status = BAD_REQUEST]
        #[message = "Email address is invalid"]
        Email,

        #[code = "INVALID_CONTACT"]
        #[status = BAD_REQUEST]
        #[message = "Phone number must be a valid French phone number"]
        Phone,
    }
}
