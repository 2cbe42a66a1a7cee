//! [`Command`] for submitting a lead.

use common::{operations::Perform, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        lead::{Contact, Payload},
        wizard::{Readiness, Selections},
    },
    infra::{lead, LeadSink},
    Service,
};

use super::Command;

/// [`Command`] for submitting a lead out of the simulator [`Selections`] and
/// the client [`Contact`].
///
/// The lead is delivered once, without retries. On failure nothing is lost:
/// the same [`Selections`] may be submitted again.
#[derive(Clone, Debug)]
pub struct SubmitLead {
    /// [`Selections`] of the client.
    pub selections: Selections,

    /// [`Contact`] of the client.
    pub contact: Contact,
}

impl<A, L> Command<SubmitLead> for Service<A, L>
where
    L: LeadSink<Perform<Payload>, Ok = bool, Err = Traced<lead::Error>>,
{
    type Ok = Payload;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SubmitLead) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitLead {
            selections,
            contact,
        } = cmd;

        let now = DateTime::now();
        let wizard = self.wizard(selections, now);

        let readiness = wizard.readiness();
        if !readiness.is_ready() {
            return Err(tracerr::new!(E::NotReady(readiness)));
        }

        let payload = wizard
            .address()
            .and_then(|address| {
                Payload::new(
                    contact,
                    address,
                    &wizard.eligibility(),
                    &wizard.quote(),
                    now,
                )
            })
            .ok_or(E::NotReady(Readiness::AddressRequired))
            .map_err(tracerr::wrap!())?;

        let accepted = self
            .leads()
            .execute(Perform(payload.clone()))
            .await
            .inspect_err(|e| log::error!("failed to deliver lead: {e}"))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !accepted {
            log::error!("lead was rejected by the sink");
            return Err(tracerr::new!(E::Rejected));
        }

        Ok(payload)
    }
}

/// Error of [`SubmitLead`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`LeadSink`] error.
    #[display("`LeadSink` operation failed: {_0}")]
    #[from]
    Sink(lead::Error),

    /// Selections are not ready to be submitted.
    #[display("Lead is not ready to be submitted: {_0:?}")]
    NotReady(#[error(not(source))] Readiness),

    /// [`LeadSink`] didn't accept the lead.
    #[display("Lead was rejected")]
    Rejected,
}

#[cfg(test)]
mod spec {
    use std::sync::{Arc, Mutex};

    use common::operations::Perform;
    use tracerr::Traced;

    use crate::{
        command::Command as _,
        domain::{
            address::Suggestion,
            geo::{Area, Coordinates},
            lead::{Contact, Email, Name, Payload, Phone},
            pricing::Catalog,
            quote::Frequency,
            wizard::{Readiness, Selections, Step},
        },
        infra::{lead, LeadSink},
        Config, Service,
    };

    use super::{ExecutionError, SubmitLead};

    /// [`LeadSink`] recording every delivered [`Payload`].
    #[derive(Clone, Debug, Default)]
    struct Recorder {
        delivered: Arc<Mutex<Vec<Payload>>>,
        rejecting: bool,
    }

    impl LeadSink<Perform<Payload>> for Recorder {
        type Ok = bool;
        type Err = Traced<lead::Error>;

        async fn execute(
            &self,
            Perform(payload): Perform<Payload>,
        ) -> Result<Self::Ok, Self::Err> {
            self.delivered.lock().unwrap().push(payload);
            Ok(!self.rejecting)
        }
    }

    fn service(leads: Recorder) -> Service<(), Recorder> {
        Service::new(Config::default(), (), leads)
    }

    fn selections(latitude: Option<f64>) -> Selections {
        Selections {
            step: Step::Summary,
            tier: Catalog::SIX_MEALS,
            party_size: 4,
            subscribed: true,
            frequency: Frequency::Biweekly,
            promo: false,
            address: latitude.map(|latitude| Suggestion {
                label: "1 Rue Royale 74000 Annecy".into(),
                city: "Annecy".into(),
                postcode: "74000".into(),
                coordinates: Coordinates::new(latitude, Area::BASE.longitude),
            }),
            out_of_area_acknowledged: false,
        }
    }

    fn submit(selections: Selections) -> SubmitLead {
        SubmitLead {
            selections,
            contact: Contact {
                name: Name::new("Camille Martin").unwrap(),
                email: Email::new("camille@example.fr").unwrap(),
                phone: Phone::new("+33 6 12 34 56 78").unwrap(),
                message: Some("Allergie aux noix".into()),
            },
        }
    }

    #[tokio::test]
    async fn delivers_payload_once() {
        let leads = Recorder::default();
        let svc = service(leads.clone());

        let payload = svc
            .execute(submit(selections(Some(Area::BASE.latitude))))
            .await
            .unwrap();

        let delivered = leads.delivered.lock().unwrap();
        assert_eq!(delivered.as_slice(), [payload.clone()]);
        assert!(payload.eligible);
        assert!(payload.subscribed);
        assert_eq!(payload.party_size, 4);
        assert_eq!(
            payload.amount_due,
            payload.gross_price - payload.subscription_discount,
        );
        assert_eq!(payload.message.as_deref(), Some("Allergie aux noix"));
    }

    #[tokio::test]
    async fn requires_summary_step() {
        let leads = Recorder::default();
        let svc = service(leads.clone());

        let err = svc
            .execute(submit(Selections {
                step: Step::Engagement,
                ..selections(Some(Area::BASE.latitude))
            }))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::NotReady(Readiness::NotAtSummary),
        ));
        assert!(leads.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn requires_address() {
        let svc = service(Recorder::default());

        let err = svc.execute(submit(selections(None))).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::NotReady(Readiness::AddressRequired),
        ));
    }

    #[tokio::test]
    async fn out_of_area_requires_acknowledgement() {
        let leads = Recorder::default();
        let svc = service(leads.clone());
        let far = Some(Area::BASE.latitude + 0.5);

        let err = svc.execute(submit(selections(far))).await.unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::NotReady(Readiness::OutOfAreaNotAcknowledged),
        ));

        let payload = svc
            .execute(submit(Selections {
                out_of_area_acknowledged: true,
                ..selections(far)
            }))
            .await
            .unwrap();
        assert!(!payload.eligible);
        assert!(payload.distance_km > 7.5);
        assert_eq!(leads.delivered.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejection_is_an_error() {
        let leads = Recorder {
            rejecting: true,
            ..Recorder::default()
        };
        let svc = service(leads.clone());

        let err = svc
            .execute(submit(selections(Some(Area::BASE.latitude))))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Rejected));
        assert_eq!(leads.delivered.lock().unwrap().len(), 1);
    }
}
