//! GraphQL API definitions.

pub mod address;
pub mod geo;
pub mod lead;
mod mutation;
pub mod pricing;
pub mod promotion;
pub mod quote;
mod query;
pub mod simulation;

use juniper::EmptySubscription;

use crate::{AsError as _, Context, Error};

pub use self::{
    geo::Eligibility, lead::Lead, mutation::Mutation, pricing::Tier,
    promotion::Promotion, query::Query, quote::Quote, simulation::Simulation,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

/// Converts the provided [`u32`] into a GraphQL `Int`.
///
/// # Errors
///
/// If the value doesn't fit into a GraphQL `Int`.
pub(crate) fn int(value: u32) -> Result<i32, Error> {
    i32::try_from(value).map_err(|e| e.into_error())
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use juniper::{
        graphql_value, DefaultScalarValue, ExecutionError, Value, Variables,
    };
    use service::infra::{address::ban, lead::webhook, BanApi, Webhook};

    use crate::{Context, Service};

    fn context() -> Context {
        let addresses = BanApi::new(&ban::Config::default()).unwrap();
        let leads = Webhook::new(webhook::Config {
            url: "http://127.0.0.1:9/hooks/lead".to_owned().into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        Context::new(Service::new(
            service::Config::default(),
            addresses,
            leads,
        ))
    }

    type Errors = Vec<ExecutionError<DefaultScalarValue>>;

    async fn execute(query: &str) -> (Value<DefaultScalarValue>, Errors) {
        let ctx = context();
        let schema = super::schema();
        juniper::execute(query, None, &schema, &Variables::new(), &ctx)
            .await
            .unwrap()
    }

    fn error_codes(errors: &Errors) -> Vec<String> {
        errors
            .iter()
            .filter_map(|e| {
                e.error()
                    .extensions()
                    .as_object_value()?
                    .get_field_value("code")?
                    .as_string_value()
                    .map(ToOwned::to_owned)
            })
            .collect()
    }

    #[tokio::test]
    async fn lists_tiers_by_meals() {
        let (res, errors) = execute("{ tiers { id meals recommended } }").await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"tiers": [
                {"id": "3-meals", "meals": 3, "recommended": false},
                {"id": "5-meals", "meals": 5, "recommended": true},
                {"id": "6-meals", "meals": 6, "recommended": false},
            ]}),
        );
    }

    #[tokio::test]
    async fn quotes_party_without_discount() {
        let (res, errors) = execute(
            r#"{
                quote(input: {
                    tier: "6-meals",
                    partySize: 4,
                    frequency: WEEKLY,
                }) {
                    grossPrice
                    subscriptionDiscount
                    amountDue
                    taxCredit
                    netCost
                }
            }"#,
        )
        .await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"quote": {
                "grossPrice": 270.0,
                "subscriptionDiscount": 0.0,
                "amountDue": 270.0,
                "taxCredit": 135.0,
                "netCost": 135.0,
            }}),
        );
    }

    #[tokio::test]
    async fn quotes_promo_discount() {
        let (res, errors) = execute(
            r#"{
                quote(input: {
                    tier: "6-meals",
                    partySize: 4,
                    frequency: WEEKLY,
                    promoPercent: 20,
                }) {
                    grossPrice
                    subscriptionDiscount
                    promoDiscount
                    amountDue
                    taxCredit
                    netCost
                }
            }"#,
        )
        .await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"quote": {
                "grossPrice": 270.0,
                "subscriptionDiscount": 0.0,
                "promoDiscount": 54.0,
                "amountDue": 216.0,
                "taxCredit": 108.0,
                "netCost": 108.0,
            }}),
        );
    }

    #[tokio::test]
    async fn quotes_subscription_with_zero_promo() {
        let (res, errors) = execute(
            r#"{
                quote(input: {
                    tier: "3-meals",
                    partySize: 1,
                    frequency: WEEKLY,
                    subscribed: true,
                    promoPercent: 0,
                }) {
                    subscribed
                    grossPrice
                    subscriptionDiscount
                    promoDiscount
                    amountDue
                    taxCredit
                    netCost
                }
            }"#,
        )
        .await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"quote": {
                "subscribed": true,
                "grossPrice": 120.0,
                "subscriptionDiscount": 18.0,
                "promoDiscount": 0.0,
                "amountDue": 102.0,
                "taxCredit": 51.0,
                "netCost": 51.0,
            }}),
        );
    }

    #[tokio::test]
    async fn idle_eligibility_without_location() {
        let (res, errors) =
            execute("{ eligibility { status distanceKm } }").await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"eligibility": {
                "status": "IDLE",
                "distanceKm": null,
            }}),
        );
    }

    #[tokio::test]
    async fn base_point_is_eligible() {
        let (res, errors) = execute(
            "{ eligibility(latitude: 45.9023929269181, \
                           longitude: 6.124958650165817) { status } }",
        )
        .await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"eligibility": {"status": "ELIGIBLE"}}),
        );
    }

    #[tokio::test]
    async fn simulation_clamps_navigation() {
        let (res, errors) = execute(
            r#"{
                simulation(input: {
                    step: SUMMARY,
                    tier: "unknown",
                    partySize: 42,
                    frequency: MONTHLY,
                }) {
                    step
                    nextStep
                    partySize
                    readiness
                    quote { tier { id } }
                }
            }"#,
        )
        .await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"simulation": {
                "step": "SUMMARY",
                "nextStep": "SUMMARY",
                "partySize": 6,
                "readiness": "ADDRESS_REQUIRED",
                "quote": {"tier": {"id": "6-meals"}},
            }}),
        );
    }

    #[tokio::test]
    async fn simulation_flags_out_of_area_address() {
        let (res, errors) = execute(
            r#"{
                simulation(input: {
                    step: SUMMARY,
                    tier: "5-meals",
                    partySize: 2,
                    frequency: WEEKLY,
                    address: {
                        label: "1 Place Bellecour 69002 Lyon",
                        city: "Lyon",
                        postcode: "69002",
                        latitude: 45.757814,
                        longitude: 4.832011,
                    },
                }) {
                    eligibility { status }
                    readiness
                }
            }"#,
        )
        .await;

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            res,
            graphql_value!({"simulation": {
                "eligibility": {"status": "NOT_ELIGIBLE"},
                "readiness": "OUT_OF_AREA_NOT_ACKNOWLEDGED",
            }}),
        );
    }

    #[tokio::test]
    async fn requires_acknowledgement_to_submit_out_of_area() {
        let (_, errors) = execute(
            r#"mutation {
                submitLead(
                    simulation: {
                        step: SUMMARY,
                        tier: "5-meals",
                        partySize: 2,
                        frequency: WEEKLY,
                        address: {
                            label: "1 Place Bellecour 69002 Lyon",
                            city: "Lyon",
                            postcode: "69002",
                            latitude: 45.757814,
                            longitude: 4.832011,
                        },
                    },
                    contact: {
                        name: "Camille",
                        email: "camille@example.fr",
                        phone: "0612345678",
                    },
                ) { submittedAt }
            }"#,
        )
        .await;

        assert_eq!(error_codes(&errors), ["OUT_OF_AREA_NOT_ACKNOWLEDGED"]);
    }

    #[tokio::test]
    async fn rejects_invalid_contact() {
        let (_, errors) = execute(
            r#"mutation {
                submitLead(
                    simulation: {
                        step: SUMMARY,
                        tier: "5-meals",
                        partySize: 2,
                        frequency: WEEKLY,
                    },
                    contact: {
                        name: "Camille",
                        email: "not an email",
                        phone: "0612345678",
                    },
                ) { submittedAt }
            }"#,
        )
        .await;

        assert_eq!(error_codes(&errors), ["INVALID_CONTACT"]);
    }

    #[tokio::test]
    async fn requires_address_to_submit() {
        let (_, errors) = execute(
            r#"mutation {
                submitLead(
                    simulation: {
                        step: SUMMARY,
                        tier: "5-meals",
                        partySize: 2,
                        frequency: WEEKLY,
                    },
                    contact: {
                        name: "Camille",
                        email: "camille@example.fr",
                        phone: "0612345678",
                    },
                ) { submittedAt }
            }"#,
        )
        .await;

        assert_eq!(error_codes(&errors), ["ADDRESS_REQUIRED"]);
    }

    #[tokio::test]
    async fn requires_summary_to_submit() {
        let (_, errors) = execute(
            r#"mutation {
                submitLead(
                    simulation: {
                        step: ENGAGEMENT,
                        tier: "5-meals",
                        partySize: 2,
                        frequency: WEEKLY,
                    },
                    contact: {
                        name: "Camille",
                        email: "camille@example.fr",
                        phone: "0612345678",
                    },
                ) { submittedAt }
            }"#,
        )
        .await;

        assert_eq!(error_codes(&errors), ["LEAD_NOT_READY"]);
    }
}
