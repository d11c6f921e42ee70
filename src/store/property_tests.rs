//! Property-Based Tests for the Store Query Builders
//!
//! Uses proptest to verify that the filter and change-set documents contain
//! exactly what the inputs imply, for every combination of absent, null, and
//! present fields.

use proptest::option;
use proptest::prelude::*;

use mongodb::bson::Bson;

use crate::models::{StudentFilterParams, UpdateStudentRequest};
use crate::store::{change_set, filter_document, Address};

// == Strategies ==
/// Generates plausible student names
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,15}"
}

/// Generates plausible country names
fn country_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}"
}

/// Generates an embedded address
fn address_strategy() -> impl Strategy<Value = Address> {
    (country_strategy(), country_strategy())
        .prop_map(|(city, country)| Address { city, country })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A field appears in the change-set exactly when the payload carries a
    // value for it; absent and explicit-null fields never do, and no null
    // ever reaches the stored document.
    #[test]
    fn prop_change_set_mirrors_payload(
        name in option::of(option::of(name_strategy())),
        age in option::of(option::of(0..120i32)),
        address in option::of(option::of(address_strategy())),
    ) {
        let update = UpdateStudentRequest {
            name: name.clone(),
            age,
            address: address.clone(),
        };

        let changes = change_set(&update);
        prop_assert_eq!(changes.contains_key("name"), matches!(&name, Some(Some(_))));
        prop_assert_eq!(changes.contains_key("age"), matches!(age, Some(Some(_))));
        prop_assert_eq!(changes.contains_key("address"), matches!(&address, Some(Some(_))));
        prop_assert!(changes.values().all(|value| !matches!(value, Bson::Null)));
    }

    // The list filter constrains exactly the params supplied: country as an
    // exact match, age as a lower bound, nothing else.
    #[test]
    fn prop_filter_mirrors_params(
        country in option::of(country_strategy()),
        age in option::of(0..120i32),
    ) {
        let params = StudentFilterParams {
            country: country.clone(),
            age,
        };

        let filter = filter_document(&params);
        match &country {
            Some(c) => prop_assert_eq!(filter.get_str("address.country").unwrap(), c.as_str()),
            None => prop_assert!(!filter.contains_key("address.country")),
        }
        match age {
            Some(a) => {
                let bound = filter.get_document("age").unwrap();
                prop_assert_eq!(bound.get_i32("$gte").unwrap(), a);
            }
            None => prop_assert!(!filter.contains_key("age")),
        }
        prop_assert_eq!(filter.len(), usize::from(country.is_some()) + usize::from(age.is_some()));
    }
}
