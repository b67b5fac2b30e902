use fieldkit::{
    core::{error::Error, traits::Entity, value::Value},
    demo::{LineItem, as_tuple},
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(v: &str) -> Decimal {
    Decimal::from_str(v).unwrap()
}

fn raisins() -> LineItem {
    LineItem::new("Golden raisins", dec("10"), dec("6.95")).unwrap()
}

// ---------------------
// construction
// ---------------------

#[test]
fn golden_raisins_reads_back_and_subtotals() {
    let item = raisins();

    assert_eq!(item.description(), "Golden raisins");
    assert_eq!(item.weight(), dec("10"));
    assert_eq!(item.price(), dec("6.95"));
    assert_eq!(item.subtotal(), dec("69.5"));
}

#[test]
fn empty_description_fails_construction() {
    let err = LineItem::new("", dec("1"), dec("1")).unwrap_err();
    let validate = err.as_validate().unwrap();

    assert_eq!(err.to_string(), "str must be not empty or blank");
    assert_eq!(validate.field, "description");
    assert_eq!(validate.issue.kind, "NonBlank");
}

#[test]
fn first_invalid_field_in_declaration_order_is_reported() {
    let err = LineItem::new("  ", dec("-1"), dec("-2")).unwrap_err();
    assert_eq!(err.as_validate().unwrap().field, "description");

    let err = LineItem::new("nuts", dec("-1"), dec("-2")).unwrap_err();
    assert_eq!(err.to_string(), "-1 must be > 0");
    assert_eq!(err.as_validate().unwrap().field, "weight");

    let err = LineItem::new("nuts", dec("1"), dec("-2")).unwrap_err();
    assert_eq!(err.as_validate().unwrap().field, "price");
}

#[test]
fn description_is_trimmed() {
    let item = LineItem::new("  Brazil Nuts \n", dec("10"), dec("34.95")).unwrap();

    assert_eq!(item.description(), "Brazil Nuts");
}

// ---------------------
// reassignment
// ---------------------

#[test]
fn negative_weight_is_rejected_and_previous_value_kept() {
    let mut item = raisins();

    let err = item.set_weight(dec("-20")).unwrap_err();

    assert!(matches!(err, Error::Validate(_)));
    assert!(err.to_string().contains("-20"));
    assert_eq!(err.to_string(), "-20 must be > 0");
    assert_eq!(item.weight(), dec("10"));
}

#[test]
fn blank_description_reassignment_is_rejected() {
    let mut item = LineItem::new("Brazil Nuts", dec("10"), dec("34.95")).unwrap();

    let err = item.set_description(" ").unwrap_err();

    assert_eq!(err.to_string(), "str must be not empty or blank");
    assert_eq!(item.description(), "Brazil Nuts");
}

#[test]
fn valid_reassignment_is_normalized() {
    let mut item = raisins();

    item.set_description(" Sultanas ").unwrap();
    item.set_weight(dec("0")).unwrap();
    item.set_price(dec("7.10")).unwrap();

    assert_eq!(item.description(), "Sultanas");
    assert_eq!(item.weight(), Decimal::ZERO);
    assert_eq!(item.subtotal(), Decimal::ZERO);
}

// ---------------------
// introspection
// ---------------------

#[test]
fn iter_fields_yields_declaration_order_every_time() {
    for _ in 0..2 {
        let names: Vec<_> = LineItem::iter_fields().collect();
        assert_eq!(names, ["description", "weight", "price"]);
    }
}

#[test]
fn descriptors_expose_storage_keys_without_an_instance() {
    let fields = LineItem::fields();

    assert_eq!(fields.description.storage_key(), Some("NonBlank#description"));
    assert_eq!(fields.weight.storage_key(), Some("Quantity#weight"));
    assert_eq!(fields.price.storage_key(), Some("Quantity#price"));
    assert_eq!(fields.weight.validator_kind(), "Quantity");
}

#[test]
fn instance_storage_is_keyed_by_storage_key() {
    let item = raisins();

    assert_eq!(
        item.storage_keys(),
        ["NonBlank#description", "Quantity#price", "Quantity#weight"]
    );
    assert_eq!(
        item.store().get_raw("NonBlank#description"),
        Some(&Value::from("Golden raisins"))
    );
}

#[test]
fn as_tuple_follows_assignment_order() {
    let mut item = raisins();
    item.set_weight(dec("12")).unwrap();

    assert_eq!(
        as_tuple(&item),
        [
            Value::from("Golden raisins"),
            Value::Decimal(dec("12")),
            Value::Decimal(dec("6.95")),
        ]
    );
}

// ---------------------
// properties
// ---------------------

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000, 0u32..4).prop_map(|(n, scale)| Decimal::new(n, scale))
}

fn arb_description() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[A-Za-z][A-Za-z ]{0,15}[A-Za-z]?[ \t]{0,3}"
}

proptest! {
    #[test]
    fn valid_inputs_read_back_normalized(
        description in arb_description(),
        weight in arb_amount(),
        price in arb_amount(),
    ) {
        let item = LineItem::new(description.clone(), weight, price).unwrap();

        prop_assert_eq!(item.description(), description.trim());
        prop_assert_eq!(item.weight(), weight);
        prop_assert_eq!(item.price(), price);
    }

    #[test]
    fn negative_weight_never_sticks(
        weight in arb_amount(),
        bad in 1i64..1_000_000,
    ) {
        let mut item = LineItem::new("nuts", weight, Decimal::ONE).unwrap();

        prop_assert!(item.set_weight(Decimal::new(-bad, 2)).is_err());
        prop_assert_eq!(item.weight(), weight);
    }

    #[test]
    fn blank_text_never_sticks(blank in "[ \t\n]{0,6}") {
        prop_assert!(LineItem::new(blank.clone(), Decimal::ONE, Decimal::ONE).is_err());

        let mut item = LineItem::new("nuts", Decimal::ONE, Decimal::ONE).unwrap();
        prop_assert!(item.set_description(blank).is_err());
        prop_assert_eq!(item.description(), "nuts");
    }
}
