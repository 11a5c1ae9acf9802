use checked_optionals::*;

#[test]
fn wrapper_recognizes_a_raw_payload() {
    let value = "payload".to_string();
    let wrapper = optional(Some(value.clone()));
    assert!(wrapper == value);
    assert!(wrapper == Some(value.clone()));
    assert!(Some(value.clone()) == wrapper);
    assert!(wrapper != "other".to_string());
}

#[test]
fn absent_wrapper_equals_a_raw_none() {
    let wrapper = optional(None::<String>);
    assert!(wrapper == None::<String>);
    assert!(None::<String> == wrapper);
    assert!(wrapper != "payload".to_string());
}

#[test]
fn wrapper_equality_is_reflexive_and_transitive() {
    let a = optional(Some("payload".to_string()));
    let b = optional(Some("payload".to_string()));
    let c = CheckedOptional::from("payload".to_string());
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, c);
    assert_eq!(b, a);
}

#[test]
fn resolved_wrapper_recognizes_a_raw_payload() {
    let value = "payload".to_string();
    let wrapper = eventual(Some(value.clone()));
    assert!(wrapper == value);
    assert!(wrapper == Some(value.clone()));
    assert!(Some(value) == wrapper);
}

#[test]
fn resolution_survives_raw_comparisons() {
    // A raw None wraps to a resolved absence, so it matches the resolved
    // absence and not the pending state.
    let resolved_absent = eventual(None::<String>);
    assert!(resolved_absent == None::<String>);
    assert!(None::<String> == resolved_absent);

    let pending = EventualCheckedOptional::<String>::PENDING;
    assert!(pending != None::<String>);
    assert!(None::<String> != pending);
}

#[test]
fn unresolved_equals_only_unresolved() {
    let pending = EventualCheckedOptional::<String>::PENDING;
    assert_eq!(pending, EventualCheckedOptional::default());
    assert_ne!(pending, EventualCheckedOptional::NO_VALUE);
    assert_ne!(pending, eventual(Some("payload".to_string())));
}

#[test]
fn eventual_equality_is_reflexive_and_transitive() {
    let a = eventual(Some("payload".to_string()));
    let b = EventualCheckedOptional::from("payload".to_string());
    let c = EventualCheckedOptional::new(Some("payload".to_string()));
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

#[test]
fn shared_payloads_compare_by_identity() {
    let original = Shared::new("payload".to_string());
    let alias = original.clone();
    assert_eq!(optional(Some(original.clone())), optional(Some(alias)));

    let lookalike = Shared::new("payload".to_string());
    assert_ne!(optional(Some(original)), optional(Some(lookalike)));
}
