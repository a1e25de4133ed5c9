//! Error table properties

use opennsl_shared::{errmsg, failure, success, ErrorCode, SwitchEvent, ERRMSG};
use proptest::prelude::*;

#[test]
fn test_table_length_matches_codes() {
    assert_eq!(ERRMSG.len(), ErrorCode::ALL.len());
    assert_eq!(ERRMSG.len(), (-ErrorCode::Limit.code()) as usize + 1);
}

#[test]
fn test_positional_correspondence() {
    for k in 0..ERRMSG.len() {
        let code = ErrorCode::from_code(-(k as i32)).expect("code in range");
        assert_eq!(errmsg(code.code()), ERRMSG[k]);
    }
    assert_eq!(ERRMSG[ERRMSG.len() - 1], "Unknown error");
}

#[test]
fn test_zero_is_success() {
    assert!(success(ErrorCode::None.code()));
    assert_eq!(errmsg(0), "Ok");
}

proptest! {
    #[test]
    fn errmsg_is_total(rv in any::<i32>()) {
        let msg = errmsg(rv);
        prop_assert!(!msg.is_empty());
        if rv > 0 || rv <= ErrorCode::Limit.code() {
            prop_assert_eq!(msg, "Unknown error");
        }
    }

    #[test]
    fn predicates_are_complementary(rv in any::<i32>()) {
        prop_assert_eq!(failure(rv), !success(rv));
    }

    #[test]
    fn check_agrees_with_predicates(rv in any::<i32>()) {
        prop_assert_eq!(ErrorCode::check(rv).is_ok(), success(rv));
    }

    #[test]
    fn no_value_is_both_event_and_error(rv in any::<i32>()) {
        prop_assert!(!(SwitchEvent::from_code(rv).is_some() && ErrorCode::from_code(rv).is_some()));
    }
}
