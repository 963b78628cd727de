use ternary_core::connective::{self, Operand};
use ternary_core::{Connective, Error, Ternary};

const INVALID_STRS: &[&str] = &["", "maybe", "both", "2", "null", "truee"];
const INVALID_BITS: &[u8] = &[0b11, 4, u8::MAX];

fn assert_invalid(result: Result<Ternary, Error>) {
    assert!(
        matches!(result, Err(Error::InvalidValue(_))),
        "expected InvalidValue, got {result:?}"
    );
}

#[test]
fn unary_rejects_invalid() {
    for &s in INVALID_STRS {
        assert_invalid(connective::not(s));
        assert_invalid(connective::is_unknown(s));
    }
    for &b in INVALID_BITS {
        assert_invalid(connective::not(b));
        assert_invalid(connective::is_unknown(b));
    }
}

#[test]
fn binary_rejects_invalid_on_either_side() {
    for c in Connective::ALL {
        for &s in INVALID_STRS {
            assert_invalid(c.apply(s, Ternary::True));
            assert_invalid(c.apply(Ternary::False, s));
        }
        for &b in INVALID_BITS {
            assert_invalid(c.apply(b, Ternary::Unknown));
            assert_invalid(c.apply(Ternary::Unknown, b));
        }
    }
}

#[test]
fn free_functions_reject_invalid() {
    assert_invalid(connective::and("maybe", true));
    assert_invalid(connective::or(false, 0b11u8));
    assert_invalid(connective::xor('x', None::<bool>));
    assert_invalid(connective::then("?!", "t"));
    assert_invalid(connective::eq(Ternary::True, "yes"));
}

#[test]
fn error_message() {
    let err = 0b11u8.to_ternary().unwrap_err();
    assert_eq!(err.to_string(), "invalid value: 0b11");
}

#[test]
fn valid_spellings_accepted() {
    for s in ["true", "TRUE", " t ", "1"] {
        assert_eq!(s.to_ternary(), Ok(Ternary::True), "{s:?}");
    }
    for s in ["false", "F", "0"] {
        assert_eq!(s.to_ternary(), Ok(Ternary::False), "{s:?}");
    }
    for s in ["unknown", "U", "?"] {
        assert_eq!(s.to_ternary(), Ok(Ternary::Unknown), "{s:?}");
    }
}

#[test]
fn deserialize_rejects_invalid() {
    let err = serde_norway::from_str::<Ternary>("both").unwrap_err();
    assert!(err.to_string().contains("invalid value"), "{err}");
}
