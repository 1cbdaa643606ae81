use std::cell::Cell;

use proptest::prelude::*;
use railway::{Outcome, when, when_value};

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Success),
        "[a-z]{1,8}".prop_map(Outcome::Failure),
    ]
}

fn halve(x: i32) -> Outcome<i32, String> {
    if x % 2 == 0 {
        Outcome::Success(x / 2)
    } else {
        Outcome::Failure(format!("{x} is odd"))
    }
}

fn bounded(x: i32) -> Outcome<i32, String> {
    if x.unsigned_abs() < 1_000 {
        Outcome::Success(x.wrapping_mul(3))
    } else {
        Outcome::Failure("out of range".to_string())
    }
}

proptest! {
    #[test]
    fn map_identity(o in outcome_strategy()) {
        prop_assert_eq!(o.clone().map(|x| x), o);
    }

    #[test]
    fn map_composes(o in outcome_strategy()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(2);
        prop_assert_eq!(o.clone().map(f).map(g), o.map(|x| g(f(x))));
    }

    #[test]
    fn bind_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Outcome::<i32, String>::Success(x).bind(halve), halve(x));
    }

    #[test]
    fn bind_right_identity(o in outcome_strategy()) {
        prop_assert_eq!(o.clone().bind(Outcome::<i32, String>::Success), o);
    }

    #[test]
    fn bind_associative(o in outcome_strategy()) {
        let nested = o.clone().bind(|x| halve(x).bind(bounded));
        prop_assert_eq!(o.bind(halve).bind(bounded), nested);
    }

    #[test]
    fn failure_short_circuits(e in "[a-z]{1,8}", gate in any::<bool>()) {
        let calls = Cell::new(0);
        let bump = || calls.set(calls.get() + 1);
        let failure: Outcome<i32, String> = Outcome::Failure(e.clone());

        let out = failure
            .bind(|x| { bump(); Outcome::<i32, String>::Success(x) })
            .map(|x| { bump(); x })
            .ensure(|_| { bump(); true }, "unused".to_string())
            .tap_if(gate, |_| bump())
            .tap_if(when(|| { bump(); true }), |_| bump())
            .bind_if(when_value(|_: &i32| { bump(); true }), |x| { bump(); Outcome::<i32, String>::Success(x) });

        prop_assert_eq!(out, Outcome::Failure(e));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn success_skips_error_track(x in any::<i32>()) {
        let calls = Cell::new(0);
        let success: Outcome<i32, String> = Outcome::Success(x);

        let out = success
            .map_error(|e| { calls.set(calls.get() + 1); e.len() })
            .tap_error(|_| calls.set(calls.get() + 1))
            .tap_error_if(true, |_| calls.set(calls.get() + 1));

        prop_assert_eq!(out, Outcome::Success(x));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn ensure_matches_predicate(x in any::<i32>()) {
        let out = Outcome::<i32, String>::Success(x).ensure(|v| *v >= 0, "negative".to_string());
        if x >= 0 {
            prop_assert_eq!(out, Outcome::Success(x));
        } else {
            prop_assert_eq!(out, Outcome::Failure("negative".to_string()));
        }
    }

    #[test]
    fn fold_picks_branch(o in outcome_strategy()) {
        let expected = match &o {
            Outcome::Success(v) => format!("ok {v}"),
            Outcome::Failure(e) => format!("err {e}"),
        };
        prop_assert_eq!(o.fold(|v| format!("ok {v}"), |e| format!("err {e}")), expected);
    }

    #[test]
    fn gated_map_matches_plain_map_when_open(o in outcome_strategy()) {
        let f = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(o.clone().map_if(true, f), o.clone().map(f));
        prop_assert_eq!(o.clone().map_if(false, f), o);
    }

    #[test]
    fn result_conversion_round_trips(o in outcome_strategy()) {
        let result: Result<i32, String> = o.clone().into();
        prop_assert_eq!(Outcome::from(result), o);
    }
}

#[test]
fn failure_error_identity_is_preserved() {
    let error = Box::new(String::from("boom"));
    let addr: *const String = &*error;

    let out: Outcome<i32, Box<String>> = Outcome::<i32, Box<String>>::Failure(error)
        .bind(|x| Outcome::<i32, Box<String>>::Success(x + 1))
        .map(|x| x * 2)
        .ensure(|_| false, Box::new(String::from("other")))
        .tap_if(true, |_| {});

    let carried = out.unwrap_failure();
    assert!(std::ptr::eq(addr, &*carried));
}
