//! Property-based tests for variable-precision floats.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::bigfloat::{get_prec, set_prec, BigFloat};

    // Strategy for plain decimal literals whose exponent stays inside the
    // plain-format window, so stringification round-trips.
    fn plain_literal() -> impl Strategy<Value = String> {
        (
            1u8..10u8,
            proptest::collection::vec(0u8..10u8, 0..24),
            proptest::collection::vec(0u8..10u8, 0..20),
            any::<bool>(),
        )
            .prop_map(|(first, int_rest, frac, neg)| {
                let mut s = String::new();
                if neg {
                    s.push('-');
                }
                s.push(char::from(b'0' + first));
                for d in int_rest {
                    s.push(char::from(b'0' + d));
                }
                if !frac.is_empty() {
                    s.push('.');
                    for d in frac {
                        s.push(char::from(b'0' + d));
                    }
                }
                s
            })
    }

    fn bigfloat() -> impl Strategy<Value = BigFloat> {
        plain_literal().prop_map(|s| s.parse().unwrap())
    }

    fn positive_bigfloat() -> impl Strategy<Value = BigFloat> {
        bigfloat().prop_filter("positive", |v| !v.is_zero() && !v.is_negative())
    }

    /// Digits on which `approx` agrees with the higher-precision oracle.
    fn matching_digits(approx: &BigFloat, oracle: &BigFloat) -> i64 {
        let d = (approx - oracle).abs();
        if d.is_zero() {
            i64::MAX
        } else {
            oracle.exponent() - d.exponent()
        }
    }

    proptest! {
        // Round trips and exact field laws (the precision is far above
        // the operand width, so no truncation is involved).

        #[test]
        fn parse_display_round_trip(s in plain_literal()) {
            set_prec(200);
            let x: BigFloat = s.parse().unwrap();
            let again: BigFloat = x.to_string().parse().unwrap();
            prop_assert_eq!(again, x);
        }

        #[test]
        fn add_commutative(a in bigfloat(), b in bigfloat()) {
            set_prec(200);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in bigfloat(), b in bigfloat(), c in bigfloat()) {
            set_prec(200);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in bigfloat(), b in bigfloat()) {
            set_prec(200);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in bigfloat(), b in bigfloat(), c in bigfloat()) {
            set_prec(200);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn sub_self_is_zero(a in bigfloat()) {
            set_prec(200);
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn compare_matches_difference(a in bigfloat(), b in bigfloat()) {
            set_prec(200);
            let diff = &a - &b;
            prop_assert_eq!(a < b, diff.is_negative() && !diff.is_zero());
        }

        // Newton-Raphson accuracy laws

        #[test]
        fn recip_residual(x in positive_bigfloat(), prec in prop_oneof![Just(24usize), Just(60), Just(130)]) {
            set_prec(prec);
            let inv = x.recip().unwrap();
            let r = (&(&x * &inv) - &BigFloat::one()).abs();
            prop_assert!(
                r.is_zero() || r.exponent() <= -(prec as i64 - 4),
                "residual {:?} at precision {}", r, prec
            );
            prop_assert_eq!(get_prec(), prec);
        }

        #[test]
        fn sqrt_residual(x in positive_bigfloat(), prec in prop_oneof![Just(24usize), Just(60), Just(130)]) {
            set_prec(prec);
            let root = x.sqrt().unwrap();
            let r = (&(&root * &root) - &x).abs();
            let bound = x.exponent() - (prec as i64 - 4);
            prop_assert!(
                r.is_zero() || r.exponent() <= bound,
                "residual {:?} at precision {}", r, prec
            );
        }

        #[test]
        fn sqrt_of_square_recovers(x in positive_bigfloat()) {
            set_prec(80);
            let sq = &x * &x;
            let back = sq.sqrt().unwrap();
            prop_assert!(matching_digits(&back, &x) >= 70);
        }

        // Raising the precision never loses leading digits against a
        // higher-precision oracle.

        #[test]
        fn recip_monotonic_precision(x in positive_bigfloat()) {
            set_prec(160);
            let oracle = x.recip().unwrap();
            let mut last = 0i64;
            for prec in [20usize, 40, 80] {
                set_prec(prec);
                let approx = x.recip().unwrap();
                set_prec(160);
                let m = matching_digits(&approx, &oracle);
                prop_assert!(m >= last, "precision {} lost digits: {} < {}", prec, m, last);
                last = m;
            }
        }

        #[test]
        fn sqrt_monotonic_precision(x in positive_bigfloat()) {
            set_prec(160);
            let oracle = x.sqrt().unwrap();
            let mut last = 0i64;
            for prec in [20usize, 40, 80] {
                set_prec(prec);
                let approx = x.sqrt().unwrap();
                set_prec(160);
                let m = matching_digits(&approx, &oracle);
                prop_assert!(m >= last, "precision {} lost digits: {} < {}", prec, m, last);
                last = m;
            }
        }
    }
}
