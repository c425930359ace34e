//! Property-based tests for big integer arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::bigint::algorithms::{dispatch, karatsuba, schoolbook, toom3, toom4, toom6h};
    use crate::bigint::BigInt;

    // Strategy for decimal digit strings of 1..max_len digits
    fn digit_string(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(0u8..10u8, 1..max_len)
            .prop_map(|ds| ds.iter().map(|d| char::from(b'0' + d)).collect())
    }

    // Strategy for signed big integers with up to max_digits digits
    fn bigint(max_digits: usize) -> impl Strategy<Value = BigInt> {
        (digit_string(max_digits), any::<bool>()).prop_map(|(s, neg)| {
            let v = BigInt::from_decimal_unchecked(&s);
            if neg {
                -v
            } else {
                v
            }
        })
    }

    // Strategy for non-zero big integers
    fn non_zero_bigint(max_digits: usize) -> impl Strategy<Value = BigInt> {
        bigint(max_digits).prop_filter("non-zero", |v| !v.is_zero())
    }

    fn is_canonical(x: &BigInt) -> bool {
        let limbs = x.limbs();
        let no_leading_zero = limbs.len() == 1 || *limbs.last().unwrap() != 0;
        let zero_is_positive = !x.is_zero() || !x.is_negative();
        no_leading_zero && zero_is_positive
    }

    proptest! {
        // Canonical form and round trips

        #[test]
        fn canonical_after_ops(a in bigint(150), b in bigint(150)) {
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            prop_assert!(is_canonical(&(-a)));
        }

        #[test]
        fn parse_display_round_trip(a in bigint(200)) {
            let s = a.to_string();
            prop_assert_eq!(s.parse::<BigInt>().unwrap(), a);
        }

        // Ring axioms

        #[test]
        fn add_commutative(a in bigint(150), b in bigint(150)) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in bigint(120), b in bigint(120), c in bigint(120)) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in bigint(150), b in bigint(150)) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_associative(a in bigint(80), b in bigint(80), c in bigint(80)) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn distributive(a in bigint(100), b in bigint(100), c in bigint(100)) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn additive_inverse(a in bigint(150)) {
            prop_assert_eq!(&a - &a, BigInt::zero());
            prop_assert_eq!(&a + &(-a.clone()), BigInt::zero());
        }

        #[test]
        fn mul_identities(a in bigint(150)) {
            prop_assert_eq!(&a * &BigInt::one(), a.clone());
            prop_assert_eq!(&a * &BigInt::zero(), BigInt::zero());
        }

        #[test]
        fn mul_sign_rules(a in bigint(120), b in bigint(120)) {
            prop_assert_eq!(&a * &(-b.clone()), -(&a * &b));
            prop_assert_eq!(&(-a.clone()) * &(-b.clone()), &a * &b);
        }

        // Every multiplication path agrees, and agrees with dashu

        #[test]
        fn dispatcher_agreement(a in bigint(640), b in bigint(640)) {
            let expected = schoolbook::schoolbook_mul(&a.abs(), &b.abs());
            prop_assert_eq!(karatsuba::karatsuba_mul(&a.abs(), &b.abs()), expected.clone());
            prop_assert_eq!(toom3::toom3_mul(&a.abs(), &b.abs()), expected.clone());
            prop_assert_eq!(toom4::toom4h_mul(&a.abs(), &b.abs()), expected.clone());
            prop_assert_eq!(toom6h::toom6h_mul(&a.abs(), &b.abs()), expected.clone());
            prop_assert_eq!(dispatch::mul(&a.abs(), &b.abs()), expected);
        }

        #[test]
        fn squaring_agreement(a in bigint(640)) {
            let expected = schoolbook::schoolbook_sqr(&a.abs());
            prop_assert_eq!(karatsuba::karatsuba_sqr(&a.abs()), expected.clone());
            prop_assert_eq!(toom3::toom3_sqr(&a.abs()), expected.clone());
            prop_assert_eq!(toom4::toom4_sqr(&a.abs()), expected.clone());
            prop_assert_eq!(toom6h::toom6h_sqr(&a.abs()), expected.clone());
            prop_assert_eq!(dispatch::mul(&a, &a.clone()), expected);
        }

        #[test]
        fn oracle_agreement(a in bigint(400), b in bigint(400)) {
            use dashu::integer::IBig;
            let ours = (&a * &b).to_string();
            let lhs = IBig::from_str_radix(&a.to_string(), 10).unwrap();
            let rhs = IBig::from_str_radix(&b.to_string(), 10).unwrap();
            prop_assert_eq!(ours, (lhs * rhs).to_string());
        }

        // Division

        #[test]
        fn div_mod_identity(x in bigint(260), y in non_zero_bigint(140)) {
            let (q, r) = x.div_rem(&y).unwrap();
            prop_assert_eq!(&(&q * &y) + &r, x.clone());
            prop_assert!(r.abs() < y.abs());
            if !r.is_zero() {
                prop_assert_eq!(r.is_negative(), x.is_negative());
            }
            if !q.is_zero() {
                prop_assert_eq!(q.is_negative(), x.is_negative() != y.is_negative());
            }
        }

        #[test]
        fn pow_splits(a in bigint(12), e1 in 0u64..8, e2 in 0u64..8) {
            prop_assert_eq!(a.pow(e1 + e2), &a.pow(e1) * &a.pow(e2));
        }
    }

    // Toom interpolation against an exact Vandermonde solve
    //
    // Every interpolation formula must produce the unique polynomial that
    // agrees with the pointwise products at the chosen evaluation points.
    // The oracle regenerates the coefficients by Gaussian elimination over
    // exact (unreduced) big rationals and the test also pins both against
    // the naive convolution.
    mod interpolation {
        use super::*;

        #[derive(Clone)]
        struct Frac {
            num: BigInt,
            den: BigInt,
        }

        impl Frac {
            fn from_int(n: BigInt) -> Self {
                Self { num: n, den: BigInt::one() }
            }

            fn sub(&self, other: &Self) -> Self {
                Self {
                    num: &(&self.num * &other.den) - &(&other.num * &self.den),
                    den: &self.den * &other.den,
                }
            }

            fn mul(&self, other: &Self) -> Self {
                Self {
                    num: &self.num * &other.num,
                    den: &self.den * &other.den,
                }
            }

            fn div(&self, other: &Self) -> Self {
                Self {
                    num: &self.num * &other.den,
                    den: &self.den * &other.num,
                }
            }

            fn is_zero(&self) -> bool {
                self.num.is_zero()
            }

            fn to_int(&self) -> BigInt {
                let (q, r) = self.num.div_rem(&self.den).unwrap();
                assert!(r.is_zero(), "solution is not integral");
                q
            }
        }

        /// Solves `rows * z = vals` by elimination over exact fractions.
        fn solve(mut rows: Vec<Vec<Frac>>, mut vals: Vec<Frac>) -> Vec<BigInt> {
            let n = vals.len();
            for col in 0..n {
                let pivot = (col..n)
                    .find(|&r| !rows[r][col].is_zero())
                    .expect("singular interpolation system");
                rows.swap(col, pivot);
                vals.swap(col, pivot);
                for r in col + 1..n {
                    if rows[r][col].is_zero() {
                        continue;
                    }
                    let factor = rows[r][col].div(&rows[col][col]);
                    for c in col..n {
                        let t = rows[col][c].mul(&factor);
                        rows[r][c] = rows[r][c].sub(&t);
                    }
                    let t = vals[col].mul(&factor);
                    vals[r] = vals[r].sub(&t);
                }
            }
            let mut out = vec![BigInt::zero(); n];
            for col in (0..n).rev() {
                let mut acc = vals[col].clone();
                for c in col + 1..n {
                    let t = rows[col][c].mul(&Frac::from_int(out[c].clone()));
                    acc = acc.sub(&t);
                }
                out[col] = acc.div(&rows[col][col]).to_int();
            }
            out
        }

        /// Row of the (possibly scaled) Vandermonde matrix for degree `d`:
        /// a finite point `num/den` scaled by `den^d`.
        fn row(num: i64, den: i64, d: usize) -> Vec<Frac> {
            (0..=d)
                .map(|k| {
                    let mut v = BigInt::one();
                    for _ in 0..k {
                        v = v.mul_small(num.unsigned_abs());
                        if num < 0 {
                            v = -v;
                        }
                    }
                    for _ in 0..(d - k) {
                        v = v.mul_small(den.unsigned_abs());
                    }
                    Frac::from_int(v)
                })
                .collect()
        }

        fn eval(coeffs: &[BigInt], num: i64, den: i64) -> BigInt {
            let d = coeffs.len() - 1;
            let mut acc = BigInt::zero();
            for (k, c) in coeffs.iter().enumerate() {
                let mut term = c.clone();
                for _ in 0..k {
                    term = term.mul_small(num.unsigned_abs());
                    if num < 0 {
                        term = -term;
                    }
                }
                for _ in 0..(d - k) {
                    term = term.mul_small(den.unsigned_abs());
                }
                acc += &term;
            }
            acc
        }

        fn convolve(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
            let mut out = vec![BigInt::zero(); a.len() + b.len() - 1];
            for (i, x) in a.iter().enumerate() {
                for (j, y) in b.iter().enumerate() {
                    out[i + j] += &(x * y);
                }
            }
            out
        }

        fn coeff_strategy(parts: usize) -> impl Strategy<Value = Vec<BigInt>> {
            proptest::collection::vec(0u64..1_000_000_000_000, parts)
                .prop_map(|v| v.into_iter().map(BigInt::from).collect())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn toom3_interpolation(a in coeff_strategy(3), b in coeff_strategy(3)) {
                let d = 4;
                let points = [(1i64, 1i64), (-1, 1), (-2, 1)];
                let products: Vec<BigInt> = points
                    .iter()
                    .map(|&(n, c)| {
                        // both operand scales multiply into den^d for c=1
                        &eval(&a, n, c) * &eval(&b, n, c)
                    })
                    .collect();
                let v0 = &a[0] * &b[0];
                let vinf = &a[2] * &b[2];

                let got = toom3::interpolate(
                    v0.clone(),
                    products[0].clone(),
                    products[1].clone(),
                    products[2].clone(),
                    vinf.clone(),
                );

                let mut rows = vec![row(0, 1, d)];
                let mut vals = vec![Frac::from_int(v0)];
                for (&(n, c), p) in points.iter().zip(&products) {
                    rows.push(row(n, c, d));
                    vals.push(Frac::from_int(p.clone()));
                }
                let mut inf_row = vec![Frac::from_int(BigInt::zero()); d + 1];
                inf_row[d] = Frac::from_int(BigInt::one());
                rows.push(inf_row);
                vals.push(Frac::from_int(vinf));

                let oracle = solve(rows, vals);
                prop_assert_eq!(&got[..], &oracle[..]);
                prop_assert_eq!(&got[..], &convolve(&a, &b)[..]);
            }

            #[test]
            fn toom4_mul_interpolation(a in coeff_strategy(4), b in coeff_strategy(4)) {
                let d = 6;
                // (num, den): half points are evaluated with the 2^3
                // operand scale, giving a 2^6 product scale.
                let points = [(1i64, 1i64), (-1, 1), (2, 1), (-2, 1), (1, 2), (-1, 2)];
                let products: Vec<BigInt> = points
                    .iter()
                    .map(|&(n, c)| {
                        let half = |p: &[BigInt]| {
                            let mut acc = BigInt::zero();
                            for (k, coeff) in p.iter().enumerate() {
                                let mut term = coeff.clone();
                                for _ in 0..k {
                                    term = term.mul_small(n.unsigned_abs());
                                    if n < 0 {
                                        term = -term;
                                    }
                                }
                                for _ in 0..(p.len() - 1 - k) {
                                    term = term.mul_small(c.unsigned_abs() as u64);
                                }
                                acc += &term;
                            }
                            acc
                        };
                        &half(&a) * &half(&b)
                    })
                    .collect();
                let v0 = &a[0] * &b[0];

                let got = toom4::interpolate_mul(
                    v0.clone(),
                    products[0].clone(),
                    products[1].clone(),
                    products[2].clone(),
                    products[3].clone(),
                    products[4].clone(),
                    products[5].clone(),
                );

                let mut rows = vec![row(0, 1, d)];
                let mut vals = vec![Frac::from_int(v0)];
                for (&(n, c), p) in points.iter().zip(&products) {
                    rows.push(row(n, c, d));
                    vals.push(Frac::from_int(p.clone()));
                }
                let oracle = solve(rows, vals);
                prop_assert_eq!(&got[..], &oracle[..]);
                prop_assert_eq!(&got[..], &convolve(&a, &b)[..]);
            }

            #[test]
            fn toom6h_interpolation(a in coeff_strategy(6), b in coeff_strategy(6)) {
                let d = 10;
                let points = [
                    (1i64, 1i64), (-1, 1), (2, 1), (-2, 1), (3, 1), (-3, 1),
                    (1, 2), (-1, 2), (1, 3), (-1, 3),
                ];
                let scaled_eval = |p: &[BigInt], n: i64, c: i64| {
                    let mut acc = BigInt::zero();
                    for (k, coeff) in p.iter().enumerate() {
                        let mut term = coeff.clone();
                        for _ in 0..k {
                            term = term.mul_small(n.unsigned_abs());
                            if n < 0 {
                                term = -term;
                            }
                        }
                        for _ in 0..(p.len() - 1 - k) {
                            term = term.mul_small(c.unsigned_abs() as u64);
                        }
                        acc += &term;
                    }
                    acc
                };
                let products: Vec<BigInt> = points
                    .iter()
                    .map(|&(n, c)| &scaled_eval(&a, n, c) * &scaled_eval(&b, n, c))
                    .collect();
                let v0 = &a[0] * &b[0];

                let got = toom6h::interpolate(toom6h::Products6 {
                    v0: v0.clone(),
                    p1: products[0].clone(),
                    m1: products[1].clone(),
                    p2: products[2].clone(),
                    m2: products[3].clone(),
                    p3: products[4].clone(),
                    m3: products[5].clone(),
                    hp: products[6].clone(),
                    hm: products[7].clone(),
                    tp: products[8].clone(),
                    tm: products[9].clone(),
                });

                let mut rows = vec![row(0, 1, d)];
                let mut vals = vec![Frac::from_int(v0)];
                for (&(n, c), p) in points.iter().zip(&products) {
                    rows.push(row(n, c, d));
                    vals.push(Frac::from_int(p.clone()));
                }
                let oracle = solve(rows, vals);
                prop_assert_eq!(&got[..], &oracle[..]);
                prop_assert_eq!(&got[..], &convolve(&a, &b)[..]);
            }
        }
    }
}
