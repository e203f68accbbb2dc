#[macro_use]
extern crate delta_sigma;

use delta_sigma::{add, from_count, is_zero, multiply, predecessor, successor, zero, Numeral};


// Small enough to check exhaustively instead of sampling.
const SMALL: i64 = 12;

fn n(k: i64) -> Numeral {
    from_count(k).unwrap()
}

fn small() -> impl Iterator<Item = Numeral> {
    (0..SMALL).map(n)
}


#[test]
fn is_zero_only_at_zero() {
    for k in 0..SMALL {
        assert_eq!(is_zero(&n(k)), k == 0);
    }
}

#[test]
fn predecessor_inverts_successor() {
    for a in small() {
        assert_eq!(predecessor(successor(a.clone())).unwrap(), a);
    }
}

#[test]
fn zero_is_an_identity_on_both_sides() {
    for a in small() {
        assert_eq!(add(a.clone(), &zero()), a);
        assert_eq!(add(zero(), &a), a);
    }
}

#[test]
fn successor_moves_out_of_addition() {
    for a in small() {
        for b in small() {
            assert_eq!(add(a.clone(), &successor(b.clone())), successor(add(a.clone(), &b)));
        }
    }
}

#[test]
fn addition_commutes() {
    for a in small() {
        for b in small() {
            assert_eq!(add(a.clone(), &b), add(b.clone(), &a));
        }
    }
}

#[test]
fn addition_associates() {
    for a in small() {
        for b in small() {
            for c in small() {
                assert_eq!(add(add(a.clone(), &b), &c), add(a.clone(), &add(b.clone(), &c)));
            }
        }
    }
}

#[test]
fn zero_absorbs_multiplication() {
    for a in small() {
        assert_eq!(multiply(&a, &zero()), zero());
        assert_eq!(multiply(&zero(), &a), zero());
    }
}

#[test]
fn multiplication_commutes_and_distributes() {
    for a in small() {
        for b in small() {
            assert_eq!(multiply(&a, &b), multiply(&b, &a));
            for c in small() {
                let lhs = multiply(&a, &add(b.clone(), &c));
                let rhs = add(multiply(&a, &b), &multiply(&a, &c));
                assert_eq!(lhs, rhs);
            }
        }
    }
}

#[test]
fn agrees_with_machine_arithmetic() {
    for a in 0..SMALL {
        for b in 0..SMALL {
            assert_eq!(add(n(a), &n(b)).reify(), (a + b) as usize);
            assert_eq!(multiply(&n(a), &n(b)).reify(), (a * b) as usize);
        }
    }
}

#[test]
fn two_and_three() {
    let (two, three) = (numeral!((S (S Z))), numeral!((S (S (S Z)))));
    assert_eq!(add(two.clone(), &three), n(5));
    assert_eq!(multiply(&two, &three), n(6));
    assert_eq!(two + three, n(5));
}

#[test]
fn numerals_of_every_size_drop() {
    drop(zero());
    drop(n(0));
    drop(n(1));
    for a in small() {
        drop(a);
    }
    drop(n(100_000));
}
