//! Predicates passed around as values, and a filter that takes one.

use super::model::{Int};

/// Lazily yields the items of `items` for which `condition` holds, in order.
pub fn where_matching<T, I, C>(items: I, condition: C) -> impl Iterator<Item=T>
where
    I: IntoIterator<Item=T>,
    C: Fn(&T) -> bool,
{
    items.into_iter().filter(move |item| condition(item))
}

// ----------------------------------------------------------------------------

pub fn is_even(x: &Int) -> bool { x % 2 == 0 }

pub fn is_odd(x: &Int) -> bool { x % 2 != 0 }

/// Returns a condition that holds for numbers strictly greater than `n`.
pub fn greater_than(n: Int) -> impl Fn(&Int) -> bool + Copy { move |x: &Int| *x > n }

/// Trial division by odd numbers up to the square root.
pub fn is_prime(x: &Int) -> bool {
    let x = *x;
    if x < 2 { return false; }
    if x == 2 { return true; }
    if x % 2 == 0 { return false; }
    let mut i: Int = 3;
    while i <= x / i {
        if x % i == 0 { return false; }
        i += 2;
    }
    true
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::{Cell};

    use super::*;

    fn matching(condition: impl Fn(&Int) -> bool) -> Vec<Int> {
        where_matching(1..=100, condition).collect()
    }

    #[test]
    fn parity() {
        let evens = matching(is_even);
        assert_eq!(evens.len(), 50);
        assert_eq!(evens[..3], [2, 4, 6]);
        let odds = matching(is_odd);
        assert_eq!(odds.len(), 50);
        assert_eq!(odds[..3], [1, 3, 5]);
        assert!(is_odd(&-3));
        assert!(is_even(&-4));
    }

    #[test]
    fn threshold() {
        let big = matching(greater_than(50));
        assert_eq!(big.len(), 50);
        assert_eq!(big.first(), Some(&51));
        assert_eq!(big.last(), Some(&100));
    }

    #[test]
    fn primes() {
        let primes = matching(is_prime);
        assert_eq!(primes.len(), 25);
        assert_eq!(primes[..10], [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(primes.last(), Some(&97));
        assert!(!is_prime(&1));
        assert!(!is_prime(&0));
        assert!(!is_prime(&-7));
        assert!(!is_prime(&49));
        assert!(is_prime(&7919));
    }

    #[test]
    fn condition_list() {
        let conditions: [&dyn Fn(&Int) -> bool; 4] = [&is_even, &is_odd, &greater_than(50), &is_prime];
        let counts: Vec<usize> = conditions.iter()
            .map(|condition| where_matching(1..=100, condition).count())
            .collect();
        assert_eq!(counts, [50, 50, 50, 25]);
    }

    #[test]
    fn lazy() {
        let seen = Cell::new(0);
        let mut iter = where_matching(1..=100, |x: &Int| { seen.set(seen.get() + 1); *x % 10 == 0 });
        assert_eq!(iter.next(), Some(10));
        assert_eq!(seen.get(), 10);
    }

    #[test]
    fn other_types() {
        let words = ["apple", "kiwi", "banana"];
        let long: Vec<&str> = where_matching(words, |w: &&str| w.len() > 4).collect();
        assert_eq!(long, ["apple", "banana"]);
    }
}
