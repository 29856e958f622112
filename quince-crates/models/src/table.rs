//! Generators for the satisfying tuples of common relations.
//!
//! Every generator takes the domains of the scope (in scope order) and returns the tuples in
//! lexicographic order of the domains, ready for
//! [`Constraint::add_satisfying_tuples`](quince_core::constraints::Constraint::add_satisfying_tuples).

use itertools::Itertools;

/// The tuples over the Cartesian product of `domains` for which `predicate` holds.
///
/// Enumerates the complete product, so this is only suitable for small scopes.
pub fn tuples_satisfying(
    domains: &[&[i32]],
    predicate: impl Fn(&[i32]) -> bool,
) -> Vec<Vec<i32>> {
    if domains.is_empty() {
        return if predicate(&[]) { vec![vec![]] } else { vec![] };
    }

    domains
        .iter()
        .map(|domain| domain.iter().copied())
        .multi_cartesian_product()
        .filter(|tuple| predicate(tuple.as_slice()))
        .collect()
}

/// The pairs `(a, b)` with `a != b`.
pub fn not_equal_tuples(first: &[i32], second: &[i32]) -> Vec<[i32; 2]> {
    first
        .iter()
        .cartesian_product(second)
        .filter(|(a, b)| a != b)
        .map(|(a, b)| [*a, *b])
        .collect()
}

/// The tuples in which every value is distinct.
pub fn all_different_tuples(domains: &[&[i32]]) -> Vec<Vec<i32>> {
    let mut tuples = vec![];
    extend_all_different(domains, &mut Vec::with_capacity(domains.len()), &mut tuples);
    tuples
}

fn extend_all_different(domains: &[&[i32]], prefix: &mut Vec<i32>, tuples: &mut Vec<Vec<i32>>) {
    let Some((domain, remaining)) = domains.split_first() else {
        tuples.push(prefix.clone());
        return;
    };

    for &value in domain.iter() {
        if prefix.contains(&value) {
            continue;
        }
        prefix.push(value);
        extend_all_different(remaining, prefix, tuples);
        let _ = prefix.pop();
    }
}

/// The tuples whose values sum to `total`.
pub fn sum_tuples(domains: &[&[i32]], total: i32) -> Vec<Vec<i32>> {
    // The smallest and largest sum achievable by the domains from each position onwards.
    let mut bounds = vec![(0, 0); domains.len() + 1];
    for (index, domain) in domains.iter().enumerate().rev() {
        let (lower, upper) = bounds[index + 1];
        let (min, max) = match domain.iter().minmax().into_option() {
            Some((min, max)) => (*min, *max),
            None => return vec![],
        };
        bounds[index] = (lower + min, upper + max);
    }

    let mut tuples = vec![];
    extend_sum(domains, &bounds, total, &mut Vec::with_capacity(domains.len()), &mut tuples);
    tuples
}

fn extend_sum(
    domains: &[&[i32]],
    bounds: &[(i32, i32)],
    remaining_total: i32,
    prefix: &mut Vec<i32>,
    tuples: &mut Vec<Vec<i32>>,
) {
    let (lower, upper) = bounds[0];
    if remaining_total < lower || remaining_total > upper {
        return;
    }
    let Some((domain, remaining)) = domains.split_first() else {
        tuples.push(prefix.clone());
        return;
    };

    for &value in domain.iter() {
        prefix.push(value);
        extend_sum(remaining, &bounds[1..], remaining_total - value, prefix, tuples);
        let _ = prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_equal_excludes_the_diagonal() {
        assert_eq!(
            not_equal_tuples(&[1, 2], &[1, 2, 3]),
            vec![[1, 2], [1, 3], [2, 1], [2, 3]]
        );
    }

    #[test]
    fn all_different_over_fixed_and_free_positions() {
        assert_eq!(
            all_different_tuples(&[&[1], &[0, 1, 2], &[0, 1, 2]]),
            vec![vec![1, 0, 2], vec![1, 2, 0]]
        );
    }

    #[test]
    fn all_different_matches_the_exhaustive_enumeration() {
        let domains: [&[i32]; 3] = [&[0, 1, 2, 3], &[1, 2], &[0, 2, 3]];

        assert_eq!(
            all_different_tuples(&domains),
            tuples_satisfying(&domains, |tuple| tuple.iter().all_unique())
        );
    }

    #[test]
    fn sum_matches_the_exhaustive_enumeration() {
        let domains: [&[i32]; 4] = [&[0, 1, 2, 3], &[5], &[0, 9], &[2, 3, 4]];

        for total in 0..25 {
            assert_eq!(
                sum_tuples(&domains, total),
                tuples_satisfying(&domains, |tuple| tuple.iter().sum::<i32>() == total)
            );
        }
    }

    #[test]
    fn unreachable_sum_has_no_tuples() {
        assert!(sum_tuples(&[&[0, 1], &[0, 1]], 3).is_empty());
    }

    #[test]
    fn empty_domain_has_no_tuples() {
        assert!(sum_tuples(&[&[0, 1], &[]], 1).is_empty());
        assert!(all_different_tuples(&[&[0, 1], &[]]).is_empty());
    }

    #[test]
    fn empty_scope_has_the_empty_tuple() {
        assert_eq!(sum_tuples(&[], 0), vec![Vec::<i32>::new()]);
        assert!(sum_tuples(&[], 1).is_empty());
    }
}
