use proptest::prelude::*;


pub(crate) fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,7}"
}

pub(crate) fn simple_number_strategy() -> impl Strategy<Value = (String, i64)> {
    (0i64..=100).prop_map(|n| (n.to_string(), n))
}

pub(crate) fn parenthesized_strategy(
    inner: impl Strategy<Value = (String, i64)>
) -> impl Strategy<Value = (String, i64)> {
    inner.prop_map(|(expr, value)| (format!("({})", expr), value))
}

/// Fully parenthesized operations, so the expected value does not depend on precedence.
pub(crate) fn binary_operation_strategy(
    left: impl Strategy<Value = (String, i64)>,
    right: impl Strategy<Value = (String, i64)>
) -> impl Strategy<Value = (String, i64)> {
    (
        left,
        prop_oneof![Just('+'), Just('-'), Just('*')],
        right
    ).prop_map(|((l, l_value), op, (r, r_value))| {
        let value = match op {
            '+' => l_value + r_value,
            '-' => l_value - r_value,
            _ => l_value * r_value,
        };

        (format!("({} {} {})", l, op, r), value)
    })
}

/// Arithmetic expressions over `+`, `-` and `*` paired with their value.
///
/// At most 8 leaves of at most 100, so the value always fits an `i64`.
pub(crate) fn arithmetic_strategy() -> impl Strategy<Value = (String, i64)> {
    simple_number_strategy().prop_recursive(3, 8, 2, |inner| {
        prop_oneof![
            parenthesized_strategy(inner.clone()),
            binary_operation_strategy(inner.clone(), inner),
        ]
    })
}

/// Unparenthesized chains over `+ - * / ^` paired with their value under
/// the usual precedence, or `None` when an intermediate result overflows.
///
/// Operands are positive, so every divisor is a power chain of at least 1.
pub(crate) fn operator_chain_strategy() -> impl Strategy<Value = (String, Option<i64>)> {
    (
        1i64..=6,
        prop::collection::vec((prop::sample::select(vec!['+', '-', '*', '/', '^']), 1i64..=6), 0..8)
    ).prop_map(|(first, rest)| {
        let expr = rest.iter()
            .fold(first.to_string(), |expr, (op, n)| format!("{} {} {}", expr, op, n));

        (expr, precedence_value(first, &rest))
    })
}

/// Groups the chain into sums of products of power chains and folds each
/// level left to right, innermost first.
fn precedence_value(first: i64, rest: &[(char, i64)]) -> Option<i64> {
    let mut sum: Vec<(char, Vec<(char, Vec<i64>)>)> = vec![('+', vec![('*', vec![first])])];

    for &(op, n) in rest {
        match op {
            '^' => sum.last_mut()?.1.last_mut()?.1.push(n),
            '*' | '/' => sum.last_mut()?.1.push((op, vec![n])),
            _ => sum.push((op, vec![('*', vec![n])])),
        }
    }

    sum.iter().try_fold(0i64, |total, (sign, product)| {
        let value = product.iter().try_fold(1i64, |acc, (op, chain)| {
            let power = chain[1..].iter()
                .try_fold(chain[0], |base, &e| base.checked_pow(u32::try_from(e).ok()?))?;

            match op {
                '*' => acc.checked_mul(power),
                _ => acc.checked_div(power),
            }
        })?;

        match sign {
            '+' => total.checked_add(value),
            _ => total.checked_sub(value),
        }
    })
}
