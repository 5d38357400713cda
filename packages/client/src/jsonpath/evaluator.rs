//! Selector evaluation over parsed JSON values
//!
//! Applies a compiled selector chain to a `serde_json::Value`, borrowing
//! nodes from the input. Structural misses (absent properties, out-of-range
//! indices, traversal into scalars) produce no matches rather than errors,
//! so evaluation itself is infallible.

use std::borrow::Cow;

use serde_json::Value;

use super::ast::{ComparisonOp, FilterExpression, FilterValue, LogicalOp, PathSelector};

/// Evaluate a selector chain against a root value
///
/// Matches come back in document order: object members in key order, array
/// elements in index order, descent in pre-order.
pub(crate) fn evaluate<'a>(selectors: &[PathSelector], root: &'a Value) -> Vec<&'a Value> {
    let mut current: Vec<&'a Value> = vec![root];
    for selector in selectors {
        if current.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for node in current {
            apply(selector, node, &mut next);
        }
        current = next;
    }
    current
}

fn apply<'a>(selector: &PathSelector, node: &'a Value, out: &mut Vec<&'a Value>) {
    match selector {
        PathSelector::Root => out.push(node),
        PathSelector::Child { name } => {
            if let Value::Object(object) = node
                && let Some(child) = object.get(name)
            {
                out.push(child);
            }
        }
        PathSelector::Index { index } => {
            if let Value::Array(array) = node
                && let Some(element) = resolve_index(array, *index)
            {
                out.push(element);
            }
        }
        PathSelector::Wildcard => match node {
            Value::Object(object) => out.extend(object.values()),
            Value::Array(array) => out.extend(array.iter()),
            _ => {}
        },
        PathSelector::Slice { start, end, step } => {
            if let Value::Array(array) = node {
                slice(array, *start, *end, *step, out);
            }
        }
        PathSelector::Filter { predicate } => match node {
            Value::Array(array) => {
                out.extend(array.iter().filter(|element| matches(predicate, element)));
            }
            Value::Object(object) => {
                out.extend(object.values().filter(|member| matches(predicate, member)));
            }
            _ => {}
        },
        PathSelector::RecursiveDescent => descend(node, out),
    }
}

/// Pre-order walk pushing a node and all of its descendants
fn descend<'a>(node: &'a Value, out: &mut Vec<&'a Value>) {
    out.push(node);
    match node {
        Value::Object(object) => {
            for child in object.values() {
                descend(child, out);
            }
        }
        Value::Array(array) => {
            for child in array {
                descend(child, out);
            }
        }
        _ => {}
    }
}

fn resolve_index(array: &[Value], index: i64) -> Option<&Value> {
    let len = i64::try_from(array.len()).ok()?;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok().and_then(|i| array.get(i))
    } else {
        None
    }
}

/// Pick slice elements using the usual normalized-bounds rules; a zero step
/// selects nothing
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
fn slice<'a>(
    array: &'a [Value],
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
    out: &mut Vec<&'a Value>,
) {
    let len = array.len() as i64;
    let step = step.unwrap_or(1);
    if len == 0 || step == 0 {
        return;
    }
    let normalize = |i: i64| if i >= 0 { i } else { len + i };
    if step > 0 {
        let lower = normalize(start.unwrap_or(0)).clamp(0, len);
        let upper = normalize(end.unwrap_or(len)).clamp(0, len);
        let mut i = lower;
        while i < upper {
            out.push(&array[i as usize]);
            i += step;
        }
    } else {
        let upper = normalize(start.unwrap_or(len - 1)).clamp(-1, len - 1);
        let lower = normalize(end.unwrap_or(-len - 1)).clamp(-1, len - 1);
        let mut i = upper;
        while i > lower {
            out.push(&array[i as usize]);
            i += step;
        }
    }
}

/// Evaluate a filter predicate against one candidate element
fn matches(predicate: &FilterExpression, current: &Value) -> bool {
    match predicate {
        FilterExpression::Current => true,
        FilterExpression::Property { path } => resolve_path(current, path).is_some(),
        FilterExpression::Literal { value } => truthy(value),
        FilterExpression::Comparison {
            left,
            operator,
            right,
        } => compare(
            resolve_operand(left, current),
            *operator,
            resolve_operand(right, current),
        ),
        FilterExpression::Logical {
            left,
            operator,
            right,
        } => match operator {
            LogicalOp::And => matches(left, current) && matches(right, current),
            LogicalOp::Or => matches(left, current) || matches(right, current),
        },
    }
}

fn resolve_path<'a>(current: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut node = current;
    for name in path {
        node = node.as_object()?.get(name)?;
    }
    Some(node)
}

/// Resolve a comparison operand; `None` means the operand is absent on the
/// element under test
fn resolve_operand<'a>(expr: &FilterExpression, current: &'a Value) -> Option<Cow<'a, Value>> {
    match expr {
        FilterExpression::Current => Some(Cow::Borrowed(current)),
        FilterExpression::Property { path } => resolve_path(current, path).map(Cow::Borrowed),
        FilterExpression::Literal { value } => Some(Cow::Owned(literal_value(value))),
        _ => None,
    }
}

fn literal_value(value: &FilterValue) -> Value {
    match value {
        FilterValue::String(s) => Value::String(s.clone()),
        FilterValue::Integer(i) => Value::from(*i),
        FilterValue::Number(n) => serde_json::Number::from_f64(*n)
            .map_or(Value::Null, Value::Number),
        FilterValue::Boolean(b) => Value::Bool(*b),
        FilterValue::Null => Value::Null,
    }
}

fn truthy(value: &FilterValue) -> bool {
    match value {
        FilterValue::Boolean(b) => *b,
        FilterValue::Null => false,
        _ => true,
    }
}

/// Compare two operands; absent operands compare equal to each other and
/// unequal to everything present, every other comparison with an absent
/// side is false
fn compare(
    left: Option<Cow<'_, Value>>,
    operator: ComparisonOp,
    right: Option<Cow<'_, Value>>,
) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => ordered(left.as_ref(), operator, right.as_ref()),
        (None, None) => matches!(operator, ComparisonOp::Equal),
        _ => matches!(operator, ComparisonOp::NotEqual),
    }
}

fn ordered(left: &Value, operator: ComparisonOp, right: &Value) -> bool {
    if matches!(operator, ComparisonOp::Equal) {
        return values_equal(left, right);
    }
    if matches!(operator, ComparisonOp::NotEqual) {
        return !values_equal(left, right);
    }
    let ordering = match (left, right) {
        (Value::String(l), Value::String(r)) => l.cmp(r),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(l), Some(r)) => match l.partial_cmp(&r) {
                Some(ordering) => ordering,
                None => return false,
            },
            _ => return false,
        },
    };
    match operator {
        ComparisonOp::Less => ordering.is_lt(),
        ComparisonOp::LessEq => ordering.is_le(),
        ComparisonOp::Greater => ordering.is_gt(),
        ComparisonOp::GreaterEq => ordering.is_ge(),
        ComparisonOp::Equal | ComparisonOp::NotEqual => ordering.is_eq(),
    }
}

/// Numeric equality crosses the integer and float representations
fn values_equal(left: &Value, right: &Value) -> bool {
    if left.is_number() && right.is_number() {
        return match (left.as_f64(), right.as_f64()) {
            (Some(l), Some(r)) => l == r,
            _ => left == right,
        };
    }
    left == right
}
