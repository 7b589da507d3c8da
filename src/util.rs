use crate::constants::WILDCARD;

/// Returns `true` when `values` holds the `*` sentinel verbatim.
///
/// Entries are compared exactly: `" * "` or `"**"` are ordinary values.
pub fn contains_wildcard<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().any(|value| value.as_ref() == WILDCARD)
}

pub(crate) fn join_braced(values: &[String]) -> String {
    let mut rendered = String::with_capacity(values.iter().map(String::len).sum::<usize>() + 2);
    rendered.push('{');
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            rendered.push(',');
        }
        rendered.push_str(value);
    }
    rendered.push('}');
    rendered
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
