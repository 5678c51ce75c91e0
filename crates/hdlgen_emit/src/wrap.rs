//! Column-width wrapping helpers for generated Python text.
//!
//! Three continuation styles occur in the generated files: quoted-string
//! continuation inside the iverilog command, aligned-quote continuation in
//! namedtuple name lists, and plain offset continuation in call argument
//! lists. All of them break a line only when the next piece would push the
//! current line past [`MAX_WIDTH`].

/// Maximum line width of generated Python text.
pub const MAX_WIDTH: usize = 79;

/// Length of the last line of `text`.
pub fn last_line_len(text: &str) -> usize {
    text.rsplit('\n').next().unwrap_or("").len()
}

/// Appends `add` to `out`, inserting `continuation` first when the current
/// line would otherwise exceed [`MAX_WIDTH`].
pub fn push_wrapped(out: &mut String, add: &str, continuation: &str) {
    if last_line_len(out) + add.len() > MAX_WIDTH {
        out.push_str(continuation);
    }
    out.push_str(add);
}

/// Appends comma-separated names to `start`, breaking before any name that
/// would push the current line past [`MAX_WIDTH`]. Continuation lines are
/// indented to the column where the first name started.
pub fn append_names(start: &str, names: &[&str]) -> String {
    let mut out = start.to_string();
    let continuation = format!("\n{}", " ".repeat(last_line_len(start)));
    for (i, name) in names.iter().enumerate() {
        let add = if i + 1 == names.len() {
            (*name).to_string()
        } else {
            format!("{name}, ")
        };
        push_wrapped(&mut out, &add, &continuation);
    }
    out
}

/// Renders a Python namedtuple constructor such as
/// `Ports = namedtuple('ports', 'clk, rst, count')`.
///
/// Long name lists wrap using implicit string concatenation, with the
/// continuation quote aligned under the opening one:
///
/// ```text
/// Ports = namedtuple('ports', 'clk, rst, '
///                             'count')
/// ```
pub fn named_tuple(binding: &str, tuple_name: &str, names: &[&str]) -> String {
    let mut out = format!("{binding} = namedtuple('{tuple_name}', ");
    let continuation = format!("'\n{}'", " ".repeat(last_line_len(&out)));
    out.push('\'');
    if names.is_empty() {
        out.push_str("')");
        return out;
    }
    for (i, name) in names.iter().enumerate() {
        let add = if i + 1 == names.len() {
            format!("{name}')")
        } else {
            format!("{name}, ")
        };
        push_wrapped(&mut out, &add, &continuation);
    }
    out
}

/// Appends call arguments joined by `, ` and closed with `)`, wrapping
/// with a plain `offset` continuation aligned under the opening
/// parenthesis.
pub fn push_call_args(out: &mut String, names: &[&str], offset: &str) {
    if names.is_empty() {
        out.push(')');
        return;
    }
    let continuation = format!("\n{offset}");
    for (i, name) in names.iter().enumerate() {
        let add = if i + 1 == names.len() {
            format!("{name})")
        } else {
            format!("{name}, ")
        };
        push_wrapped(out, &add, &continuation);
    }
}
