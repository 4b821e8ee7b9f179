//! Value rendering.

use mal_stack::ensure_sufficient_stack;
use mal_value::Value;

/// Render `value` to text.
pub fn render(value: &Value, readable: bool) -> String {
    let mut printer = Printer::new(readable);
    printer.value(value);
    printer.finish()
}

/// Render each value and join the results with `separator`.
pub fn render_all(values: &[Value], readable: bool, separator: &str) -> String {
    let mut printer = Printer::new(readable);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            printer.out.push_str(separator);
        }
        printer.value(value);
    }
    printer.finish()
}

/// Canonical decimal text for a number.
///
/// Integral values have no fractional part (`3`, not `3.0`); everything
/// else uses the shortest text that parses back to the same `f64`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{n}")
    }
}

/// Accumulating printer.
pub struct Printer {
    out: String,
    readable: bool,
}

impl Printer {
    pub fn new(readable: bool) -> Self {
        Printer {
            out: String::new(),
            readable,
        }
    }

    /// Append the rendering of `value`.
    pub fn value(&mut self, value: &Value) {
        match value {
            Value::Number(n) => self.out.push_str(&format_number(*n)),
            Value::Symbol(name) => self.out.push_str(name),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Nil => self.out.push_str("nil"),
            Value::Str(text) => {
                if self.readable {
                    self.escaped(text);
                } else {
                    self.out.push_str(text);
                }
            }
            Value::List(items) => {
                self.out.push('(');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    ensure_sufficient_stack(|| self.value(item));
                }
                self.out.push(')');
            }
            Value::Closure(_) => self.out.push_str("#<function>"),
            Value::NativeFunction(native) => {
                self.out.push_str("#<native ");
                self.out.push_str(native.name());
                self.out.push('>');
            }
        }
    }

    fn escaped(&mut self, text: &str) {
        self.out.reserve(text.len() + 2);
        self.out.push('"');
        for c in text.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '"' => self.out.push_str("\\\""),
                _ => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    pub fn finish(self) -> String {
        self.out
    }
}
