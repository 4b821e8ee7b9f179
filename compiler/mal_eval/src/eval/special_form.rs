/// Operators the evaluator handles itself instead of applying.
///
/// Recognized by symbol name in operator position only, and before any
/// environment lookup, so they cannot be shadowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialForm {
    Def,
    Let,
    Do,
    If,
    Fn,
}

impl SpecialForm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "def!" => Some(SpecialForm::Def),
            "let*" => Some(SpecialForm::Let),
            "do" => Some(SpecialForm::Do),
            "if" => Some(SpecialForm::If),
            "fn*" => Some(SpecialForm::Fn),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Def => "def!",
            SpecialForm::Let => "let*",
            SpecialForm::Do => "do",
            SpecialForm::If => "if",
            SpecialForm::Fn => "fn*",
        }
    }
}
