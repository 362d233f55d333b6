use std::fmt::Display;

/// Declared type of a variable. There are exactly two, fixed by the
/// declarations section of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Int,
    Float,
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The language's own spelling, so diagnostics read like the source.
        match self {
            VarType::Int => write!(f, "INT"),
            VarType::Float => write!(f, "REAL"),
        }
    }
}
