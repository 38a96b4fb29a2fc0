/// The `Operator` enum represents each of the possible math operators
/// that can be on a cage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// The operator of a single-cell cage; the target is the cell value
    Nop,
}

impl Operator {
    /// Retrieve the character representation of the operator
    pub fn symbol(self) -> Option<char> {
        let symbol = match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Nop => return None,
        };
        Some(symbol)
    }
}
