use super::QueryError;

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

/// Comparison operator of a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    GreaterThan,
    LessThan,
    Equals,
}

impl Operator {
    /// Scan order for condition parsing: `>` before `<` before `=`.
    const SCAN_ORDER: [Operator; 3] = [
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::Equals,
    ];

    /// The single-character symbol of this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::GreaterThan => '>',
            Operator::LessThan => '<',
            Operator::Equals => '=',
        }
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// A parsed filter condition: `column operator literal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub literal: String,
}

impl Condition {
    /// Parse a raw condition such as `price>500` or `brand=xiaomi`.
    ///
    /// Operators are single characters, tried in the fixed order `>`, `<`,
    /// `=`; the string is split at the first occurrence of the first
    /// operator it contains, and both sides are trimmed.  A consequence of
    /// the one-character grammar: `price>=500` splits at `>` and the literal
    /// is `=500`.
    pub fn parse(raw: &str) -> Result<Condition, QueryError> {
        for op in Operator::SCAN_ORDER {
            if let Some((column, literal)) = raw.split_once(op.symbol()) {
                return Ok(Condition {
                    column: column.trim().to_string(),
                    operator: op,
                    literal: literal.trim().to_string(),
                });
            }
        }
        Err(QueryError::MalformedCondition(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_greater_than() {
        let c = Condition::parse("price>500").unwrap();
        assert_eq!(c.column, "price");
        assert_eq!(c.operator, Operator::GreaterThan);
        assert_eq!(c.literal, "500");
    }

    #[test]
    fn parses_less_than() {
        let c = Condition::parse("price<300").unwrap();
        assert_eq!(c.column, "price");
        assert_eq!(c.operator, Operator::LessThan);
        assert_eq!(c.literal, "300");
    }

    #[test]
    fn parses_equals() {
        let c = Condition::parse("brand=xiaomi").unwrap();
        assert_eq!(c.column, "brand");
        assert_eq!(c.operator, Operator::Equals);
        assert_eq!(c.literal, "xiaomi");
    }

    #[test]
    fn trims_both_sides() {
        let c = Condition::parse("  price > 500 ").unwrap();
        assert_eq!(c.column, "price");
        assert_eq!(c.literal, "500");
    }

    #[test]
    fn no_operator_is_malformed() {
        assert_eq!(
            Condition::parse("price500"),
            Err(QueryError::MalformedCondition("price500".to_string()))
        );
        assert_eq!(
            Condition::parse(""),
            Err(QueryError::MalformedCondition(String::new()))
        );
    }

    // `>` wins over `=`, so the `=` stays in the literal.
    #[test]
    fn greater_equal_splits_at_greater() {
        let c = Condition::parse("price>=500").unwrap();
        assert_eq!(c.operator, Operator::GreaterThan);
        assert_eq!(c.literal, "=500");
    }

    #[test]
    fn empty_literal_is_accepted() {
        let c = Condition::parse("price>").unwrap();
        assert_eq!(c.column, "price");
        assert_eq!(c.literal, "");
    }
}
