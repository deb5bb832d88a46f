//! Utility macros for the interpreter.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's matched text
/// * `$span` - The source span
/// * `$literal` - The decoded payload, `Literal::None` for most kinds
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Num, "42".to_string(), span, Literal::Int(42));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr, $literal:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            literal: $literal,
        }
    };
}
