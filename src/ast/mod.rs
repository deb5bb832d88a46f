/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed set of expression and statement shapes
/// - visitor: The `Visitor` trait and the `accept` dispatch for every shape
pub mod ast;
pub mod visitor;
