/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the closed `Stmt` / `Expr` families
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
