//! Noyau d'évaluation (flottant, grammaire fermée)
//!
//! Organisation interne :
//! - erreur.rs : erreurs classifiées (ExpressionInvalide / DivisionParZero)
//! - jetons.rs : tokenisation (alphabet blanc : nombres, + - * /, parenthèses)
//! - rpn.rs    : shunting-yard + construction Expr
//! - expr.rs   : AST fermé + réduction post-ordre
//! - eval.rs   : pipeline complet + forme à deux opérandes

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::{calcul_simple, eval_expression};
