//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> réduction post-ordre
//!
//! Fonction pure : aucun état entre deux appels, chaque invocation construit
//! et jette son propre arbre. Des appels concurrents n'ont rien à partager.

use super::erreur::ErreurCalc;
use super::expr::Expr;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression arithmétique et retourne sa valeur.
///
/// Atomique : soit un f64 complet, soit une erreur classifiée
/// (ExpressionInvalide / DivisionParZero), jamais un résultat partiel.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::ExpressionInvalide("entrée vide".into()));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    // 4) Réduction
    expr.reduire()
}

/// Forme dégénérée à deux opérandes : `a <op> b`.
///
/// Même noyau de réduction que `eval_expression` (un seul chemin d'évaluation,
/// pas de logique arithmétique dupliquée) : on construit directement le noeud
/// binaire et on le réduit.
pub fn calcul_simple(a: f64, op: &str, b: f64) -> Result<f64, ErreurCalc> {
    let expr = match op {
        "+" => Expr::Add(Box::new(Expr::Nombre(a)), Box::new(Expr::Nombre(b))),
        "-" => Expr::Sub(Box::new(Expr::Nombre(a)), Box::new(Expr::Nombre(b))),
        "*" => Expr::Mul(Box::new(Expr::Nombre(a)), Box::new(Expr::Nombre(b))),
        "/" => Expr::Div(Box::new(Expr::Nombre(a)), Box::new(Expr::Nombre(b))),
        _ => {
            return Err(ErreurCalc::ExpressionInvalide(format!(
                "opération non supportée: '{op}'"
            )))
        }
    };

    expr.reduire()
}
