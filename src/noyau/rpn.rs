// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Précédences : moins unaire > (* /) > (+ -), gauche-associatif à
//   précédence égale, le moins unaire est droite-associatif
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, on le retague en
//      Tok::Neg ("-x" => "x neg"), qui donnera un noeud Expr::Neg
// - Parenthèse fermante sans ouvrante, ou ouvrante jamais fermée : refus

use crate::noyau::erreur::ErreurCalc;
use crate::noyau::expr::{Expr, MAX_NOEUDS};
use crate::noyau::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Neg)
}

/// Dépile vers `out` tant que l'opérateur au sommet doit sortir avant `tok`
/// (précédence/associativité), sans traverser une '('.
fn depile_prioritaires(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurCalc::ExpressionInvalide(
                        "parenthèse fermante sans ouvrante".into(),
                    ));
                }

                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // moins unaire : opérateur dédié, plus prioritaire que * et /
                depile_prioritaires(&mut out, &mut ops, &Tok::Neg);
                ops.push(Tok::Neg);
                prev_was_value = false;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                depile_prioritaires(&mut out, &mut ops, &tok);
                ops.push(tok);
                prev_was_value = false;
            }

            // tokenize ne produit jamais Neg ; le refuser garde to_rpn total
            Tok::Neg => {
                return Err(ErreurCalc::ExpressionInvalide(
                    "moins unaire inattendu en entrée".into(),
                ));
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::ExpressionInvalide(
                "parenthèses non fermées".into(),
            ));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
///
/// Chaque opérateur consomme ses opérandes sur la pile ; s'il en manque
/// ("2 +") ou s'il en reste ("2 3"), l'expression est refusée.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalc> {
    // borne amont, alignée sur la borne de réduction : au-delà, l'arbre
    // serait refusé de toute façon, autant ne jamais le construire
    if rpn.len() > MAX_NOEUDS {
        return Err(ErreurCalc::ExpressionInvalide(
            "expression trop longue".into(),
        ));
    }

    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Nombre(v)),

            Tok::Neg => {
                let x = st.pop().ok_or_else(operande_manquant)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(operande_manquant)?;
                let a = st.pop().ok_or_else(operande_manquant)?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::ExpressionInvalide(
                    "parenthèse inattendue en RPN".into(),
                ))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalc::ExpressionInvalide(
            "expression incomplète".into(),
        ));
    }
    Ok(st.pop().unwrap())
}

fn operande_manquant() -> ErreurCalc {
    ErreurCalc::ExpressionInvalide("opérande manquant".into())
}
