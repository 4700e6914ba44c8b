// src/noyau/jetons.rs

use crate::noyau::erreur::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : jamais produit par tokenize, injecté par to_rpn
    // quand un '-' arrive là où aucune valeur ne précède.
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
///
/// Alphabet blanc, rien d'autre ne passe :
/// - nombres décimaux/scientifiques (ex: 12, 12.5, .5, 1e-3)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - blancs (ignorés)
///
/// Tout autre caractère (lettre, '_', ';', '%', '^', guillemet…) est refusé
/// ici même : `abc`, `__import__('os')` ou `1; 2` meurent avant tout calcul.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : entier, décimal (12.5 / .5 / 12.) ou scientifique (1e-3)
        let point_initial = c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit();
        if c.is_ascii_digit() || point_initial {
            let start = i;

            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // exposant : e/E, signe optionnel, au moins un chiffre exigé
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let save = i;
                i += 1;
                if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                    i += 1;
                }
                if i < chars.len() && chars[i].is_ascii_digit() {
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                } else {
                    // "1e" tout court : le 'e' n'appartient pas au nombre,
                    // il sera refusé au tour suivant comme caractère inattendu
                    i = save;
                }
            }

            let lit: String = chars[start..i].iter().collect();
            let v: f64 = lit
                .parse()
                .map_err(|_| ErreurCalc::ExpressionInvalide(format!("nombre invalide: {lit}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalc::ExpressionInvalide(format!(
            "caractère inattendu: '{c}'"
        )));
    }

    Ok(out)
}
