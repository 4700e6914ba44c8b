// src/noyau/expr.rs
//
// AST flottant, grammaire fermée.
// - Nombre : littéral f64
// - Neg    : moins unaire
// - Add/Sub/Mul/Div : les quatre opérations binaires
//
// IMPORTANT (SAFE):
// - L'enum est la liste blanche : aucune autre forme syntaxique n'existe,
//   donc rien d'autre ne peut être réduit (pas de "rattrapage" de variantes
//   interdites à l'exécution, elles sont impossibles à construire).
// - reduire() vérifie le diviseur AVANT de diviser : 0 exact => erreur,
//   jamais un infini/NaN silencieux.

use crate::noyau::erreur::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

/// Garde-fous de réduction : itératif + bornes, pour ne pas faire sauter la
/// pile sur des entrées pathologiques (parenthèses imbriquées en masse).
/// Dépassement => ExpressionInvalide, jamais un crash.
/// MAX_NOEUDS sert aussi de borne amont dans rpn.rs (flot de jetons).
const MAX_PILE: usize = 8192;
pub(crate) const MAX_NOEUDS: usize = 200_000;

impl Drop for Expr {
    /// Libération itérative : le drop généré par le compilateur descendrait
    /// récursivement dans les Box, et une chaîne profonde ("---…-1") ferait
    /// déborder la pile du processus. On détache les enfants dans une liste
    /// de travail, chaque noeud est donc libéré à plat.
    fn drop(&mut self) {
        let mut attente: Vec<Expr> = Vec::new();
        self.detacher_enfants(&mut attente);
        while let Some(mut e) = attente.pop() {
            e.detacher_enfants(&mut attente);
        }
    }
}

/// Étape de parcours post-ordre : on descend d'abord dans les opérandes,
/// puis on repasse sur le noeud pour appliquer son opération.
enum Etape<'a> {
    Descendre(&'a Expr),
    Appliquer(&'a Expr),
}

impl Expr {
    /// Remplace chaque enfant par une feuille neutre et pousse l'ancien
    /// contenu dans `attente` (support du Drop itératif).
    fn detacher_enfants(&mut self, attente: &mut Vec<Expr>) {
        use Expr::*;

        match self {
            Nombre(_) => {}

            Neg(x) => {
                attente.push(std::mem::replace(x.as_mut(), Nombre(0.0)));
            }

            Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) => {
                attente.push(std::mem::replace(a.as_mut(), Nombre(0.0)));
                attente.push(std::mem::replace(b.as_mut(), Nombre(0.0)));
            }
        }
    }

    /// Réduction post-ordre de l'arbre vers un f64.
    ///
    /// Parcours itératif (pile explicite) :
    /// - `pile` porte les étapes restantes
    /// - `valeurs` porte les résultats intermédiaires
    ///
    /// Un débordement vers ±inf est un résultat f64 valide (inhabituel mais
    /// accepté) ; seule la division par un 0 exact est une erreur.
    pub fn reduire(&self) -> Result<f64, ErreurCalc> {
        use Expr::*;

        let mut pile: Vec<Etape> = Vec::with_capacity(64);
        let mut valeurs: Vec<f64> = Vec::with_capacity(64);
        pile.push(Etape::Descendre(self));

        let mut visites: usize = 0;

        while let Some(etape) = pile.pop() {
            visites += 1;
            if visites > MAX_NOEUDS || pile.len() > MAX_PILE {
                return Err(ErreurCalc::ExpressionInvalide(
                    "expression trop profonde".into(),
                ));
            }

            match etape {
                Etape::Descendre(e) => match e {
                    Nombre(v) => valeurs.push(*v),

                    Neg(x) => {
                        pile.push(Etape::Appliquer(e));
                        pile.push(Etape::Descendre(x));
                    }

                    Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) => {
                        pile.push(Etape::Appliquer(e));
                        // b empilé avant a => a réduit en premier (post-ordre gauche-droite)
                        pile.push(Etape::Descendre(b));
                        pile.push(Etape::Descendre(a));
                    }
                },

                Etape::Appliquer(e) => match e {
                    Neg(_) => {
                        let x = depiler(&mut valeurs)?;
                        valeurs.push(-x);
                    }

                    Add(..) => {
                        let b = depiler(&mut valeurs)?;
                        let a = depiler(&mut valeurs)?;
                        valeurs.push(a + b);
                    }
                    Sub(..) => {
                        let b = depiler(&mut valeurs)?;
                        let a = depiler(&mut valeurs)?;
                        valeurs.push(a - b);
                    }
                    Mul(..) => {
                        let b = depiler(&mut valeurs)?;
                        let a = depiler(&mut valeurs)?;
                        valeurs.push(a * b);
                    }
                    Div(..) => {
                        let b = depiler(&mut valeurs)?;
                        let a = depiler(&mut valeurs)?;
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        valeurs.push(a / b);
                    }

                    // une feuille n'est jamais empilée en Appliquer
                    Nombre(_) => {
                        return Err(ErreurCalc::ExpressionInvalide(
                            "réduction incohérente".into(),
                        ))
                    }
                },
            }
        }

        if valeurs.len() != 1 {
            return Err(ErreurCalc::ExpressionInvalide(
                "réduction incohérente".into(),
            ));
        }
        Ok(valeurs.pop().unwrap())
    }
}

fn depiler(valeurs: &mut Vec<f64>) -> Result<f64, ErreurCalc> {
    valeurs
        .pop()
        .ok_or_else(|| ErreurCalc::ExpressionInvalide("réduction incohérente".into()))
}
