// src/noyau/erreur.rs
//
// Erreurs classifiées du noyau.
// Deux familles, pas une de plus (contrat de l'évaluateur) :
// - ExpressionInvalide : entrée hors grammaire, jamais évaluée
// - DivisionParZero    : diviseur réduit à exactement 0, détecté AVANT la division
//
// Le noyau ne connaît ni HTTP ni JSON : la traduction en réponse transport
// se fait dans service/routes.rs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Entrée non analysable, ou construction hors liste blanche.
    /// Le détail nomme (au moins informellement) l'élément fautif.
    #[error("expression invalide: {0}")]
    ExpressionInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,
}
