//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - propriété 1 : toute expression tirée du générateur bien formé s'évalue
//!   (diviseurs littéraux non nuls => même DivisionParZero est exclue)
//! - propriété 2 : tout caractère hors alphabet => ExpressionInvalide,
//!   systématiquement, sans jamais rien exécuter

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "7".to_string(),
        4 => "0.5".to_string(),
        5 => "3.25".to_string(),
        _ => "1e2".to_string(),
    }
}

/// Nombre jamais nul : seul candidat autorisé comme diviseur.
fn gen_nombre_non_nul(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 => "1".to_string(),
        1 => "2".to_string(),
        2 => "3".to_string(),
        3 => "0.5".to_string(),
        _ => "4".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        // division : diviseur littéral non nul, pour que la propriété
        // "jamais d'échec" tienne sans dépendre du hasard
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_nombre_non_nul(rng)),
        5 => format!("-({})", gen_expr(rng, depth - 1)),
        _ => format!("({})", gen_expr(rng, depth - 1)),
    }
}

/// Caractères hors alphabet blanc, à injecter dans des entrées hostiles.
const HORS_ALPHABET: &[char] = &[
    'a', 'z', '_', '%', '^', '!', '@', '$', ';', '=', '"', '\'', '#', '~', '?', ':', '&', '|',
    '<', '>', '[', ']', '{', '}',
];

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_grammaire_valide_jamais_en_echec() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        let v1 = eval_expression(&expr)
            .unwrap_or_else(|e| panic!("échec sur expression bien formée {expr:?}: {e}"));
        let v2 = eval_expression(&expr)
            .unwrap_or_else(|e| panic!("échec au second appel {expr:?}: {e}"));

        // pure : deux appels => même f64 au bit près
        assert_eq!(v1.to_bits(), v2.to_bits(), "non-déterminisme sur {expr:?}");
    }
}

#[test]
fn fuzz_safe_alphabet_hostile_toujours_refuse() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        // une expression valide, polluée par un caractère interdit
        let mut expr = gen_expr(&mut rng, 3);
        let intrus = HORS_ALPHABET[rng.pick(HORS_ALPHABET.len() as u32) as usize];
        let pos_chars = expr.chars().count();
        let pos = rng.pick(pos_chars as u32 + 1) as usize;
        let octet = expr
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(expr.len());
        expr.insert(octet, intrus);

        match eval_expression(&expr) {
            Err(ErreurCalc::ExpressionInvalide(_)) => {}
            autre => panic!("entrée hostile {expr:?} non refusée: {autre:?}"),
        }

        if rng.coin() {
            // variante : l'intrus seul
            let seul = intrus.to_string();
            assert!(matches!(
                eval_expression(&seul),
                Err(ErreurCalc::ExpressionInvalide(_))
            ));
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    // 800 * 0.5 = 400
    let v = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 400.0);
}
