// =============================================================================
// FIELD — Les corps de base (Q et GF(p))
// =============================================================================
//
// Toute représentation vit au-dessus d'un CORPS k. On en supporte deux sortes :
//   - Q, les rationnels, avec une arithmétique exacte (BigRational)
//   - GF(p), le corps à p éléments, p premier
//
// Un scalaire est TOUJOURS un BigRational. Dans GF(p), c'est un entier
// canonique dans [0, p) : `normalize` ramène n'importe quel rationnel n/d
// à n·d⁻¹ mod p.
//
// Le corps porte les opérations (add, mul, inv...) plutôt que les scalaires :
// c'est la même idée que le Typeside qui porte les opérations sur les types.
//
// =============================================================================

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::{QuiverError, Result};

/// Un élément du corps de base.
pub type Scalar = BigRational;

/// Un nombre premier p, caractéristique de GF(p).
///
/// Le champ est privé : seul `BaseField::finite` en fabrique, après
/// le test de primalité. Toute la réduction modulo p repose dessus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modulus(u64);

impl Modulus {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Le corps de base d'une représentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseField {
    /// Les rationnels Q
    Rationals,
    /// Le corps premier GF(p)
    Prime(Modulus),
}

impl BaseField {
    /// GF(p), après vérification que p est premier
    pub fn finite(p: u64) -> Result<Self> {
        if is_prime(p) {
            Ok(BaseField::Prime(Modulus(p)))
        } else {
            Err(QuiverError::NotPrime(p))
        }
    }

    /// Caractéristique du corps (0 pour Q)
    pub fn characteristic(&self) -> u64 {
        match self {
            BaseField::Rationals => 0,
            BaseField::Prime(p) => p.0,
        }
    }

    pub fn zero(&self) -> Scalar {
        Scalar::zero()
    }

    pub fn one(&self) -> Scalar {
        Scalar::one()
    }

    pub fn from_i64(&self, n: i64) -> Scalar {
        match self {
            BaseField::Rationals => Scalar::from_integer(BigInt::from(n)),
            BaseField::Prime(p) => Scalar::from_integer(reduce(&BigInt::from(n), *p)),
        }
    }

    /// Ramène un rationnel quelconque dans le corps.
    ///
    /// Dans GF(p), échoue si le dénominateur est divisible par p.
    pub fn normalize(&self, x: &Scalar) -> Result<Scalar> {
        match self {
            BaseField::Rationals => Ok(x.clone()),
            BaseField::Prime(p) => {
                let numer = reduce(x.numer(), *p);
                let denom = reduce(x.denom(), *p);
                if denom.is_zero() {
                    return Err(QuiverError::DivisionByZero(*self));
                }
                let inv = mod_inverse(&denom, *p);
                Ok(Scalar::from_integer(reduce(&(numer * inv), *p)))
            }
        }
    }

    pub fn add(&self, a: &Scalar, b: &Scalar) -> Scalar {
        self.wrap(a + b)
    }

    pub fn sub(&self, a: &Scalar, b: &Scalar) -> Scalar {
        self.wrap(a - b)
    }

    pub fn mul(&self, a: &Scalar, b: &Scalar) -> Scalar {
        self.wrap(a * b)
    }

    pub fn neg(&self, a: &Scalar) -> Scalar {
        self.wrap(-a)
    }

    /// Inverse multiplicatif, None pour zéro
    pub fn inv(&self, a: &Scalar) -> Option<Scalar> {
        if a.is_zero() {
            return None;
        }
        match self {
            BaseField::Rationals => Some(a.recip()),
            BaseField::Prime(p) => {
                let n = reduce(&a.to_integer(), *p);
                Some(Scalar::from_integer(mod_inverse(&n, *p)))
            }
        }
    }

    pub fn is_zero(&self, a: &Scalar) -> bool {
        a.is_zero()
    }

    /// Lit un scalaire écrit "3", "-2" ou "1/2".
    pub fn parse(&self, text: &str) -> Result<Scalar> {
        let text = text.trim();
        let bad = || QuiverError::InvalidScalar(text.to_string());
        let value = match text.split_once('/') {
            Some((n, d)) => {
                let n: BigInt = n.trim().parse().map_err(|_| bad())?;
                let d: BigInt = d.trim().parse().map_err(|_| bad())?;
                if d.is_zero() {
                    return Err(QuiverError::DivisionByZero(*self));
                }
                Scalar::new(n, d)
            }
            None => Scalar::from_integer(text.parse().map_err(|_| bad())?),
        };
        self.normalize(&value)
    }

    /// Lit un nom de corps : "QQ", "Q", "GF(7)" ou "GF7".
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        match name {
            "QQ" | "Q" => Ok(BaseField::Rationals),
            _ => {
                let inner = name
                    .strip_prefix("GF")
                    .map(|rest| rest.trim_start_matches('(').trim_end_matches(')'))
                    .ok_or_else(|| QuiverError::Config(format!("corps inconnu '{}'", name)))?;
                let p: u64 = inner
                    .parse()
                    .map_err(|_| QuiverError::Config(format!("corps inconnu '{}'", name)))?;
                BaseField::finite(p)
            }
        }
    }

    // Les opérations sur Q sont déjà exactes ; seul GF(p) doit réduire.
    fn wrap(&self, x: Scalar) -> Scalar {
        match self {
            BaseField::Rationals => x,
            BaseField::Prime(p) => Scalar::from_integer(reduce(&x.to_integer(), *p)),
        }
    }
}

impl fmt::Display for BaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseField::Rationals => write!(f, "Rational Field"),
            BaseField::Prime(p) => write!(f, "Finite Field of size {}", p),
        }
    }
}

/// Affiche un scalaire sous forme réduite : "3", "-1/2".
pub fn format_scalar(x: &Scalar) -> String {
    if x.is_integer() {
        x.to_integer().to_string()
    } else {
        format!("{}/{}", x.numer(), x.denom())
    }
}

fn reduce(n: &BigInt, p: Modulus) -> BigInt {
    let modulus = BigInt::from(p.0);
    let r = n % &modulus;
    if r.is_negative() {
        r + modulus
    } else {
        r
    }
}

/// Inverse modulo p premier (petit théorème de Fermat)
fn mod_inverse(n: &BigInt, p: Modulus) -> BigInt {
    let modulus = BigInt::from(p.0);
    n.modpow(&(&modulus - BigInt::from(2u8)), &modulus)
}

fn is_prime(p: u64) -> bool {
    if p < 2 {
        return false;
    }
    let mut d = 2u64;
    while d.saturating_mul(d) <= p {
        if p % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
