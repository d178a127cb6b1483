// =============================================================================
// SUBSPACE — Sous-espaces de k^n avec une base échelonnée
// =============================================================================
//
// Un sous-espace est représenté par sa base ÉCHELONNÉE RÉDUITE : les
// vecteurs de base sont les lignes non nulles d'une matrice en forme rref.
//
// Avantage : les coordonnées d'un vecteur v dans cette base se lisent
// directement sur les colonnes pivots. Si v = Σ cᵢ bᵢ, alors cᵢ = v[pivotᵢ]
// (car bᵢ vaut 1 sur son pivot et 0 sur les autres pivots).
// On reconstruit ensuite Σ cᵢ bᵢ pour vérifier que v appartient bien
// au sous-espace.
//
// =============================================================================

use super::field::{BaseField, Scalar};
use super::matrix::{Matrix, Vector};
use crate::error::{QuiverError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subspace {
    field: BaseField,
    /// Dimension de l'espace ambiant k^degree
    degree: usize,
    /// Base échelonnée réduite
    basis: Vec<Vector>,
    /// Colonne pivot de chaque vecteur de base
    pivots: Vec<usize>,
}

impl Subspace {
    /// Le sous-espace engendré par `gens` (les dépendances sont éliminées).
    pub fn span(field: BaseField, degree: usize, gens: Vec<Vector>) -> Result<Self> {
        let mut normalized = Vec::with_capacity(gens.len());
        for g in &gens {
            if g.len() != degree {
                return Err(QuiverError::LengthMismatch {
                    expected: degree,
                    found: g.len(),
                });
            }
            normalized.push(g.iter().map(|x| field.normalize(x)).collect::<Result<Vector>>()?);
        }
        Ok(Self::from_independent(field, degree, normalized))
    }

    /// Comme `span`, pour des vecteurs du corps déjà de la bonne longueur.
    pub(crate) fn from_independent(field: BaseField, degree: usize, gens: Vec<Vector>) -> Self {
        if gens.is_empty() {
            return Self::zero(field, degree);
        }
        let nrows = gens.len();
        let mut m = Matrix::zero(field, nrows, degree);
        for (i, g) in gens.into_iter().enumerate() {
            for (j, x) in g.into_iter().enumerate() {
                m.set(i, j, x);
            }
        }
        let (r, pivots) = m.rref();
        let basis = (0..pivots.len()).map(|i| r.row(i).to_vec()).collect();
        Subspace { field, degree, basis, pivots }
    }

    /// Le sous-espace nul de k^degree
    pub fn zero(field: BaseField, degree: usize) -> Self {
        Subspace {
            field,
            degree,
            basis: Vec::new(),
            pivots: Vec::new(),
        }
    }

    pub fn field(&self) -> BaseField {
        self.field
    }

    pub fn dimension(&self) -> usize {
        self.basis.len()
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn basis(&self) -> &[Vector] {
        &self.basis
    }

    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    pub fn zero_vector(&self) -> Vector {
        vec![self.field.zero(); self.degree]
    }

    /// Coordonnées de v dans la base échelonnée.
    pub fn coordinates(&self, v: &[Scalar]) -> Result<Vector> {
        if v.len() != self.degree {
            return Err(QuiverError::LengthMismatch {
                expected: self.degree,
                found: v.len(),
            });
        }
        let v = v
            .iter()
            .map(|x| self.field.normalize(x))
            .collect::<Result<Vector>>()?;
        let coords: Vector = self.pivots.iter().map(|&p| v[p].clone()).collect();
        if self.linear_combination(&coords)? != v {
            return Err(QuiverError::NotInSubspace);
        }
        Ok(coords)
    }

    pub fn contains(&self, v: &[Scalar]) -> bool {
        self.coordinates(v).is_ok()
    }

    /// Σ coeffs[i] · basis[i]
    pub fn linear_combination(&self, coeffs: &[Scalar]) -> Result<Vector> {
        if coeffs.len() != self.dimension() {
            return Err(QuiverError::LengthMismatch {
                expected: self.dimension(),
                found: coeffs.len(),
            });
        }
        let k = self.field;
        let mut out = self.zero_vector();
        for (c, b) in coeffs.iter().zip(&self.basis) {
            let c = k.normalize(c)?;
            if k.is_zero(&c) {
                continue;
            }
            for (o, x) in out.iter_mut().zip(b) {
                *o = k.add(o, &k.mul(&c, x));
            }
        }
        Ok(out)
    }

    /// Le sous-espace de self engendré par `gens`.
    pub fn submodule(&self, gens: Vec<Vector>) -> Result<Subspace> {
        for g in &gens {
            if !self.contains(g) {
                return Err(QuiverError::NotInSubspace);
            }
        }
        Subspace::span(self.field, self.degree, gens)
    }

    pub fn is_subspace_of(&self, other: &Subspace) -> bool {
        self.degree == other.degree && self.basis.iter().all(|b| other.contains(b))
    }

    /// Un élément du sous-espace : la somme des vecteurs de base.
    pub fn an_element(&self) -> Vector {
        let ones = vec![self.field.one(); self.dimension()];
        self.linear_combination(&ones)
            .unwrap_or_else(|_| self.zero_vector())
    }
}
