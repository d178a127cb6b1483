// =============================================================================
// MATRIX — Matrices denses sur un corps de base
// =============================================================================
//
// CONVENTION : les matrices agissent À DROITE sur des vecteurs LIGNES.
// Une application linéaire V → W avec dim V = m, dim W = n est une
// matrice m × n, et l'image de v est v · A.
//
// C'est la convention des représentations de carquois : la composition
// se lit de gauche à droite, comme les chemins (a puis b = a·b).
//
// Le seul algorithme sérieux ici est l'élimination de Gauss-Jordan
// (`rref`), d'où l'on tire le rang et le noyau.
//
// =============================================================================

use std::fmt;

use super::field::{format_scalar, BaseField, Scalar};
use super::subspace::Subspace;
use crate::error::{QuiverError, Result};

/// Un vecteur ligne de coordonnées
pub type Vector = Vec<Scalar>;

/// Matrice dense, stockée ligne par ligne.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    field: BaseField,
    nrows: usize,
    ncols: usize,
    entries: Vec<Scalar>,
}

impl Matrix {
    /// Matrice nulle rows × cols
    pub fn zero(field: BaseField, nrows: usize, ncols: usize) -> Self {
        Matrix {
            field,
            nrows,
            ncols,
            entries: vec![field.zero(); nrows * ncols],
        }
    }

    /// Matrice identité n × n
    pub fn identity(field: BaseField, n: usize) -> Self {
        Self::diagonal(field, n, field.one())
    }

    /// c · I, avec c ramené dans le corps
    pub fn scalar(field: BaseField, n: usize, c: &Scalar) -> Result<Self> {
        Ok(Self::diagonal(field, n, field.normalize(c)?))
    }

    // `c` est déjà un élément du corps
    fn diagonal(field: BaseField, n: usize, c: Scalar) -> Self {
        let mut m = Self::zero(field, n, n);
        for i in 0..n {
            m.entries[i * n + i] = c.clone();
        }
        m
    }

    /// Construit une matrice à partir de ses lignes.
    ///
    /// `ncols` est nécessaire pour les matrices sans ligne (0 × n).
    /// Chaque coefficient est ramené dans le corps.
    pub fn from_rows(field: BaseField, ncols: usize, rows: Vec<Vector>) -> Result<Self> {
        let nrows = rows.len();
        let mut entries = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(QuiverError::RaggedMatrix {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            for x in &row {
                entries.push(field.normalize(x)?);
            }
        }
        Ok(Matrix { field, nrows, ncols, entries })
    }

    /// Raccourci pour les tests et les exemples : coefficients entiers.
    pub fn from_ints(field: BaseField, ncols: usize, rows: &[&[i64]]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|&x| field.from_i64(x)).collect())
            .collect();
        Self::from_rows(field, ncols, rows)
    }

    pub fn field(&self) -> BaseField {
        self.field
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn get(&self, i: usize, j: usize) -> &Scalar {
        &self.entries[i * self.ncols + j]
    }

    /// `value` doit déjà être un élément du corps
    pub(crate) fn set(&mut self, i: usize, j: usize, value: Scalar) {
        self.entries[i * self.ncols + j] = value;
    }

    /// Ajoute `value` (élément du corps) au coefficient (i, j)
    pub(crate) fn add_to(&mut self, i: usize, j: usize, value: &Scalar) {
        let idx = i * self.ncols + j;
        self.entries[idx] = self.field.add(&self.entries[idx], value);
    }

    pub fn row(&self, i: usize) -> &[Scalar] {
        &self.entries[i * self.ncols..(i + 1) * self.ncols]
    }

    pub fn rows(&self) -> Vec<Vector> {
        (0..self.nrows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Coefficients à plat, ligne par ligne
    pub fn entries(&self) -> &[Scalar] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|x| self.field.is_zero(x))
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::zero(self.field, self.ncols, self.nrows);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                t.set(j, i, self.get(i, j).clone());
            }
        }
        t
    }

    /// Produit matriciel self · other
    pub fn mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols != other.nrows {
            return Err(QuiverError::ShapeMismatch {
                context: "produit de matrices".into(),
                expected: (self.ncols, other.ncols),
                found: other.shape(),
            });
        }
        let k = self.field;
        let mut out = Matrix::zero(k, self.nrows, other.ncols);
        for i in 0..self.nrows {
            for l in 0..self.ncols {
                let a = self.get(i, l);
                if k.is_zero(a) {
                    continue;
                }
                for j in 0..other.ncols {
                    let term = k.mul(a, other.get(l, j));
                    out.add_to(i, j, &term);
                }
            }
        }
        Ok(out)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "somme de matrices", |k, a, b| k.add(a, b))
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "différence de matrices", |k, a, b| k.sub(a, b))
    }

    /// c · self ; c est d'abord ramené dans le corps (1/2 = 2 dans GF(3))
    pub fn scale(&self, c: &Scalar) -> Result<Matrix> {
        let k = self.field;
        let c = k.normalize(c)?;
        Ok(Matrix {
            field: k,
            nrows: self.nrows,
            ncols: self.ncols,
            entries: self.entries.iter().map(|x| k.mul(&c, x)).collect(),
        })
    }

    /// Image d'un vecteur ligne : v · self
    pub fn vector_mul(&self, v: &[Scalar]) -> Result<Vector> {
        if v.len() != self.nrows {
            return Err(QuiverError::LengthMismatch {
                expected: self.nrows,
                found: v.len(),
            });
        }
        let k = self.field;
        let mut out = vec![k.zero(); self.ncols];
        for (i, x) in v.iter().enumerate() {
            if k.is_zero(x) {
                continue;
            }
            for (j, o) in out.iter_mut().enumerate() {
                *o = k.add(o, &k.mul(x, self.get(i, j)));
            }
        }
        Ok(out)
    }

    /// Forme échelonnée réduite (Gauss-Jordan) et colonnes pivots.
    pub fn rref(&self) -> (Matrix, Vec<usize>) {
        let k = self.field;
        let mut a = self.clone();
        let mut pivots = Vec::new();
        let mut row = 0usize;

        for col in 0..a.ncols {
            if row >= a.nrows {
                break;
            }
            let Some(sel) = (row..a.nrows).find(|&r| !k.is_zero(a.get(r, col))) else {
                continue;
            };
            a.swap_rows(row, sel);

            // Normaliser le pivot à 1 ; le pivot est non nul donc inversible
            if let Some(inv) = k.inv(a.get(row, col)) {
                for c in col..a.ncols {
                    let v = k.mul(&inv, a.get(row, c));
                    a.set(row, c, v);
                }
            }

            for r in 0..a.nrows {
                if r == row || k.is_zero(a.get(r, col)) {
                    continue;
                }
                let factor = a.get(r, col).clone();
                for c in col..a.ncols {
                    let v = k.sub(a.get(r, c), &k.mul(&factor, a.get(row, c)));
                    a.set(r, c, v);
                }
            }

            pivots.push(col);
            row += 1;
        }

        (a, pivots)
    }

    pub fn rank(&self) -> usize {
        self.rref().1.len()
    }

    /// Noyau à droite : { x : self · xᵀ = 0 }, sous-espace de k^ncols.
    ///
    /// Une variable libre par colonne non pivot ; la base obtenue est
    /// ensuite échelonnée par `Subspace::span`.
    pub fn right_kernel(&self) -> Subspace {
        let k = self.field;
        let (r, pivots) = self.rref();

        let mut is_pivot = vec![false; self.ncols];
        for &p in &pivots {
            is_pivot[p] = true;
        }

        let mut basis = Vec::new();
        for free in (0..self.ncols).filter(|&c| !is_pivot[c]) {
            let mut v = vec![k.zero(); self.ncols];
            v[free] = k.one();
            for (i, &p) in pivots.iter().enumerate() {
                v[p] = k.neg(r.get(i, free));
            }
            basis.push(v);
        }

        Subspace::from_independent(k, self.ncols, basis)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.entries.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }

    fn zip_with(
        &self,
        other: &Matrix,
        context: &str,
        op: impl Fn(&BaseField, &Scalar, &Scalar) -> Scalar,
    ) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(QuiverError::ShapeMismatch {
                context: context.into(),
                expected: self.shape(),
                found: other.shape(),
            });
        }
        let k = self.field;
        Ok(Matrix {
            field: k,
            nrows: self.nrows,
            ncols: self.ncols,
            entries: self
                .entries
                .iter()
                .zip(&other.entries)
                .map(|(a, b)| op(&k, a, b))
                .collect(),
        })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nrows == 0 || self.ncols == 0 {
            return write!(f, "{} x {} dense matrix over {}", self.nrows, self.ncols, self.field);
        }
        for i in 0..self.nrows {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = self.row(i).iter().map(format_scalar).collect();
            write!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
