// =============================================================================
// MORPHISM — Homomorphismes de représentations
// =============================================================================
//
// Un homomorphisme f : M → N est une TRANSFORMATION NATURELLE entre deux
// foncteurs Q → Vect_k. Concrètement, pour chaque sommet v, une matrice
// f_v : M(v) → N(v) de forme dim M(v) × dim N(v), telle que pour toute
// arête e : u → w le carré commute :
//
//            M(e)
//     M(u) ───────▶ M(w)
//      │              │
//   f_u│              │f_w          M(e) · f_w = f_u · N(e)
//      ▼              ▼
//     N(u) ───────▶ N(w)
//            N(e)
//
// (les matrices agissent à droite, on lit donc les composées de gauche à droite)
//
// VECTEUR AMBIANT : on aplatit toutes les matrices f_v, sommet par sommet
// (ordre du carquois), puis ligne par ligne. C'est la coordonnée d'un
// homomorphisme dans k^n, n = Σ dim M(v) · dim N(v). L'espace Hom est un
// sous-espace de ce k^n (voir homspace.rs).
//
// =============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::field::{BaseField, Scalar};
use super::matrix::{Matrix, Vector};
use super::quiver::{Quiver, Vertex};
use super::representation::{QuiverRep, QuiverRepElement};
use crate::error::{QuiverError, Result};

/// Vérifie que deux représentations vivent sur le même carquois et le même corps.
pub(crate) fn check_same_ground(domain: &QuiverRep, codomain: &QuiverRep) -> Result<()> {
    if domain.quiver() != codomain.quiver() {
        return Err(QuiverError::QuiverMismatch);
    }
    if domain.base_field() != codomain.base_field() {
        return Err(QuiverError::BaseFieldMismatch {
            left: domain.base_field(),
            right: codomain.base_field(),
        });
    }
    Ok(())
}

/// Position de la première coordonnée de chaque sommet dans le vecteur ambiant.
///
/// `offsets[i]` = Σ_{j < i} dim M(v_j) · dim N(v_j) ; la dernière case
/// contient la dimension ambiante totale.
pub(crate) fn variable_offsets(domain: &QuiverRep, codomain: &QuiverRep) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(domain.quiver().num_vertices() + 1);
    let mut acc = 0;
    offsets.push(acc);
    for &v in domain.quiver().vertices() {
        acc += domain.dimension_at(v) * codomain.dimension_at(v);
        offsets.push(acc);
    }
    offsets
}

/// Un homomorphisme de représentations f : domain → codomain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuiverRepHom {
    domain: Arc<QuiverRep>,
    codomain: Arc<QuiverRep>,
    /// f_v pour chaque sommet du carquois
    maps: BTreeMap<Vertex, Matrix>,
}

impl QuiverRepHom {
    /// Construit un homomorphisme à partir de ses matrices aux sommets.
    ///
    /// Les sommets non spécifiés reçoivent l'application nulle ; les clés
    /// qui ne sont pas des sommets du carquois sont ignorées.
    /// Échoue si une matrice a la mauvaise forme ou si un carré ne commute pas.
    pub fn new(
        domain: Arc<QuiverRep>,
        codomain: Arc<QuiverRep>,
        maps: impl IntoIterator<Item = (Vertex, Matrix)>,
    ) -> Result<Self> {
        check_same_ground(&domain, &codomain)?;
        let field = domain.base_field();

        let mut given = BTreeMap::new();
        for (v, m) in maps {
            if !domain.quiver().has_vertex(v) {
                warn!(vertex = v, "application ignorée : le sommet n'est pas dans le carquois");
                continue;
            }
            let expected = (domain.dimension_at(v), codomain.dimension_at(v));
            if m.shape() != expected {
                return Err(QuiverError::ShapeMismatch {
                    context: format!("application au sommet {}", v),
                    expected,
                    found: m.shape(),
                });
            }
            if m.field() != field {
                return Err(QuiverError::BaseFieldMismatch {
                    left: field,
                    right: m.field(),
                });
            }
            given.insert(v, m);
        }

        let hom = Self::from_complete_maps(domain, codomain, given);
        hom.check_equivariance()?;
        Ok(hom)
    }

    /// Construit un homomorphisme à partir de son vecteur ambiant.
    pub fn from_vector(domain: Arc<QuiverRep>, codomain: Arc<QuiverRep>, vector: &[Scalar]) -> Result<Self> {
        check_same_ground(&domain, &codomain)?;
        let offsets = variable_offsets(&domain, &codomain);
        let total = offsets.last().copied().unwrap_or(0);
        if vector.len() != total {
            return Err(QuiverError::LengthMismatch {
                expected: total,
                found: vector.len(),
            });
        }
        let normalized = vector
            .iter()
            .map(|x| domain.base_field().normalize(x))
            .collect::<Result<Vector>>()?;
        let hom = Self::unpack(domain, codomain, &normalized);
        hom.check_equivariance()?;
        Ok(hom)
    }

    /// Découpe un vecteur ambiant (déjà de la bonne longueur) en matrices.
    pub(crate) fn unpack(domain: Arc<QuiverRep>, codomain: Arc<QuiverRep>, vector: &[Scalar]) -> Self {
        let field = domain.base_field();
        let offsets = variable_offsets(&domain, &codomain);
        let mut maps = BTreeMap::new();
        for (idx, &v) in domain.quiver().vertices().iter().enumerate() {
            let (rows, cols) = (domain.dimension_at(v), codomain.dimension_at(v));
            let mut m = Matrix::zero(field, rows, cols);
            for i in 0..rows {
                for j in 0..cols {
                    m.set(i, j, vector[offsets[idx] + i * cols + j].clone());
                }
            }
            maps.insert(v, m);
        }
        QuiverRepHom { domain, codomain, maps }
    }

    fn from_complete_maps(
        domain: Arc<QuiverRep>,
        codomain: Arc<QuiverRep>,
        mut maps: BTreeMap<Vertex, Matrix>,
    ) -> Self {
        let field = domain.base_field();
        for &v in domain.quiver().vertices() {
            maps.entry(v)
                .or_insert_with(|| Matrix::zero(field, domain.dimension_at(v), codomain.dimension_at(v)));
        }
        QuiverRepHom { domain, codomain, maps }
    }

    // M(e) · f_w = f_u · N(e) pour chaque arête e : u → w
    fn check_equivariance(&self) -> Result<()> {
        for e in self.domain.quiver().edges() {
            let (Some(x), Some(y)) = (self.domain.map(&e.label), self.codomain.map(&e.label)) else {
                return Err(QuiverError::UnknownEdge(e.label.clone()));
            };
            let lhs = x.mul(&self.maps[&e.target])?;
            let rhs = self.maps[&e.source].mul(y)?;
            if lhs != rhs {
                return Err(QuiverError::NotEquivariant(e.label.clone()));
            }
        }
        Ok(())
    }

    pub fn domain(&self) -> &Arc<QuiverRep> {
        &self.domain
    }

    pub fn codomain(&self) -> &Arc<QuiverRep> {
        &self.codomain
    }

    pub fn quiver(&self) -> &Arc<Quiver> {
        self.domain.quiver()
    }

    pub fn base_field(&self) -> BaseField {
        self.domain.base_field()
    }

    /// La matrice f_v
    pub fn matrix(&self, v: Vertex) -> Option<&Matrix> {
        self.maps.get(&v)
    }

    pub fn maps(&self) -> &BTreeMap<Vertex, Matrix> {
        &self.maps
    }

    /// Le vecteur ambiant (matrices aplaties, sommet par sommet)
    pub fn vector(&self) -> Vector {
        self.maps
            .values()
            .flat_map(|m| m.entries().iter().cloned())
            .collect()
    }

    pub fn is_zero(&self) -> bool {
        self.maps.values().all(Matrix::is_zero)
    }

    /// Rang total Σ rang(f_v) = dimension de l'image
    pub fn rank(&self) -> usize {
        self.maps.values().map(Matrix::rank).sum()
    }

    pub fn is_injective(&self) -> bool {
        self.maps
            .iter()
            .all(|(v, m)| m.rank() == self.domain.dimension_at(*v))
    }

    pub fn is_surjective(&self) -> bool {
        self.maps
            .iter()
            .all(|(v, m)| m.rank() == self.codomain.dimension_at(*v))
    }

    /// Chaque f_v est carrée et inversible
    pub fn is_isomorphism(&self) -> bool {
        self.maps
            .iter()
            .all(|(v, m)| m.is_square() && m.rank() == self.domain.dimension_at(*v))
    }

    pub fn is_endomorphism(&self) -> bool {
        self.domain == self.codomain
    }

    /// Image d'un élément du domaine
    pub fn apply(&self, x: &QuiverRepElement) -> Result<QuiverRepElement> {
        let mut parts = BTreeMap::new();
        for (v, m) in &self.maps {
            let xv = x.get(*v).ok_or(QuiverError::UnknownVertex(*v))?;
            parts.insert(*v, m.vector_mul(xv)?);
        }
        Ok(QuiverRepElement::from_parts(parts))
    }

    /// self ∘ other : on applique d'abord `other`, puis `self`
    pub fn compose(&self, other: &QuiverRepHom) -> Result<QuiverRepHom> {
        if other.codomain != self.domain {
            return Err(QuiverError::HomMismatch);
        }
        let mut maps = BTreeMap::new();
        for (v, g) in &other.maps {
            maps.insert(*v, g.mul(&self.maps[v])?);
        }
        Ok(QuiverRepHom {
            domain: other.domain.clone(),
            codomain: self.codomain.clone(),
            maps,
        })
    }

    pub fn add(&self, other: &QuiverRepHom) -> Result<QuiverRepHom> {
        if self.domain != other.domain || self.codomain != other.codomain {
            return Err(QuiverError::HomMismatch);
        }
        let mut maps = BTreeMap::new();
        for (v, m) in &self.maps {
            maps.insert(*v, m.add(&other.maps[v])?);
        }
        Ok(QuiverRepHom {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
            maps,
        })
    }

    /// c · self ; échoue si c n'a pas de sens dans le corps (1/p dans GF(p))
    pub fn scale(&self, c: &Scalar) -> Result<QuiverRepHom> {
        let maps = self
            .maps
            .iter()
            .map(|(v, m)| Ok((*v, m.scale(c)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(QuiverRepHom {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
            maps,
        })
    }
}

impl fmt::Display for QuiverRepHom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Homomorphism of representations of {}", self.quiver())
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const QQ: BaseField = BaseField::Rationals;

    /// 1 ═a,b═▶ 2 ─c─▶ 3
    fn quiver() -> Arc<Quiver> {
        Arc::new(Quiver::from_adjacency(&[(1, &[(2, &["a", "b"])]), (2, &[(3, &["c"])])]).unwrap())
    }

    /// M : k² ═▶ k² ─▶ k, a = diag(1, 0), b = diag(0, 1), c = (1, 1)ᵀ
    fn big_rep(q: &Arc<Quiver>) -> Arc<QuiverRep> {
        Arc::new(
            QuiverRep::new(
                QQ,
                q.clone(),
                [(1, 2), (2, 2), (3, 1)],
                [
                    ("a", Matrix::from_ints(QQ, 2, &[&[1, 0], &[0, 0]]).unwrap()),
                    ("b", Matrix::from_ints(QQ, 2, &[&[0, 0], &[0, 1]]).unwrap()),
                    ("c", Matrix::from_ints(QQ, 1, &[&[1], &[1]]).unwrap()),
                ],
            )
            .unwrap(),
        )
    }

    /// S : 0 ═▶ k ─0─▶ k
    fn small_rep(q: &Arc<Quiver>) -> Arc<QuiverRep> {
        Arc::new(QuiverRep::new(QQ, q.clone(), [(2, 1), (3, 1)], Vec::<(&str, Matrix)>::new()).unwrap())
    }

    #[test]
    fn test_equivariant_map_accepted() {
        let q = quiver();
        let (s, m) = (small_rep(&q), big_rep(&q));
        let f = QuiverRepHom::new(
            s,
            m,
            [
                (2, Matrix::from_ints(QQ, 2, &[&[1, -1]]).unwrap()),
                (3, Matrix::identity(QQ, 1)),
            ],
        )
        .unwrap();
        assert!(!f.is_zero());
        assert!(f.is_injective());
        assert!(!f.is_surjective());
        assert_eq!(f.rank(), 2);
    }

    #[test]
    fn test_non_equivariant_map_rejected() {
        let q = quiver();
        let (s, m) = (small_rep(&q), big_rep(&q));
        let err = QuiverRepHom::new(s, m, [(2, Matrix::from_ints(QQ, 2, &[&[1, 0]]).unwrap())]).unwrap_err();
        assert_eq!(err, QuiverError::NotEquivariant("c".into()));
    }

    #[test]
    fn test_wrong_shape_rejected() {
        let q = quiver();
        let (s, m) = (small_rep(&q), big_rep(&q));
        let err = QuiverRepHom::new(s, m, [(2, Matrix::identity(QQ, 2))]).unwrap_err();
        assert!(matches!(err, QuiverError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_unknown_vertex_ignored() {
        let q = quiver();
        let s = small_rep(&q);
        let f = QuiverRepHom::new(s.clone(), s, [(42, Matrix::identity(QQ, 3))]).unwrap();
        assert!(f.is_zero());
    }

    #[test]
    fn test_vector_round_trip() {
        let q = quiver();
        let (s, m) = (small_rep(&q), big_rep(&q));
        let f = QuiverRepHom::new(
            s.clone(),
            m.clone(),
            [
                (2, Matrix::from_ints(QQ, 2, &[&[2, -2]]).unwrap()),
                (3, Matrix::scalar(QQ, 1, &QQ.from_i64(2)).unwrap()),
            ],
        )
        .unwrap();
        let v = f.vector();
        assert_eq!(v.len(), 3); // 0·2 + 1·2 + 1·1
        assert_eq!(QuiverRepHom::from_vector(s, m, &v).unwrap(), f);
    }

    #[test]
    fn test_mismatched_fields_rejected() {
        let q = quiver();
        let s = small_rep(&q);
        let other = Arc::new(QuiverRep::simple(BaseField::finite(5).unwrap(), q, 2).unwrap());
        let err = QuiverRepHom::new(s, other, Vec::new()).unwrap_err();
        assert!(matches!(err, QuiverError::BaseFieldMismatch { .. }));
    }

    #[test]
    fn test_apply_and_compose() {
        let q = quiver();
        let (s, m) = (small_rep(&q), big_rep(&q));
        let f = QuiverRepHom::new(
            s.clone(),
            m.clone(),
            [
                (2, Matrix::from_ints(QQ, 2, &[&[1, -1]]).unwrap()),
                (3, Matrix::identity(QQ, 1)),
            ],
        )
        .unwrap();

        let x = s.element([(2, vec![QQ.from_i64(3)])]).unwrap();
        let fx = f.apply(&x).unwrap();
        assert_eq!(fx.get(2).unwrap(), &vec![QQ.from_i64(3), QQ.from_i64(-3)]);

        let id_s = QuiverRepHom::new(
            s.clone(),
            s.clone(),
            [(2, Matrix::identity(QQ, 1)), (3, Matrix::identity(QQ, 1))],
        )
        .unwrap();
        assert_eq!(f.compose(&id_s).unwrap(), f);
        assert!(id_s.compose(&f).is_err());
    }

    #[test]
    fn test_add_and_scale() {
        let q = quiver();
        let s = small_rep(&q);
        let id = QuiverRepHom::new(
            s.clone(),
            s.clone(),
            [(2, Matrix::identity(QQ, 1)), (3, Matrix::identity(QQ, 1))],
        )
        .unwrap();
        let two = id.add(&id).unwrap();
        assert_eq!(two, id.scale(&QQ.from_i64(2)).unwrap());
        assert!(id.add(&id.scale(&QQ.from_i64(-1)).unwrap()).unwrap().is_zero());
    }

    #[test]
    fn test_scale_by_fraction_in_prime_field() {
        let q = Arc::new(Quiver::from_adjacency(&[(1, &[(2, &["a", "b"])])]).unwrap());
        let k = BaseField::finite(3).unwrap();
        let p1 = Arc::new(QuiverRep::projective(k, q, 1).unwrap());
        let end = p1.hom_space(&p1).unwrap();
        let id = end.identity().unwrap();

        // 1/2 = 2 dans GF(3) : les deux chemins donnent 2·id
        let half = Scalar::new(1.into(), 2.into());
        let scaled = id.scale(&half).unwrap();
        assert!(!scaled.is_zero());
        assert_eq!(scaled, end.linear_combination(&[half]).unwrap());
        assert_eq!(scaled, id.add(&id).unwrap());

        let third = Scalar::new(1.into(), 3.into());
        assert_eq!(id.scale(&third).unwrap_err(), QuiverError::DivisionByZero(k));
    }

    #[test]
    fn test_isomorphism_needs_square_maps() {
        let q = quiver();
        let (s, m) = (small_rep(&q), big_rep(&q));
        let f = QuiverRepHom::new(
            s,
            m,
            [
                (2, Matrix::from_ints(QQ, 2, &[&[1, -1]]).unwrap()),
                (3, Matrix::identity(QQ, 1)),
            ],
        )
        .unwrap();
        assert!(f.is_injective());
        assert!(!f.is_isomorphism());
    }

    #[test]
    fn test_display() {
        let q = quiver();
        let s = small_rep(&q);
        let zero = QuiverRepHom::new(s.clone(), s, Vec::new()).unwrap();
        assert_eq!(zero.to_string(), "Homomorphism of representations of Quiver on 3 vertices");
    }
}
