// =============================================================================
// REPRESENTATION — Un foncteur Quiver → Vect_k
// =============================================================================
//
// Une REPRÉSENTATION M d'un carquois Q sur un corps k assigne :
//   - à chaque SOMMET v un espace vectoriel M(v) = k^d(v)
//   - à chaque ARÊTE e : u → w une application linéaire M(e) : M(u) → M(w)
//
// C'est exactement une Instance au sens catégorique, mais à valeurs
// dans les espaces vectoriels au lieu des ensembles.
//
// CONVENTION : M(e) est une matrice d(u) × d(w) qui agit à droite
// sur les vecteurs lignes (voir matrix.rs).
//
// Représentations standard, pour un carquois sans cycle :
//   P(v) projective : base = chemins PARTANT de v ;   e envoie p sur p·e
//   I(v) injective  : base = duaux des chemins ARRIVANT à v ;
//                     e envoie p* sur q* si p = e·q, sinon 0
//   S(v) simple     : k au sommet v, 0 ailleurs
//
// EXEMPLE (carquois de Kronecker 1 ═a,b═▶ 2) :
//   P(1) : M(1) = <e_1>, M(2) = <a, b>, dimension (1, 2)
//   S(2) : M(1) = 0,     M(2) = k,      dimension (0, 1)
//
// =============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use num_traits::Zero;

use super::field::{BaseField, Scalar};
use super::homspace::QuiverHomSpace;
use super::matrix::{Matrix, Vector};
use super::quiver::{Path, Quiver, Vertex};
use super::validate;
use crate::error::{QuiverError, Result};

/// Nature d'une base de chemins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathBasisKind {
    /// Chemins partant du sommet (représentation projective)
    Projective,
    /// Duaux des chemins arrivant au sommet (représentation injective)
    Injective,
}

/// Base de chemins d'une somme de projectives (ou d'injectives) indécomposables.
///
/// `paths[w]` liste, dans l'ordre des vecteurs de base de M(w),
/// le chemin que chaque vecteur représente. `vertices` donne les sommets
/// des facteurs : v pour P(v), tous les sommets pour le module libre kQ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathBasis {
    pub kind: PathBasisKind,
    pub vertices: Vec<Vertex>,
    pub paths: BTreeMap<Vertex, Vec<Path>>,
}

impl PathBasis {
    // Concaténation des bases, dans l'ordre des blocs de la somme directe.
    // Deux facteurs au même sommet rendraient la base ambiguë.
    fn merge(&self, other: &PathBasis) -> Option<PathBasis> {
        if self.kind != other.kind || self.vertices.iter().any(|v| other.vertices.contains(v)) {
            return None;
        }
        let mut paths = self.paths.clone();
        for (w, ps) in &other.paths {
            paths.entry(*w).or_default().extend(ps.iter().cloned());
        }
        let mut vertices = self.vertices.clone();
        vertices.extend(other.vertices.iter().copied());
        vertices.sort_unstable();
        Some(PathBasis {
            kind: self.kind,
            vertices,
            paths,
        })
    }

    /// Position du chemin p dans la base de M(p.end) (projective) ou M(p.start) (injective)
    pub fn position(&self, p: &Path) -> Option<usize> {
        let w = match self.kind {
            PathBasisKind::Projective => p.end,
            PathBasisKind::Injective => p.start,
        };
        self.paths.get(&w)?.iter().position(|q| q == p)
    }
}

/// Une représentation de carquois de dimension finie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuiverRep {
    field: BaseField,
    quiver: Arc<Quiver>,
    /// Dimension de M(v), pour chaque sommet
    spaces: BTreeMap<Vertex, usize>,
    /// Matrice de M(e), pour chaque étiquette d'arête
    maps: BTreeMap<String, Matrix>,
    path_basis: Option<PathBasis>,
}

impl QuiverRep {
    /// Construit une représentation à partir de ses données.
    ///
    /// Les sommets absents ont la dimension 0, les arêtes absentes
    /// reçoivent l'application nulle. Toutes les incohérences sont
    /// rapportées ensemble.
    pub fn new<S: Into<String>>(
        field: BaseField,
        quiver: Arc<Quiver>,
        spaces: impl IntoIterator<Item = (Vertex, usize)>,
        maps: impl IntoIterator<Item = (S, Matrix)>,
    ) -> Result<Self> {
        let spaces: BTreeMap<Vertex, usize> = spaces.into_iter().collect();
        let maps: BTreeMap<String, Matrix> = maps.into_iter().map(|(l, m)| (l.into(), m)).collect();

        validate::validate_representation(field, &quiver, &spaces, &maps)
            .map_err(QuiverError::InvalidRepresentation)?;

        Ok(Self::complete(field, quiver, spaces, maps, None))
    }

    // Remplit les sommets et arêtes manquants (dimension 0, application nulle).
    fn complete(
        field: BaseField,
        quiver: Arc<Quiver>,
        mut spaces: BTreeMap<Vertex, usize>,
        mut maps: BTreeMap<String, Matrix>,
        path_basis: Option<PathBasis>,
    ) -> Self {
        for &v in quiver.vertices() {
            spaces.entry(v).or_insert(0);
        }
        for e in quiver.edges() {
            let shape = (spaces[&e.source], spaces[&e.target]);
            maps.entry(e.label.clone())
                .or_insert_with(|| Matrix::zero(field, shape.0, shape.1));
        }
        QuiverRep {
            field,
            quiver,
            spaces,
            maps,
            path_basis,
        }
    }

    /// La représentation nulle
    pub fn zero(field: BaseField, quiver: Arc<Quiver>) -> Self {
        Self::complete(field, quiver, BTreeMap::new(), BTreeMap::new(), None)
    }

    /// La simple S(v) : k au sommet v, 0 ailleurs
    pub fn simple(field: BaseField, quiver: Arc<Quiver>, v: Vertex) -> Result<Self> {
        if !quiver.has_vertex(v) {
            return Err(QuiverError::UnknownVertex(v));
        }
        Ok(Self::complete(field, quiver, BTreeMap::from([(v, 1)]), BTreeMap::new(), None))
    }

    /// La projective indécomposable P(v), de base les chemins partant de v
    pub fn projective(field: BaseField, quiver: Arc<Quiver>, v: Vertex) -> Result<Self> {
        let mut basis: BTreeMap<Vertex, Vec<Path>> = BTreeMap::new();
        for p in quiver.paths_from(v)? {
            basis.entry(p.end).or_default().push(p);
        }

        let mut maps = BTreeMap::new();
        for e in quiver.edges() {
            let rows = basis.get(&e.source).map(Vec::as_slice).unwrap_or(&[]);
            let cols = basis.get(&e.target).map(Vec::as_slice).unwrap_or(&[]);
            let mut m = Matrix::zero(field, rows.len(), cols.len());
            for (i, p) in rows.iter().enumerate() {
                let Some(q) = p.then(e) else { continue };
                if let Some(j) = cols.iter().position(|c| *c == q) {
                    m.set(i, j, field.one());
                }
            }
            maps.insert(e.label.clone(), m);
        }

        let spaces = basis.iter().map(|(w, ps)| (*w, ps.len())).collect();
        let path_basis = PathBasis {
            kind: PathBasisKind::Projective,
            vertices: vec![v],
            paths: basis,
        };
        Ok(Self::complete(field, quiver, spaces, maps, Some(path_basis)))
    }

    /// L'injective indécomposable I(v), de base les duaux des chemins arrivant à v
    pub fn injective(field: BaseField, quiver: Arc<Quiver>, v: Vertex) -> Result<Self> {
        let mut basis: BTreeMap<Vertex, Vec<Path>> = BTreeMap::new();
        for p in quiver.paths_to(v)? {
            basis.entry(p.start).or_default().push(p);
        }

        let mut maps = BTreeMap::new();
        for e in quiver.edges() {
            let rows = basis.get(&e.source).map(Vec::as_slice).unwrap_or(&[]);
            let cols = basis.get(&e.target).map(Vec::as_slice).unwrap_or(&[]);
            let mut m = Matrix::zero(field, rows.len(), cols.len());
            for (i, p) in rows.iter().enumerate() {
                // p* ↦ q* quand p = e·q
                if p.edges.first() != Some(&e.label) {
                    continue;
                }
                let tail = &p.edges[1..];
                if let Some(j) = cols.iter().position(|c| c.edges == tail) {
                    m.set(i, j, field.one());
                }
            }
            maps.insert(e.label.clone(), m);
        }

        let spaces = basis.iter().map(|(w, ps)| (*w, ps.len())).collect();
        let path_basis = PathBasis {
            kind: PathBasisKind::Injective,
            vertices: vec![v],
            paths: basis,
        };
        Ok(Self::complete(field, quiver, spaces, maps, Some(path_basis)))
    }

    /// Le module libre kQ = ⊕_v P(v), de base tous les chemins
    pub fn free_module(field: BaseField, quiver: Arc<Quiver>) -> Result<Self> {
        let mut total = Self::zero(field, quiver.clone());
        for &v in quiver.vertices() {
            total = total.direct_sum(&Self::projective(field, quiver.clone(), v)?)?;
        }
        Ok(total)
    }

    /// Somme directe M ⊕ N : matrices diagonales par blocs.
    ///
    /// Les bases de chemins se recollent quand les facteurs sont de même
    /// nature et sur des sommets distincts (P(1) ⊕ P(2), mais pas P(1) ⊕ P(1)).
    pub fn direct_sum(&self, other: &QuiverRep) -> Result<QuiverRep> {
        if self.quiver != other.quiver {
            return Err(QuiverError::QuiverMismatch);
        }
        if self.field != other.field {
            return Err(QuiverError::BaseFieldMismatch {
                left: self.field,
                right: other.field,
            });
        }

        let spaces: BTreeMap<Vertex, usize> = self
            .spaces
            .iter()
            .map(|(v, d)| (*v, d + other.dimension_at(*v)))
            .collect();

        let mut maps = BTreeMap::new();
        for (label, m) in &self.maps {
            let n = &other.maps[label];
            let mut block = Matrix::zero(self.field, m.nrows() + n.nrows(), m.ncols() + n.ncols());
            for i in 0..m.nrows() {
                for j in 0..m.ncols() {
                    block.set(i, j, m.get(i, j).clone());
                }
            }
            for i in 0..n.nrows() {
                for j in 0..n.ncols() {
                    block.set(m.nrows() + i, m.ncols() + j, n.get(i, j).clone());
                }
            }
            maps.insert(label.clone(), block);
        }

        let path_basis = match (&self.path_basis, &other.path_basis) {
            (Some(a), Some(b)) => a.merge(b),
            // La somme avec 0 garde la base de l'autre facteur
            (Some(a), None) if other.is_zero() => Some(a.clone()),
            (None, Some(b)) if self.is_zero() => Some(b.clone()),
            _ => None,
        };

        Ok(Self::complete(self.field, self.quiver.clone(), spaces, maps, path_basis))
    }

    pub fn base_field(&self) -> BaseField {
        self.field
    }

    pub fn quiver(&self) -> &Arc<Quiver> {
        &self.quiver
    }

    /// dim M(v), 0 pour un sommet inconnu
    pub fn dimension_at(&self, v: Vertex) -> usize {
        self.spaces.get(&v).copied().unwrap_or(0)
    }

    /// Vecteur dimension, dans l'ordre des sommets du carquois
    pub fn dimension_vector(&self) -> Vec<usize> {
        self.quiver.vertices().iter().map(|&v| self.dimension_at(v)).collect()
    }

    /// Dimension totale Σ dim M(v)
    pub fn dimension(&self) -> usize {
        self.spaces.values().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.dimension() == 0
    }

    /// Matrice de M(e)
    pub fn map(&self, label: &str) -> Option<&Matrix> {
        self.maps.get(label)
    }

    pub fn maps(&self) -> &BTreeMap<String, Matrix> {
        &self.maps
    }

    pub fn path_basis(&self) -> Option<&PathBasis> {
        self.path_basis.as_ref()
    }

    /// Construit un élément à partir de ses composantes.
    /// Les sommets absents reçoivent le vecteur nul.
    pub fn element(&self, parts: impl IntoIterator<Item = (Vertex, Vector)>) -> Result<QuiverRepElement> {
        let mut elem = self.zero_element();
        for (v, x) in parts {
            if !self.quiver.has_vertex(v) {
                return Err(QuiverError::UnknownVertex(v));
            }
            if x.len() != self.dimension_at(v) {
                return Err(QuiverError::LengthMismatch {
                    expected: self.dimension_at(v),
                    found: x.len(),
                });
            }
            let normalized = x
                .iter()
                .map(|s| self.field.normalize(s))
                .collect::<Result<Vector>>()?;
            elem.parts.insert(v, normalized);
        }
        Ok(elem)
    }

    pub fn zero_element(&self) -> QuiverRepElement {
        QuiverRepElement {
            parts: self
                .spaces
                .iter()
                .map(|(v, d)| (*v, vec![self.field.zero(); *d]))
                .collect(),
        }
    }

    /// Action à droite x·e : la composante en source(e) est envoyée en cible(e)
    pub fn act_by_edge(&self, x: &QuiverRepElement, label: &str) -> Result<QuiverRepElement> {
        let edge = self
            .quiver
            .edge(label)
            .ok_or_else(|| QuiverError::UnknownEdge(label.to_string()))?;
        let source_part = x.get(edge.source).ok_or(QuiverError::UnknownVertex(edge.source))?;
        let image = self.maps[label].vector_mul(source_part)?;
        let mut out = self.zero_element();
        out.parts.insert(edge.target, image);
        Ok(out)
    }

    /// Action à droite x·p le long d'un chemin (x·e_v = projection sur v)
    pub fn act_by_path(&self, x: &QuiverRepElement, path: &Path) -> Result<QuiverRepElement> {
        let start = x.get(path.start).ok_or(QuiverError::UnknownVertex(path.start))?;
        let mut out = self.zero_element();
        out.parts.insert(path.start, start.clone());
        for label in &path.edges {
            out = self.act_by_edge(&out, label)?;
        }
        Ok(out)
    }

    /// Vrai si la base de chemins est stable par multiplication À GAUCHE
    /// par les arêtes : e·p est encore un vecteur de base dès que e arrive
    /// au départ de p. C'est le cas de kQ, pas de P(2) pour 1 → 2.
    pub fn is_left_module(&self) -> bool {
        let Some(basis) = self.path_basis.as_ref().filter(|b| b.kind == PathBasisKind::Projective) else {
            return false;
        };
        basis.paths.values().flatten().all(|p| {
            self.quiver
                .edges_to(p.start)
                .into_iter()
                .filter_map(|e| p.after(e))
                .all(|q| basis.position(&q).is_some())
        })
    }

    /// Action à gauche de l'idempotent e_v : ne garde que les chemins partant de v
    pub fn left_act_by_vertex(&self, x: &QuiverRepElement, v: Vertex) -> Result<QuiverRepElement> {
        let basis = self.left_basis()?;
        let mut out = self.zero_element();
        for (w, ps) in &basis.paths {
            let (Some(src), Some(dst)) = (x.get(*w), out.parts.get_mut(w)) else {
                continue;
            };
            for (i, p) in ps.iter().enumerate() {
                if p.start == v {
                    dst[i] = src[i].clone();
                }
            }
        }
        Ok(out)
    }

    /// Action à gauche e·x : le coefficient de p passe sur e·p
    pub fn left_act_by_edge(&self, x: &QuiverRepElement, label: &str) -> Result<QuiverRepElement> {
        let basis = self.left_basis()?;
        let edge = self
            .quiver
            .edge(label)
            .ok_or_else(|| QuiverError::UnknownEdge(label.to_string()))?;
        let mut out = self.zero_element();
        for (w, ps) in &basis.paths {
            let (Some(src), Some(dst)) = (x.get(*w), out.parts.get_mut(w)) else {
                continue;
            };
            for (i, p) in ps.iter().enumerate() {
                let Some(q) = p.after(edge) else { continue };
                let j = basis.position(&q).ok_or(QuiverError::NotLeftModule)?;
                dst[j] = self.field.add(&dst[j], &src[i]);
            }
        }
        Ok(out)
    }

    fn left_basis(&self) -> Result<&PathBasis> {
        if !self.is_left_module() {
            return Err(QuiverError::NotLeftModule);
        }
        self.path_basis.as_ref().ok_or(QuiverError::NotLeftModule)
    }

    /// L'espace Hom(self, codomain)
    pub fn hom_space(self: &Arc<Self>, codomain: &Arc<QuiverRep>) -> Result<QuiverHomSpace> {
        QuiverHomSpace::new(self.clone(), codomain.clone())
    }
}

impl fmt::Display for QuiverRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.dimension_vector().iter().map(|d| d.to_string()).collect();
        write!(f, "Representation with dimension vector ({})", dims.join(", "))
    }
}

/// Un élément d'une représentation : un vecteur par sommet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuiverRepElement {
    parts: BTreeMap<Vertex, Vector>,
}

impl QuiverRepElement {
    /// Composante au sommet v
    pub fn get(&self, v: Vertex) -> Option<&Vector> {
        self.parts.get(&v)
    }

    pub fn parts(&self) -> &BTreeMap<Vertex, Vector> {
        &self.parts
    }

    pub fn is_zero(&self) -> bool {
        self.parts.values().flatten().all(Scalar::is_zero)
    }

    /// Sommets où l'élément est non nul
    pub fn support(&self) -> Vec<Vertex> {
        self.parts
            .iter()
            .filter(|(_, x)| x.iter().any(|s| !s.is_zero()))
            .map(|(v, _)| *v)
            .collect()
    }

    pub(crate) fn from_parts(parts: BTreeMap<Vertex, Vector>) -> Self {
        QuiverRepElement { parts }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const QQ: BaseField = BaseField::Rationals;

    fn kronecker() -> Arc<Quiver> {
        Arc::new(Quiver::from_adjacency(&[(1, &[(2, &["a", "b"])])]).unwrap())
    }

    /// 1 ═a,b═▶ 2, 1 ═c,d═▶ 3, 2 ─e─▶ 3
    fn wide() -> Arc<Quiver> {
        Arc::new(
            Quiver::from_adjacency(&[(1, &[(2, &["a", "b"]), (3, &["c", "d"])]), (2, &[(3, &["e"])])])
                .unwrap(),
        )
    }

    #[test]
    fn test_projective_kronecker() {
        let p1 = QuiverRep::projective(QQ, kronecker(), 1).unwrap();
        assert_eq!(p1.dimension_vector(), vec![1, 2]);
        assert_eq!(p1.map("a").unwrap(), &Matrix::from_ints(QQ, 2, &[&[1, 0]]).unwrap());
        assert_eq!(p1.map("b").unwrap(), &Matrix::from_ints(QQ, 2, &[&[0, 1]]).unwrap());
        assert_eq!(p1.path_basis().unwrap().kind, PathBasisKind::Projective);
    }

    #[test]
    fn test_injective_kronecker() {
        let i2 = QuiverRep::injective(QQ, kronecker(), 2).unwrap();
        assert_eq!(i2.dimension_vector(), vec![2, 1]);
        // a* ↦ e_2*, b* ↦ 0 pour l'arête a
        assert_eq!(i2.map("a").unwrap(), &Matrix::from_ints(QQ, 1, &[&[1], &[0]]).unwrap());
        assert_eq!(i2.map("b").unwrap(), &Matrix::from_ints(QQ, 1, &[&[0], &[1]]).unwrap());
    }

    #[test]
    fn test_simple() {
        let s2 = QuiverRep::simple(QQ, kronecker(), 2).unwrap();
        assert_eq!(s2.dimension_vector(), vec![0, 1]);
        assert!(s2.map("a").unwrap().is_zero());
        assert!(QuiverRep::simple(QQ, kronecker(), 5).is_err());
    }

    #[test]
    fn test_free_module() {
        let a = QuiverRep::free_module(BaseField::finite(3).unwrap(), wide()).unwrap();
        // P(1) = (1, 2, 4), P(2) = (0, 1, 1), P(3) = (0, 0, 1)
        assert_eq!(a.dimension_vector(), vec![1, 3, 6]);
        let basis = a.path_basis().unwrap();
        assert_eq!(basis.kind, PathBasisKind::Projective);
        assert_eq!(basis.vertices, vec![1, 2, 3]);
        // Les chemins arrivant en 3 : e_3, c, d, e, a*e, b*e
        assert_eq!(basis.paths[&3].len(), 6);
        assert!(a.is_left_module());
    }

    #[test]
    fn test_direct_sum_of_same_projective_drops_basis() {
        let p1 = QuiverRep::projective(QQ, kronecker(), 1).unwrap();
        assert!(p1.direct_sum(&p1).unwrap().path_basis().is_none());
    }

    #[test]
    fn test_left_module_structure() {
        let q = kronecker();
        let free = QuiverRep::free_module(QQ, q.clone()).unwrap();
        let basis = free.path_basis().unwrap();
        // kQ(2) a pour base a, b (issus de P(1)) puis e_2 (issu de P(2))
        let pos_e2 = basis.position(&Path::identity(2)).unwrap();
        let pos_a = basis
            .position(&Path::identity(1).then(q.edge("a").unwrap()).unwrap())
            .unwrap();
        assert_eq!((pos_a, pos_e2), (0, 2));

        let mut v2 = vec![QQ.zero(); 3];
        v2[pos_e2] = QQ.from_i64(5);
        let x = free.element([(2, v2)]).unwrap();
        // a·(5 e_2) = 5 a
        let ax = free.left_act_by_edge(&x, "a").unwrap();
        assert_eq!(ax.get(2).unwrap(), &vec![QQ.from_i64(5), QQ.zero(), QQ.zero()]);

        let only_from_1 = free.left_act_by_vertex(&ax, 1).unwrap();
        assert_eq!(only_from_1, ax);
        assert!(free.left_act_by_vertex(&x, 1).unwrap().is_zero());

        // P(2) ne contient pas a = a·e_2
        let p2 = QuiverRep::projective(QQ, q, 2).unwrap();
        assert!(!p2.is_left_module());
        let y = p2.element([(2, vec![QQ.one()])]).unwrap();
        assert_eq!(p2.left_act_by_edge(&y, "a").unwrap_err(), QuiverError::NotLeftModule);
    }

    #[test]
    fn test_projective_rejects_cycles() {
        let q = Arc::new(Quiver::from_adjacency(&[(1, &[(1, &["x"])])]).unwrap());
        assert!(QuiverRep::projective(QQ, q, 1).is_err());
    }

    #[test]
    fn test_new_reports_all_errors() {
        let q = kronecker();
        let err = QuiverRep::new(
            QQ,
            q,
            [(1, 2), (9, 1)],
            [("a", Matrix::zero(QQ, 1, 1))],
        )
        .unwrap_err();
        match err {
            QuiverError::InvalidRepresentation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("erreur inattendue : {:?}", other),
        }
    }

    #[test]
    fn test_direct_sum() {
        let q = kronecker();
        let p1 = QuiverRep::projective(QQ, q.clone(), 1).unwrap();
        let s1 = QuiverRep::simple(QQ, q, 1).unwrap();
        let sum = p1.direct_sum(&s1).unwrap();
        assert_eq!(sum.dimension_vector(), vec![2, 2]);
        assert_eq!(
            sum.map("a").unwrap(),
            &Matrix::from_ints(QQ, 2, &[&[1, 0], &[0, 0]]).unwrap()
        );
        let other = QuiverRep::simple(BaseField::finite(2).unwrap(), kronecker(), 1).unwrap();
        assert!(p1.direct_sum(&other).is_err());
    }

    #[test]
    fn test_edge_action() {
        let p1 = QuiverRep::projective(QQ, kronecker(), 1).unwrap();
        let x = p1.element([(1, vec![QQ.one()])]).unwrap();
        let xb = p1.act_by_edge(&x, "b").unwrap();
        assert_eq!(xb.get(2).unwrap(), &vec![QQ.zero(), QQ.one()]);
        assert_eq!(xb.support(), vec![2]);
        assert!(p1.act_by_edge(&x, "zz").is_err());
    }

    #[test]
    fn test_path_action_projects() {
        let p1 = QuiverRep::projective(QQ, kronecker(), 1).unwrap();
        let x = p1
            .element([(1, vec![QQ.one()]), (2, vec![QQ.one(), QQ.one()])])
            .unwrap();
        let y = p1.act_by_path(&x, &Path::identity(2)).unwrap();
        assert_eq!(y.support(), vec![2]);
        assert!(p1.element([(2, vec![QQ.one()])]).is_err());
    }

    #[test]
    fn test_display() {
        let p1 = QuiverRep::projective(QQ, kronecker(), 1).unwrap();
        assert_eq!(p1.to_string(), "Representation with dimension vector (1, 2)");
    }
}
