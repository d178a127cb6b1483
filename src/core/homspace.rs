// =============================================================================
// HOMSPACE — L'espace Hom_Q(M, N) des homomorphismes de représentations
// =============================================================================
//
// IDÉE : on pose un homomorphisme GÉNÉRIQUE dont les matrices aux sommets
// ont pour coefficients des inconnues. La commutativité des carrés donne
// un système linéaire homogène ; son noyau EST l'espace Hom.
//
// INCONNUES : numérotées à partir de 0, par sommet (ordre du carquois),
// puis ligne, puis colonne. Pour le sommet v d'indice idx :
//
//     inconnue (v, i, k)  =  offsets[idx] + i · dim N(v) + k
//
// ÉQUATIONS : pour chaque arête e : u → w, avec X = M(e), Y = N(e),
// A = f_u et B = f_w, le carré commute ssi A·Y = X·B, soit pour tout
// (i, j) avec i < dim M(u) et j < dim N(w) :
//
//     Σ_k A_ik · Y_kj  −  Σ_k X_ik · B_kj  =  0
//
// On range une équation par ligne de la matrice des coefficients
// (équations × inconnues) ; Hom_Q(M, N) est son noyau à droite.
// Les coefficients s'ACCUMULENT : pour une boucle (u = w), A et B sont
// la même matrice et les deux sommes portent sur les mêmes inconnues.
//
// EXEMPLE (Kronecker 1 ═a,b═▶ 2) :
//   Hom(S(2), P(1)) : f_1 : 0 → k, f_2 : k → k², aucune contrainte
//   → dimension 2
//
// MODULE À GAUCHE : si N est un module à gauche (N = kQ par exemple),
// Hom(P, N) en hérite : (e·f)(x) = e·f(x). Une arête e : u → w envoie
// e_w·Hom(P, N) dans e_u·Hom(P, N), d'où une représentation du carquois
// OPPOSÉ. Pour N = kQ et P = P(v), on retrouve la projective P(v) de Q^op.
//
// =============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::field::{BaseField, Scalar};
use super::matrix::{Matrix, Vector};
use super::morphism::{check_same_ground, variable_offsets, QuiverRepHom};
use super::quiver::{Path, Quiver, Vertex};
use super::representation::{PathBasisKind, QuiverRep, QuiverRepElement};
use super::subspace::Subspace;
use crate::error::{QuiverError, Result};

/// L'espace Hom_Q(domain, codomain), sous-espace de k^n.
#[derive(Debug, Clone)]
pub struct QuiverHomSpace {
    domain: Arc<QuiverRep>,
    codomain: Arc<QuiverRep>,
    /// Matrice du système (équations × inconnues)
    coefficients: Matrix,
    /// Le noyau, avec sa base échelonnée
    space: Subspace,
}

impl QuiverHomSpace {
    /// Calcule Hom_Q(domain, codomain).
    ///
    /// Échoue si les représentations ne partagent pas le même carquois
    /// et le même corps de base.
    pub fn new(domain: Arc<QuiverRep>, codomain: Arc<QuiverRep>) -> Result<Self> {
        check_same_ground(&domain, &codomain)?;
        let coefficients = build_coefficient_matrix(&domain, &codomain);
        let space = coefficients.right_kernel();

        debug!(
            equations = coefficients.nrows(),
            unknowns = coefficients.ncols(),
            dimension = space.dimension(),
            "espace Hom calculé"
        );

        Ok(QuiverHomSpace {
            domain,
            codomain,
            coefficients,
            space,
        })
    }

    pub fn base_field(&self) -> BaseField {
        self.domain.base_field()
    }

    pub fn quiver(&self) -> &Arc<Quiver> {
        self.domain.quiver()
    }

    pub fn domain(&self) -> &Arc<QuiverRep> {
        &self.domain
    }

    pub fn codomain(&self) -> &Arc<QuiverRep> {
        &self.codomain
    }

    /// La matrice du système linéaire (équations × inconnues)
    pub fn coefficient_matrix(&self) -> &Matrix {
        &self.coefficients
    }

    /// Le noyau, vu comme sous-espace de l'espace ambiant
    pub fn space(&self) -> &Subspace {
        &self.space
    }

    /// Dimension de l'espace ambiant Σ dim M(v) · dim N(v)
    pub fn ambient_dimension(&self) -> usize {
        self.space.degree()
    }

    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    /// Une base de l'espace Hom, un homomorphisme par vecteur de la base échelonnée
    pub fn gens(&self) -> Vec<QuiverRepHom> {
        self.space
            .basis()
            .iter()
            .map(|v| self.unchecked(v))
            .collect()
    }

    /// Coordonnées d'un homomorphisme dans la base `gens()`
    pub fn coordinates(&self, hom: &QuiverRepHom) -> Result<Vector> {
        if !self.is_parent_of(hom) {
            return Err(QuiverError::NotInHomSpace);
        }
        self.space
            .coordinates(&hom.vector())
            .map_err(|_| QuiverError::NotInHomSpace)
    }

    pub fn contains(&self, hom: &QuiverRepHom) -> bool {
        self.coordinates(hom).is_ok()
    }

    /// Σ coeffs[i] · gens()[i]
    pub fn linear_combination(&self, coeffs: &[Scalar]) -> Result<QuiverRepHom> {
        let normalized = coeffs
            .iter()
            .map(|c| self.base_field().normalize(c))
            .collect::<Result<Vector>>()?;
        let v = self.space.linear_combination(&normalized)?;
        Ok(self.unchecked(&v))
    }

    /// Construit un homomorphisme à partir de matrices aux sommets
    /// (voir `QuiverRepHom::new`).
    pub fn hom(&self, maps: impl IntoIterator<Item = (Vertex, Matrix)>) -> Result<QuiverRepHom> {
        QuiverRepHom::new(self.domain.clone(), self.codomain.clone(), maps)
    }

    /// Construit un homomorphisme à partir de son vecteur ambiant
    pub fn from_vector(&self, vector: &[Scalar]) -> Result<QuiverRepHom> {
        QuiverRepHom::from_vector(self.domain.clone(), self.codomain.clone(), vector)
    }

    /// L'homomorphisme nul
    pub fn zero(&self) -> QuiverRepHom {
        self.unchecked(&self.space.zero_vector())
    }

    /// Un élément de l'espace (somme des générateurs)
    pub fn an_element(&self) -> QuiverRepHom {
        self.unchecked(&self.space.an_element())
    }

    /// L'identité de End(M) ; seulement si domaine = codomaine
    pub fn identity(&self) -> Result<QuiverRepHom> {
        if self.domain != self.codomain {
            return Err(QuiverError::NotEndomorphismSpace);
        }
        let field = self.base_field();
        let maps = self
            .quiver()
            .vertices()
            .iter()
            .map(|&v| (v, Matrix::identity(field, self.domain.dimension_at(v))))
            .collect::<Vec<_>>();
        self.hom(maps)
    }

    /// Homomorphisme depuis une somme de projectives déterminé par l'image
    /// des générateurs.
    ///
    /// La composante de `image` au sommet u est l'image de e_u ; le vecteur
    /// de base p (chemin partant de u) est envoyé sur image·p.
    pub fn hom_from_generator_image(&self, image: &QuiverRepElement) -> Result<QuiverRepHom> {
        let basis = self
            .domain
            .path_basis()
            .filter(|b| b.kind == PathBasisKind::Projective)
            .ok_or(QuiverError::NoProjectiveBasis)?;

        let field = self.base_field();
        let mut maps = Vec::new();
        for (&w, paths) in &basis.paths {
            let mut rows = Vec::with_capacity(paths.len());
            for p in paths {
                let moved = self.codomain.act_by_path(image, p)?;
                let row = moved
                    .get(w)
                    .cloned()
                    .ok_or(QuiverError::UnknownVertex(w))?;
                rows.push(row);
            }
            maps.push((w, Matrix::from_rows(field, self.codomain.dimension_at(w), rows)?));
        }
        self.hom(maps)
    }

    /// Hom(P, N) comme représentation du carquois opposé, quand le
    /// codomaine N est un module à gauche.
    ///
    /// Au sommet v, l'espace e_v·Hom(P, N) ; `basis[v]` en donne une base
    /// sous forme d'homomorphismes, dans l'ordre des vecteurs de base.
    pub fn left_module(&self) -> Result<HomModule> {
        if !self.codomain.is_left_module() {
            return Err(QuiverError::NotLeftModule);
        }
        let generator = self.generator()?;
        let quiver = self.quiver();
        let field = self.base_field();
        let gens = self.gens();

        let mut spaces = BTreeMap::new();
        for &v in quiver.vertices() {
            let mut images = Vec::with_capacity(gens.len());
            for f in &gens {
                let g = self.left_translate(f, &generator, |x| self.codomain.left_act_by_vertex(x, v))?;
                images.push(g.vector());
            }
            spaces.insert(v, self.space.submodule(images)?);
        }

        let mut maps = Vec::new();
        for e in quiver.edges() {
            // e envoie e_w·Hom dans e_u·Hom : une ligne par vecteur de base au but
            let (source, target) = (&spaces[&e.source], &spaces[&e.target]);
            let mut rows = Vec::with_capacity(target.dimension());
            for vec in target.basis() {
                let f = self.unchecked(vec);
                let g = self.left_translate(&f, &generator, |x| self.codomain.left_act_by_edge(x, &e.label))?;
                rows.push(source.coordinates(&g.vector())?);
            }
            maps.push((e.label.clone(), Matrix::from_rows(field, source.dimension(), rows)?));
        }

        let dims: Vec<(Vertex, usize)> = spaces.iter().map(|(v, s)| (*v, s.dimension())).collect();
        let module = QuiverRep::new(field, Arc::new(quiver.reverse()), dims, maps)?;
        let basis = spaces
            .iter()
            .map(|(v, s)| (*v, s.basis().iter().map(|b| self.unchecked(b)).collect()))
            .collect();

        debug!(dimension = module.dimension(), "Hom vu comme module à gauche");
        Ok(HomModule { module, basis })
    }

    // Σ e_u sur les générateurs de la base projective du domaine.
    fn generator(&self) -> Result<QuiverRepElement> {
        let basis = self
            .domain
            .path_basis()
            .filter(|b| b.kind == PathBasisKind::Projective)
            .ok_or(QuiverError::NoProjectiveBasis)?;
        let mut parts = Vec::with_capacity(basis.vertices.len());
        for &u in &basis.vertices {
            let mut x = vec![self.base_field().zero(); self.domain.dimension_at(u)];
            let i = basis
                .position(&Path::identity(u))
                .ok_or(QuiverError::NoProjectiveBasis)?;
            x[i] = self.base_field().one();
            parts.push((u, x));
        }
        self.domain.element(parts)
    }

    // L'homomorphisme x ↦ act(f(x)), déterminé par l'image des générateurs.
    fn left_translate<F>(&self, f: &QuiverRepHom, generator: &QuiverRepElement, act: F) -> Result<QuiverRepHom>
    where
        F: Fn(&QuiverRepElement) -> Result<QuiverRepElement>,
    {
        let image = act(&f.apply(generator)?)?;
        self.hom_from_generator_image(&image)
    }

    fn is_parent_of(&self, hom: &QuiverRepHom) -> bool {
        hom.domain() == &self.domain && hom.codomain() == &self.codomain
    }

    // Les vecteurs du noyau vérifient les équations par construction.
    fn unchecked(&self, v: &[Scalar]) -> QuiverRepHom {
        QuiverRepHom::unpack(self.domain.clone(), self.codomain.clone(), v)
    }
}

/// Hom(P, N) muni de sa structure de module à gauche.
#[derive(Debug, Clone)]
pub struct HomModule {
    /// La représentation du carquois opposé
    pub module: QuiverRep,
    /// Au sommet v, les homomorphismes formant la base de e_v·Hom(P, N)
    pub basis: BTreeMap<Vertex, Vec<QuiverRepHom>>,
}

impl fmt::Display for QuiverHomSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dimension {} QuiverHomSpace", self.dimension())
    }
}

/// Assemble la matrice des coefficients du système A·Y − X·B = 0.
fn build_coefficient_matrix(domain: &QuiverRep, codomain: &QuiverRep) -> Matrix {
    let field = domain.base_field();
    let quiver = domain.quiver();
    let offsets = variable_offsets(domain, codomain);
    let unknowns = offsets.last().copied().unwrap_or(0);

    let equations: usize = quiver
        .edges()
        .iter()
        .map(|e| domain.dimension_at(e.source) * codomain.dimension_at(e.target))
        .sum();

    let mut coef = Matrix::zero(field, equations, unknowns);
    let mut eqn = 0;

    for e in quiver.edges() {
        let (Some(x), Some(y)) = (domain.map(&e.label), codomain.map(&e.label)) else {
            continue;
        };
        let (Some(u), Some(w)) = (quiver.vertex_index(e.source), quiver.vertex_index(e.target)) else {
            continue;
        };
        let (n_u, n_w) = (y.nrows(), y.ncols());
        trace!(edge = %e.label, equations = x.nrows() * n_w, "équations de commutativité");

        for i in 0..x.nrows() {
            for j in 0..n_w {
                for k in 0..n_u {
                    coef.add_to(eqn, offsets[u] + i * n_u + k, y.get(k, j));
                }
                for k in 0..x.ncols() {
                    coef.add_to(eqn, offsets[w] + k * n_w + j, &field.neg(x.get(i, k)));
                }
                eqn += 1;
            }
        }
    }

    coef
}
