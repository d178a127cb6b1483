// =============================================================================
// CARQUOIS — Représentations de carquois et espaces Hom en Rust
// =============================================================================
//
// Carquois calcule l'espace Hom_Q(M, N) des homomorphismes entre deux
// représentations de dimension finie d'un même carquois, sur Q ou GF(p).
//
// Architecture :
//   core/    → Le cœur algébrique pur (corps, matrices, carquois, Hom)
//   config   → Lecture des fichiers de problème TOML
//   error    → Le type d'erreur commun
//
// Concepts fondamentaux :
//   Quiver   = un graphe orienté (arêtes multiples et boucles permises)
//   QuiverRep = un foncteur Q → Vect (un espace par sommet, une matrice par arête)
//   QuiverRepHom = une famille de matrices qui commute avec toutes les arêtes
//   QuiverHomSpace = le noyau du système de commutativité
//
//   Q :   1 ══a,b══▶ 2
//   M :   k ══[1 0],[0 1]══▶ k²        (la projective P(1))
//
// =============================================================================

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::field::{BaseField, Scalar};
pub use crate::core::homspace::{HomModule, QuiverHomSpace};
pub use crate::core::matrix::Matrix;
pub use crate::core::morphism::QuiverRepHom;
pub use crate::core::quiver::{Edge, Path, Quiver, Vertex};
pub use crate::core::representation::{QuiverRep, QuiverRepElement};
pub use crate::error::{QuiverError, Result};
