// =============================================================================
// CORE — Module principal du cœur algébrique
// =============================================================================
//
// Ce module regroupe toute la logique mathématique pure :
// pas de fichiers, pas de terminal, uniquement des corps, des matrices,
// des carquois et leurs représentations.
//
// Architecture :
//   field          → les corps de base (Q, GF(p)) et l'arithmétique exacte
//   matrix         → matrices denses, échelonnement, rang, noyaux
//   subspace       → sous-espaces de k^n (base échelonnée, coordonnées)
//   quiver         → le carquois (sommets + arêtes étiquetées + chemins)
//   representation → le foncteur Q → Vect (= les données concrètes)
//   validate       → la vérification de cohérence
//   morphism       → les homomorphismes de représentations
//   homspace       → l'espace Hom_Q(M, N) (= noyau d'un système linéaire)
//   factory        → une instance unique de Hom(M, N) par couple
//
// =============================================================================

pub mod field;
pub mod matrix;
pub mod subspace;
pub mod quiver;
pub mod representation;
pub mod validate;
pub mod morphism;
pub mod homspace;
pub mod factory;
