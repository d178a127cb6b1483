// =============================================================================
// ERROR — Les erreurs du moteur
// =============================================================================
//
// Toutes les opérations faillibles du cœur renvoient `Result<T>`.
// Les vérifications de bonne formation (module validate) collectent
// TOUTES les violations avant d'échouer ; on les transporte ici telles quelles.
//
// =============================================================================

use thiserror::Error;

use crate::core::field::BaseField;
use crate::core::quiver::Vertex;
use crate::core::validate::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuiverError {
    /// Domaine et codomaine ne vivent pas sur le même carquois
    #[error("Les représentations ne sont pas sur le même carquois")]
    QuiverMismatch,

    /// Domaine et codomaine n'ont pas le même corps de base
    #[error("Les représentations ne sont pas sur le même corps de base ({left} vs {right})")]
    BaseFieldMismatch { left: BaseField, right: BaseField },

    #[error("{0} n'est pas un nombre premier")]
    NotPrime(u64),

    #[error("Division par zéro dans {0}")]
    DivisionByZero(BaseField),

    #[error("Scalaire illisible : '{0}'")]
    InvalidScalar(String),

    #[error("Le sommet {0} n'existe pas dans le carquois")]
    UnknownVertex(Vertex),

    #[error("L'arête '{0}' n'existe pas dans le carquois")]
    UnknownEdge(String),

    #[error("L'arête '{0}' existe déjà")]
    DuplicateEdge(String),

    /// Matrice dont les lignes n'ont pas toutes la même longueur
    #[error("Matrice irrégulière : la ligne {row} a {found} colonnes au lieu de {expected}")]
    RaggedMatrix { row: usize, expected: usize, found: usize },

    #[error("{context} : dimensions attendues {expected:?}, obtenues {found:?}")]
    ShapeMismatch {
        context: String,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Vecteur de longueur {found} dans un espace de dimension {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// Les applications aux sommets ne commutent pas avec l'arête
    #[error("Les applications ne commutent pas avec l'arête '{0}'")]
    NotEquivariant(String),

    #[error("Les homomorphismes n'ont pas les mêmes domaine et codomaine")]
    HomMismatch,

    #[error("Le vecteur n'appartient pas au sous-espace")]
    NotInSubspace,

    #[error("L'homomorphisme n'appartient pas à cet espace Hom")]
    NotInHomSpace,

    /// identity() n'a de sens que pour End(M)
    #[error("Le domaine et le codomaine diffèrent : pas d'identité")]
    NotEndomorphismSpace,

    #[error("Le domaine n'a pas de base de chemins projective")]
    NoProjectiveBasis,

    /// La base de chemins du codomaine n'est pas stable par e·p
    #[error("Le codomaine n'est pas un module à gauche")]
    NotLeftModule,

    /// Un cycle rend l'ensemble des chemins infini
    #[error("Une infinité de chemins passent par le sommet {0} (carquois cyclique)")]
    InfinitelyManyPaths(Vertex),

    #[error("Représentation invalide : {}", join_errors(.0))]
    InvalidRepresentation(Vec<ValidationError>),

    #[error("Configuration : {0}")]
    Config(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, QuiverError>;
