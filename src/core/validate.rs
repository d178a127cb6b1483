// =============================================================================
// VALIDATE — Vérification de la bonne formation
// =============================================================================
//
// Ce module vérifie que les structures sont cohérentes :
//   - Un Quiver est bien formé (arêtes entre sommets existants, étiquettes uniques)
//   - Une représentation assigne des espaces à des sommets EXISTANTS,
//     des matrices à des arêtes EXISTANTES, et chaque matrice a la forme
//     dim(source) × dim(cible)
//
// On collecte TOUTES les violations au lieu de s'arrêter à la première :
// un utilisateur qui écrit une représentation à la main veut voir
// toutes ses erreurs d'un coup.
//
// =============================================================================

use std::collections::{BTreeMap, BTreeSet};

use super::field::BaseField;
use super::matrix::Matrix;
use super::quiver::{Quiver, Vertex};

/// Erreur de validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: String) -> Self {
        ValidationError { message }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation error: {}", self.message)
    }
}

/// Vérifie qu'un Quiver est bien formé.
pub fn validate_quiver(quiver: &Quiver) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut labels = BTreeSet::new();

    for edge in quiver.edges() {
        if !quiver.has_vertex(edge.source) {
            errors.push(ValidationError::new(format!(
                "Arête '{}' : le sommet source {} n'existe pas",
                edge.label, edge.source
            )));
        }
        if !quiver.has_vertex(edge.target) {
            errors.push(ValidationError::new(format!(
                "Arête '{}' : le sommet cible {} n'existe pas",
                edge.label, edge.target
            )));
        }
        if !labels.insert(edge.label.as_str()) {
            errors.push(ValidationError::new(format!(
                "Arête '{}' : étiquette en double",
                edge.label
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Vérifie les données brutes d'une représentation avant de la construire.
///
/// Conditions :
/// - chaque espace est posé sur un sommet du carquois
/// - chaque matrice est posée sur une arête du carquois
/// - la matrice de e : u → w est de forme dim(u) × dim(w)
/// - chaque matrice est à coefficients dans le corps de base
pub fn validate_representation(
    field: BaseField,
    quiver: &Quiver,
    spaces: &BTreeMap<Vertex, usize>,
    maps: &BTreeMap<String, Matrix>,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = match validate_quiver(quiver) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    for v in spaces.keys() {
        if !quiver.has_vertex(*v) {
            errors.push(ValidationError::new(format!(
                "Espace posé sur le sommet {} qui n'existe pas",
                v
            )));
        }
    }

    let dim = |v: Vertex| spaces.get(&v).copied().unwrap_or(0);

    for (label, matrix) in maps {
        let Some(edge) = quiver.edge(label) else {
            errors.push(ValidationError::new(format!(
                "Matrice posée sur l'arête '{}' qui n'existe pas",
                label
            )));
            continue;
        };

        let expected = (dim(edge.source), dim(edge.target));
        if matrix.shape() != expected {
            errors.push(ValidationError::new(format!(
                "Arête '{}' : matrice {}x{} au lieu de {}x{}",
                label,
                matrix.nrows(),
                matrix.ncols(),
                expected.0,
                expected.1
            )));
        }
        if matrix.field() != field {
            errors.push(ValidationError::new(format!(
                "Arête '{}' : matrice sur {} au lieu de {}",
                label,
                matrix.field(),
                field
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
