// =============================================================================
// CONFIG — Fichiers de problème TOML
// =============================================================================
//
// Un fichier décrit un corps, un carquois, des représentations nommées
// et (optionnellement) l'espace Hom à calculer :
//
//   field = "GF(7)"
//   [quiver]
//   vertices = [1, 2]
//   edges = [{ label = "a", source = 1, target = 2 }]
//   [representations.P]
//   kind = "projective"
//   vertex = 1
//   [hom]
//   domain = "P"
//   codomain = "P"
//
// Les scalaires s'écrivent en entiers (1, -2) ou en texte ("1/2").
// Les erreurs de lecture deviennent QuiverError::Config ; les erreurs
// mathématiques (matrice de mauvaise forme...) gardent leur variante.
//
// =============================================================================

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::core::field::{BaseField, Scalar};
use crate::core::homspace::QuiverHomSpace;
use crate::core::matrix::Matrix;
use crate::core::quiver::{Quiver, Vertex};
use crate::core::representation::QuiverRep;
use crate::error::{QuiverError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProblemFile {
    field: String,
    quiver: QuiverSection,
    #[serde(default)]
    representations: BTreeMap<String, RepSection>,
    hom: Option<HomSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuiverSection {
    #[serde(default)]
    vertices: Vec<Vertex>,
    #[serde(default)]
    edges: Vec<EdgeSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeSection {
    label: String,
    source: Vertex,
    target: Vertex,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RepSection {
    Explicit {
        #[serde(default)]
        spaces: Vec<SpaceSection>,
        #[serde(default)]
        maps: Vec<MapSection>,
    },
    Projective {
        vertex: Vertex,
    },
    Simple {
        vertex: Vertex,
    },
    Injective {
        vertex: Vertex,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpaceSection {
    vertex: Vertex,
    dim: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MapSection {
    edge: String,
    #[serde(default)]
    rows: Vec<Vec<ScalarEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScalarEntry {
    Int(i64),
    Text(String),
}

impl ScalarEntry {
    fn to_scalar(&self, field: BaseField) -> Result<Scalar> {
        match self {
            ScalarEntry::Int(n) => Ok(field.from_i64(*n)),
            ScalarEntry::Text(t) => field.parse(t),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HomSection {
    domain: String,
    codomain: String,
}

/// Un problème chargé : le corps, le carquois et les représentations nommées.
#[derive(Debug, Clone)]
pub struct Problem {
    pub field: BaseField,
    pub quiver: Arc<Quiver>,
    pub representations: BTreeMap<String, Arc<QuiverRep>>,
    /// Le couple (domaine, codomaine) demandé, s'il y en a un
    pub hom: Option<(String, String)>,
}

impl Problem {
    /// Charge un fichier TOML depuis le disque.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| QuiverError::Config(format!("{} : {}", path.display(), e)))?;
        debug!(path = %path.display(), "lecture du fichier de problème");
        Self::parse(&content)
    }

    /// Lit un problème depuis le texte TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let file: ProblemFile =
            toml::from_str(content).map_err(|e| QuiverError::Config(e.to_string()))?;

        let field = BaseField::from_name(&file.field)?;

        let mut quiver = Quiver::new();
        for v in &file.quiver.vertices {
            quiver.add_vertex(*v);
        }
        for e in &file.quiver.edges {
            quiver.add_edge(&e.label, e.source, e.target)?;
        }
        let quiver = Arc::new(quiver);

        let mut representations = BTreeMap::new();
        for (name, section) in &file.representations {
            let rep = build_representation(field, &quiver, section)?;
            debug!(name = %name, dimension = rep.dimension(), "représentation chargée");
            representations.insert(name.clone(), Arc::new(rep));
        }

        let hom = file.hom.map(|h| (h.domain, h.codomain));
        if let Some((domain, codomain)) = &hom {
            for name in [domain, codomain] {
                if !representations.contains_key(name) {
                    return Err(QuiverError::Config(format!(
                        "[hom] : représentation '{}' non définie",
                        name
                    )));
                }
            }
        }

        Ok(Problem {
            field,
            quiver,
            representations,
            hom,
        })
    }

    pub fn representation(&self, name: &str) -> Result<&Arc<QuiverRep>> {
        self.representations
            .get(name)
            .ok_or_else(|| QuiverError::Config(format!("représentation '{}' non définie", name)))
    }

    /// Calcule l'espace Hom demandé dans la section [hom].
    pub fn hom_space(&self) -> Result<QuiverHomSpace> {
        let (domain, codomain) = self
            .hom
            .as_ref()
            .ok_or_else(|| QuiverError::Config("section [hom] absente".to_string()))?;
        let domain = self.representation(domain)?;
        let codomain = self.representation(codomain)?;
        domain.hom_space(codomain)
    }
}

fn build_representation(field: BaseField, quiver: &Arc<Quiver>, section: &RepSection) -> Result<QuiverRep> {
    match section {
        RepSection::Projective { vertex } => QuiverRep::projective(field, quiver.clone(), *vertex),
        RepSection::Simple { vertex } => QuiverRep::simple(field, quiver.clone(), *vertex),
        RepSection::Injective { vertex } => QuiverRep::injective(field, quiver.clone(), *vertex),
        RepSection::Explicit { spaces, maps } => {
            let dims: BTreeMap<Vertex, usize> = spaces.iter().map(|s| (s.vertex, s.dim)).collect();
            let mut matrices = Vec::with_capacity(maps.len());
            for m in maps {
                let edge = quiver
                    .edge(&m.edge)
                    .ok_or_else(|| QuiverError::UnknownEdge(m.edge.clone()))?;
                let ncols = dims.get(&edge.target).copied().unwrap_or(0);
                let rows = m
                    .rows
                    .iter()
                    .map(|row| row.iter().map(|x| x.to_scalar(field)).collect::<Result<Vec<_>>>())
                    .collect::<Result<Vec<_>>>()?;
                matrices.push((m.edge.clone(), Matrix::from_rows(field, ncols, rows)?));
            }
            QuiverRep::new(field, quiver.clone(), dims, matrices)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const KRONECKER: &str = r#"
        field = "QQ"
        [quiver]
        vertices = [1, 2]
        edges = [
            { label = "a", source = 1, target = 2 },
            { label = "b", source = 1, target = 2 },
        ]
        [representations.S]
        kind = "simple"
        vertex = 2
        [representations.P]
        kind = "projective"
        vertex = 1
        [hom]
        domain = "S"
        codomain = "P"
    "#;

    #[test]
    fn test_parse_kronecker() {
        let problem = Problem::parse(KRONECKER).unwrap();
        assert_eq!(problem.field, BaseField::Rationals);
        assert_eq!(problem.quiver.edges().len(), 2);
        assert_eq!(problem.representation("P").unwrap().dimension_vector(), vec![1, 2]);
        assert_eq!(problem.hom_space().unwrap().dimension(), 2);
    }

    #[test]
    fn test_explicit_representation() {
        let text = r#"
            field = "GF(3)"
            [quiver]
            vertices = [1, 2]
            edges = [{ label = "a", source = 1, target = 2 }]
            [representations.M]
            kind = "explicit"
            spaces = [{ vertex = 1, dim = 2 }, { vertex = 2, dim = 1 }]
            maps = [{ edge = "a", rows = [[1], ["-1"]] }]
        "#;
        let problem = Problem::parse(text).unwrap();
        let m = problem.representation("M").unwrap();
        let k = BaseField::finite(3).unwrap();
        assert_eq!(m.map("a").unwrap(), &Matrix::from_ints(k, 1, &[&[1], &[2]]).unwrap());
        assert!(problem.hom.is_none());
        assert!(matches!(problem.hom_space().unwrap_err(), QuiverError::Config(_)));
    }

    #[test]
    fn test_bad_shape_is_reported() {
        let text = r#"
            field = "QQ"
            [quiver]
            vertices = [1, 2]
            edges = [{ label = "a", source = 1, target = 2 }]
            [representations.M]
            kind = "explicit"
            spaces = [{ vertex = 1, dim = 1 }, { vertex = 2, dim = 1 }]
            maps = [{ edge = "a", rows = [[1], [0]] }]
        "#;
        assert!(matches!(
            Problem::parse(text).unwrap_err(),
            QuiverError::InvalidRepresentation(_)
        ));
    }

    #[test]
    fn test_config_errors() {
        assert!(matches!(Problem::parse("field = 3").unwrap_err(), QuiverError::Config(_)));

        let unknown_field = KRONECKER.replace("\"QQ\"", "\"GF(8)\"");
        assert_eq!(Problem::parse(&unknown_field).unwrap_err(), QuiverError::NotPrime(8));

        let missing = KRONECKER.replace("codomain = \"P\"", "codomain = \"N\"");
        assert!(matches!(Problem::parse(&missing).unwrap_err(), QuiverError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Problem::load("/nonexistent/problem.toml").unwrap_err(),
            QuiverError::Config(_)
        ));
    }

    #[test]
    fn test_demo_file_parses() {
        let problem = Problem::parse(include_str!("../demos/kronecker.toml")).unwrap();
        assert!(problem.hom_space().is_ok());
    }
}
