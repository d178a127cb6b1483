// =============================================================================
// QUIVER — Le carquois : un graphe orienté qui indexe les représentations
// =============================================================================
//
// Un CARQUOIS Q est un graphe orienté où l'on autorise :
//   - plusieurs arêtes entre deux mêmes sommets (a, b : 1 → 2)
//   - des boucles (c : 3 → 3)
//
// Chaque arête porte une ÉTIQUETTE unique. Le carquois engendre une
// catégorie libre (l'algèbre des chemins kQ) : ses morphismes sont les
// CHEMINS, composés de gauche à droite.
//
// EXEMPLE VISUEL (le carquois de Kronecker) :
//
//          a
//      1 ════▶ 2
//          b
//
// Construction à partir d'une liste d'adjacence :
//
//   Quiver::from_adjacency(&[(1, &[(2, &["a", "b"])])])
//
// =============================================================================

use std::fmt;

use crate::error::{QuiverError, Result};

/// Identifiant d'un sommet
pub type Vertex = u32;

/// Une arête étiquetée source → target.
///
/// L'ordre dérivé (source, target, label) est l'ordre canonique des arêtes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: Vertex,
    pub target: Vertex,
    pub label: String,
}

impl Edge {
    pub fn new(label: &str, source: Vertex, target: Vertex) -> Self {
        Edge {
            source,
            target,
            label: label.to_string(),
        }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} -> {}", self.label, self.source, self.target)
    }
}

/// Un chemin dans le carquois = une suite d'arêtes composables.
///
/// Le chemin `a*c` part de `start`, suit l'arête a puis l'arête c.
/// Un chemin sans arête est l'idempotent e_v du sommet de départ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    pub start: Vertex,
    pub end: Vertex,
    /// Étiquettes des arêtes, dans l'ordre de parcours
    pub edges: Vec<String>,
}

impl Path {
    /// Chemin trivial e_v
    pub fn identity(v: Vertex) -> Self {
        Path {
            start: v,
            end: v,
            edges: vec![],
        }
    }

    /// Prolonge le chemin par une arête partant de sa fin
    pub fn then(&self, edge: &Edge) -> Option<Self> {
        if edge.source != self.end {
            return None;
        }
        let mut edges = self.edges.clone();
        edges.push(edge.label.clone());
        Some(Path {
            start: self.start,
            end: edge.target,
            edges,
        })
    }

    /// Préfixe le chemin par une arête arrivant à son départ
    pub fn after(&self, edge: &Edge) -> Option<Self> {
        if edge.target != self.start {
            return None;
        }
        let mut edges = vec![edge.label.clone()];
        edges.extend(self.edges.iter().cloned());
        Some(Path {
            start: edge.source,
            end: self.end,
            edges,
        })
    }

    /// Compose deux chemins (le second commence là où le premier finit)
    pub fn compose(&self, other: &Path) -> Option<Self> {
        if self.end != other.start {
            return None;
        }
        let mut edges = self.edges.clone();
        edges.extend(other.edges.iter().cloned());
        Some(Path {
            start: self.start,
            end: other.end,
            edges,
        })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_identity(&self) -> bool {
        self.edges.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.edges.is_empty() {
            write!(f, "e_{}", self.start)
        } else {
            write!(f, "{}", self.edges.join("*"))
        }
    }
}

/// Le carquois : sommets et arêtes étiquetées.
///
/// Les sommets sont gardés triés ; leur position (`vertex_index`) fixe
/// l'ordre des coordonnées dans tout le reste du moteur.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Quiver {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Quiver {
    /// Crée un carquois vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit un carquois à partir d'une liste d'adjacence
    /// source → [(cible, [étiquettes])].
    pub fn from_adjacency(adjacency: &[(Vertex, &[(Vertex, &[&str])])]) -> Result<Self> {
        let mut q = Quiver::new();
        for (source, targets) in adjacency {
            q.add_vertex(*source);
            for (target, _) in targets.iter() {
                q.add_vertex(*target);
            }
        }
        for (source, targets) in adjacency {
            for (target, labels) in targets.iter() {
                for label in labels.iter() {
                    q.add_edge(label, *source, *target)?;
                }
            }
        }
        Ok(q)
    }

    /// Ajoute un sommet (sans effet s'il existe déjà)
    pub fn add_vertex(&mut self, v: Vertex) -> &mut Self {
        if let Err(pos) = self.vertices.binary_search(&v) {
            self.vertices.insert(pos, v);
        }
        self
    }

    /// Ajoute une arête étiquetée entre deux sommets existants
    pub fn add_edge(&mut self, label: &str, source: Vertex, target: Vertex) -> Result<&mut Self> {
        if !self.has_vertex(source) {
            return Err(QuiverError::UnknownVertex(source));
        }
        if !self.has_vertex(target) {
            return Err(QuiverError::UnknownVertex(target));
        }
        if self.edge(label).is_some() {
            return Err(QuiverError::DuplicateEdge(label.to_string()));
        }
        let edge = Edge::new(label, source, target);
        let pos = self.edges.binary_search(&edge).unwrap_or_else(|p| p);
        self.edges.insert(pos, edge);
        Ok(self)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn has_vertex(&self, v: Vertex) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }

    /// Position du sommet dans l'ordre canonique
    pub fn vertex_index(&self, v: Vertex) -> Option<usize> {
        self.vertices.binary_search(&v).ok()
    }

    /// Arête d'étiquette donnée
    pub fn edge(&self, label: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.label == label)
    }

    /// Arêtes sortant d'un sommet
    pub fn edges_from(&self, v: Vertex) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.source == v).collect()
    }

    /// Arêtes arrivant à un sommet
    pub fn edges_to(&self, v: Vertex) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.target == v).collect()
    }

    /// Le carquois opposé : mêmes sommets, arêtes retournées
    pub fn reverse(&self) -> Quiver {
        let mut edges: Vec<Edge> = self
            .edges
            .iter()
            .map(|e| Edge::new(&e.label, e.target, e.source))
            .collect();
        edges.sort();
        Quiver {
            vertices: self.vertices.clone(),
            edges,
        }
    }

    /// Tous les chemins partant de v, par longueur croissante.
    ///
    /// Échoue si un cycle est atteignable (ensemble infini).
    pub fn paths_from(&self, v: Vertex) -> Result<Vec<Path>> {
        if !self.has_vertex(v) {
            return Err(QuiverError::UnknownVertex(v));
        }
        self.collect_paths(v, |p| {
            self.edges_from(p.end)
                .into_iter()
                .filter_map(|e| p.then(e))
                .collect()
        })
    }

    /// Tous les chemins arrivant à v, par longueur croissante.
    pub fn paths_to(&self, v: Vertex) -> Result<Vec<Path>> {
        if !self.has_vertex(v) {
            return Err(QuiverError::UnknownVertex(v));
        }
        self.collect_paths(v, |p| {
            self.edges_to(p.start)
                .into_iter()
                .filter_map(|e| p.after(e))
                .collect()
        })
    }

    // Parcours en largeur. Dans un carquois sans cycle, un chemin a au plus
    // |V| - 1 arêtes : en atteindre |V| prouve l'existence d'un cycle.
    fn collect_paths(&self, v: Vertex, extend: impl Fn(&Path) -> Vec<Path>) -> Result<Vec<Path>> {
        let mut all = Vec::new();
        let mut frontier = vec![Path::identity(v)];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for p in &frontier {
                next.extend(extend(p));
            }
            if next.iter().any(|p| p.len() >= self.vertices.len()) {
                return Err(QuiverError::InfinitelyManyPaths(v));
            }
            all.append(&mut frontier);
            frontier = next;
        }
        Ok(all)
    }

    /// Affichage détaillé, une arête par ligne
    pub fn describe(&self) -> String {
        let mut out = String::from("quiver = literal {\n  vertices\n");
        for v in &self.vertices {
            out.push_str(&format!("    {}\n", v));
        }
        if !self.edges.is_empty() {
            out.push_str("  edges\n");
            for e in &self.edges {
                out.push_str(&format!("    {}\n", e));
            }
        }
        out.push('}');
        out
    }
}

impl fmt::Display for Quiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quiver on {} vertices", self.vertices.len())
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// 1 =a,b=> 2 -c-> 3
    fn a3_kronecker() -> Quiver {
        Quiver::from_adjacency(&[(1, &[(2, &["a", "b"])]), (2, &[(3, &["c"])])]).unwrap()
    }

    #[test]
    fn test_create_quiver() {
        let q = a3_kronecker();
        assert_eq!(q.vertices(), &[1, 2, 3]);
        assert_eq!(q.edges().len(), 3);
        assert_eq!(q.edges_from(1).len(), 2);
        assert_eq!(q.edges_to(3).len(), 1);
    }

    #[test]
    fn test_add_edge_errors() {
        let mut q = Quiver::new();
        q.add_vertex(1).add_vertex(2);
        assert!(q.add_edge("a", 1, 2).is_ok());
        assert_eq!(q.add_edge("a", 2, 1).unwrap_err(), QuiverError::DuplicateEdge("a".into()));
        assert_eq!(q.add_edge("b", 1, 9).unwrap_err(), QuiverError::UnknownVertex(9));
    }

    #[test]
    fn test_paths_from() {
        let q = a3_kronecker();
        let paths: Vec<String> = q.paths_from(1).unwrap().iter().map(|p| p.to_string()).collect();
        assert_eq!(paths, vec!["e_1", "a", "b", "a*c", "b*c"]);
    }

    #[test]
    fn test_paths_to() {
        let q = a3_kronecker();
        let paths = q.paths_to(3).unwrap();
        assert_eq!(paths.len(), 4); // e_3, c, a*c, b*c
        assert!(paths.iter().all(|p| p.end == 3));
    }

    #[test]
    fn test_cycle_gives_infinite_paths() {
        let q = Quiver::from_adjacency(&[(1, &[(2, &["a"])]), (2, &[(1, &["b"])])]).unwrap();
        assert_eq!(q.paths_from(1).unwrap_err(), QuiverError::InfinitelyManyPaths(1));

        let looped = Quiver::from_adjacency(&[(1, &[(1, &["x"])])]).unwrap();
        assert!(looped.paths_from(1).is_err());
    }

    #[test]
    fn test_reverse() {
        let q = a3_kronecker();
        let r = q.reverse();
        assert_eq!(r.edge("c"), Some(&Edge::new("c", 3, 2)));
        assert_eq!(r.paths_from(3).unwrap().len(), 4); // e_3, c, c*a, c*b
        assert_eq!(r.reverse(), q);
    }

    #[test]
    fn test_path_compose() {
        let q = a3_kronecker();
        let a = Path::identity(1).then(q.edge("a").unwrap()).unwrap();
        let c = Path::identity(2).then(q.edge("c").unwrap()).unwrap();
        let ac = a.compose(&c).unwrap();
        assert_eq!(ac.edges, vec!["a", "c"]);
        assert!(c.compose(&a).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(a3_kronecker().to_string(), "Quiver on 3 vertices");
        assert!(a3_kronecker().describe().contains("a : 1 -> 2"));
    }
}
