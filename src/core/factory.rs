// =============================================================================
// FACTORY — Une seule instance de Hom(M, N) par couple (M, N)
// =============================================================================
//
// Calculer un espace Hom coûte une élimination de Gauss. Deux demandes
// pour des représentations ÉGALES doivent rendre le MÊME objet :
//
//   factory.get(M, N)  ──▶  clé (M, N)  ──▶  cache  ──▶  Arc<QuiverHomSpace>
//
// La clé est construite après validation (même carquois, même corps),
// donc une clé invalide n'entre jamais dans le cache.
//
// =============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::homspace::QuiverHomSpace;
use super::morphism::check_same_ground;
use super::representation::QuiverRep;
use crate::error::Result;

/// Clé du cache : le couple (domaine, codomaine), comparé structurellement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HomSpaceKey {
    domain: Arc<QuiverRep>,
    codomain: Arc<QuiverRep>,
}

impl HomSpaceKey {
    pub fn domain(&self) -> &Arc<QuiverRep> {
        &self.domain
    }

    pub fn codomain(&self) -> &Arc<QuiverRep> {
        &self.codomain
    }
}

/// Cache des espaces Hom déjà calculés.
#[derive(Debug, Default)]
pub struct HomSpaceFactory {
    cache: HashMap<HomSpaceKey, Arc<QuiverHomSpace>>,
}

impl HomSpaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valide le couple (M, N) et fabrique la clé correspondante.
    pub fn create_key(&self, domain: &Arc<QuiverRep>, codomain: &Arc<QuiverRep>) -> Result<HomSpaceKey> {
        check_same_ground(domain, codomain)?;
        Ok(HomSpaceKey {
            domain: domain.clone(),
            codomain: codomain.clone(),
        })
    }

    /// Renvoie Hom(domain, codomain), calculé au premier appel seulement.
    pub fn get(&mut self, domain: &Arc<QuiverRep>, codomain: &Arc<QuiverRep>) -> Result<Arc<QuiverHomSpace>> {
        let key = self.create_key(domain, codomain)?;
        if let Some(space) = self.cache.get(&key) {
            debug!(cached = self.cache.len(), "espace Hom trouvé dans le cache");
            return Ok(space.clone());
        }

        let space = Arc::new(QuiverHomSpace::new(domain.clone(), codomain.clone())?);
        self.cache.insert(key, space.clone());
        debug!(cached = self.cache.len(), "nouvel espace Hom mis en cache");
        Ok(space)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
