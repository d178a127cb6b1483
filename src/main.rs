// =============================================================================
// CARQUOIS — Point d'entrée : démonstration et calcul d'espaces Hom
// =============================================================================
//
// Deux sous-commandes :
//   carquois demo               → un exemple complet sur le carquois de Kronecker
//   carquois hom <FICHIER>      → lit un problème TOML et calcule Hom(M, N)
//
// Les logs partent sur stderr ; RUST_LOG est respecté sans -v.
//
// =============================================================================

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use carquois::config::Problem;
use carquois::core::factory::HomSpaceFactory;
use carquois::{BaseField, Matrix, Quiver, QuiverHomSpace, QuiverRep, QuiverRepHom};

/// Espaces d'homomorphismes de représentations de carquois
#[derive(Parser)]
#[command(name = "carquois", version, about)]
struct Cli {
    /// Verbosité (-v : debug, -vv : trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Déroule un exemple complet
    Demo,
    /// Calcule l'espace Hom décrit par un fichier TOML
    Hom {
        /// Fichier de problème
        file: PathBuf,
        /// Affiche aussi une base de l'espace
        #[arg(long)]
        gens: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Demo => demo(),
        Commands::Hom { file, gens } => hom(file, gens),
    }
}

fn hom(file: PathBuf, show_gens: bool) -> Result<()> {
    let problem = Problem::load(&file).with_context(|| format!("lecture de {}", file.display()))?;
    let space = problem.hom_space().context("calcul de l'espace Hom")?;

    println!("{}", problem.quiver.describe());
    println!("Corps : {} (caractéristique {})", problem.field, problem.field.characteristic());
    println!("Domaine   : {}", space.domain());
    println!("Codomaine : {}", space.codomain());
    println!("{}", space);

    if show_gens {
        for (i, g) in space.gens().iter().enumerate() {
            println!("\n--- Générateur {} ---", i + 1);
            print_hom(g);
        }
    }
    Ok(())
}

fn demo() -> Result<()> {
    println!("╔══════════════════════════════════════════════════╗");
    println!("║      CARQUOIS — Représentations de carquois      ║");
    println!("║      Espaces Hom par algèbre linéaire exacte     ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Le carquois de Kronecker 1 ═a,b═▶ 2
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Carquois de Kronecker ═══\n");

    let mut q = Quiver::new();
    q.add_vertex(1).add_vertex(2);
    q.add_edge("a", 1, 2)?.add_edge("b", 1, 2)?;
    let q = Arc::new(q);
    println!("{}\n", q.describe());

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : Représentations standard
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : Projectives, simples, injectives ═══\n");

    let field = BaseField::Rationals;
    let p1 = Arc::new(QuiverRep::projective(field, q.clone(), 1)?);
    let s2 = Arc::new(QuiverRep::simple(field, q.clone(), 2)?);
    let i2 = Arc::new(QuiverRep::injective(field, q.clone(), 2)?);
    println!("P(1) : {}", p1);
    println!("S(2) : {}", s2);
    println!("I(2) : {}\n", i2);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Hom(S(2), P(1)) = noyau du système de commutativité
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : Hom(S(2), P(1)) ═══\n");

    let mut factory = HomSpaceFactory::new();
    let h = factory.get(&s2, &p1)?;
    println!("{} (espace ambiant de dimension {})", h, h.ambient_dimension());
    for (i, g) in h.gens().iter().enumerate() {
        println!("\n--- Générateur {} ---", i + 1);
        print_hom(g);
    }

    let f = h.hom([(2, Matrix::from_ints(field, 2, &[&[1, -1]])?)])?;
    let coords: Vec<String> = h.coordinates(&f)?.iter().map(|c| c.to_string()).collect();
    println!("\nf = (1, -1) au sommet 2 : coordonnées [{}]", coords.join(", "));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Endomorphismes et identité
    // ═══════════════════════════════════════════════════════════
    println!("\n═══ ÉTAPE 4 : End(P(1)) et Hom(P(1), I(2)) ═══\n");

    let end = factory.get(&p1, &p1)?;
    let id = end.identity()?;
    println!("End(P(1)) : {}", end);
    if end.contains(&id) && id.is_isomorphism() {
        println!("✓ L'identité est un automorphisme de P(1)");
    } else {
        println!("✗ L'identité n'est pas dans End(P(1))");
    }

    let to_injective = QuiverHomSpace::new(p1.clone(), i2)?;
    println!("Hom(P(1), I(2)) : {}", to_injective);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 5 : Hom(P(1), kQ) comme module à gauche
    // ═══════════════════════════════════════════════════════════
    println!("\n═══ ÉTAPE 5 : Hom(P(1), kQ) sur le carquois opposé ═══\n");

    let free = Arc::new(QuiverRep::free_module(field, q.clone())?);
    let to_free = factory.get(&p1, &free)?;
    let left = to_free.left_module()?;
    println!("Hom(P(1), kQ) : {}", to_free);
    println!("Vecteur dimension sur Q^op : {:?}", left.module.dimension_vector());

    println!("\n═══════════════════════════════════════════════════");
    println!("{} espaces Hom en cache", factory.len());
    Ok(())
}

fn print_hom(f: &QuiverRepHom) {
    for (v, m) in f.maps() {
        if m.nrows() == 0 || m.ncols() == 0 {
            continue;
        }
        println!("sommet {} :\n{}", v, m);
    }
}
