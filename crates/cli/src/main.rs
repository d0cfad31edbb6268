use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rectflip::api::{enumerate, to_dot, EnumerateCfg, FlipWalker, RectCfg, WalkParams};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use provenance::{ArtifactKind, Payload};

#[derive(Parser)]
#[command(name = "rectflip-cli")]
#[command(about = "Enumerate rectangulations of a square and their flip graph")]
struct Cmd {
    /// Coordinate comparison tolerance
    #[arg(long, global = true, default_value_t = RectCfg::default().eps)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate every rectangulation of n rectangles and write the flip graph as JSON
    Enumerate {
        #[arg(long)]
        n: usize,
        #[arg(long)]
        out: PathBuf,
        /// Also write a Graphviz DOT file
        #[arg(long)]
        dot: Option<PathBuf>,
        /// Abort once more states than this are discovered
        #[arg(long)]
        max_states: Option<usize>,
    },
    /// Sample rectangulations by seeded random flip walks
    Walk {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 100)]
        steps: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let geom = RectCfg {
        eps: cmd.eps,
        ..RectCfg::default()
    };
    match cmd.action {
        Action::Enumerate {
            n,
            out,
            dot,
            max_states,
        } => run_enumerate(n, &out, dot.as_deref(), EnumerateCfg { geom, max_states }),
        Action::Walk {
            n,
            steps,
            seed,
            count,
            out,
        } => run_walk(WalkParams { n, steps }, seed, count, &out, geom),
        Action::Report => report(),
    }
}

fn run_enumerate(n: usize, out: &Path, dot: Option<&Path>, cfg: EnumerateCfg) -> Result<()> {
    tracing::info!(n, out = %out.display(), dot = ?dot, max_states = ?cfg.max_states, "enumerate");
    let graph = enumerate(n, cfg).with_context(|| format!("enumerating n = {n}"))?;
    let stats = graph.stats();
    tracing::info!(
        states = graph.len(),
        edges = graph.edge_count(),
        rewrites = stats.rewrites,
        revisits = stats.revisits,
        "flip graph"
    );

    let doc = export::graph_doc(n, &graph);
    write_json(out, &doc)?;
    let params = json!({ "n": n, "eps": cfg.geom.eps, "max_states": cfg.max_states });
    let summary = json!({
        "states": graph.len(),
        "edges": graph.edge_count(),
        "counts": doc.counts
    });
    provenance::write_sidecar(
        out,
        Payload::new(ArtifactKind::FlipGraph, params.clone(), summary.clone()),
    )?;

    if let Some(dot_path) = dot {
        provenance::create_parent(dot_path)?;
        std::fs::write(dot_path, to_dot(&graph, &format!("graph{n}")))
            .with_context(|| format!("writing {}", dot_path.display()))?;
        provenance::write_sidecar(
            dot_path,
            Payload::new(ArtifactKind::FlipGraphDot, params, summary),
        )?;
    }
    Ok(())
}

fn run_walk(params: WalkParams, seed: u64, count: usize, out: &Path, geom: RectCfg) -> Result<()> {
    tracing::info!(n = params.n, steps = params.steps, seed, count, out = %out.display(), "walk");
    let mut walker = FlipWalker::new(params, seed, geom)?;
    let mut docs = Vec::with_capacity(count);
    for _ in 0..count {
        let sample = walker.generate_next()?;
        docs.push(export::walk_doc(sample.replay.seed, &sample.walk));
    }
    write_json(out, &docs)?;
    let used = walker.params();
    let run = json!({
        "n": used.n,
        "steps": used.steps,
        "seed": seed,
        "count": count,
        "eps": geom.eps
    });
    let summary = json!({
        "walks": docs.len(),
        "rewrites": docs.iter().map(|d| d.path.len()).sum::<usize>()
    });
    provenance::write_sidecar(out, Payload::new(ArtifactKind::Walks, run, summary))?;
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    provenance::create_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "rectflip_version": rectflip::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
