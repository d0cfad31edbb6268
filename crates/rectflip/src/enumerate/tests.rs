use super::*;
use crate::error::{EnumerateError, RectError, SplitError};
use crate::geom::RectCfg;
use crate::geom::Rectangle;
use crate::moves::MoveKind;
use crate::rectangulation::Rectangulation;

fn run(n: usize) -> FlipGraph {
    enumerate(n, EnumerateCfg::default()).unwrap()
}

#[test]
fn single_rectangle_has_no_edges() {
    let g = run(1);
    assert_eq!(g.len(), 1);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.adjacency().len(), 1);
    assert_eq!(g.edge(0, 0), None);
    assert_eq!(g.stats().rewrites, 0);
}

#[test]
fn two_rectangles_vertical_and_horizontal() {
    let g = run(2);
    assert_eq!(g.len(), 2);
    assert_eq!(g.edges(), vec![(0, 1, MoveKind::Flip)]);
    assert_eq!(g.edge(1, 0), Some(MoveKind::Flip));
    assert_eq!(g.edge(0, 0), None);
    assert_eq!(g.edge(1, 1), None);
}

#[test]
fn three_rectangles_form_a_hexagon() {
    let g = run(3);
    assert_eq!(g.len(), 6);
    assert_eq!(
        g.edges(),
        vec![
            (0, 1, MoveKind::Flip),
            (0, 2, MoveKind::Flip),
            (1, 3, MoveKind::TFlip),
            (2, 4, MoveKind::TFlip),
            (3, 5, MoveKind::Flip),
            (4, 5, MoveKind::Flip),
        ]
    );
    assert_eq!(g.count(MoveKind::Flip), 4);
    assert_eq!(g.count(MoveKind::TFlip), 2);
    for i in 0..g.len() {
        assert_eq!(g.neighbors(i).count(), 2);
    }
    // The last state is three horizontal strips, 1 on top.
    let last = &g.states()[5];
    assert_eq!(last.by_label(1).unwrap().top(), 100.0);
    assert_eq!(last.by_label(3).unwrap().bottom(), 0.0);
    assert!(last.rects().iter().all(|r| r.width() == 100.0));
}

#[test]
fn four_rectangles_golden_counts() {
    let g = run(4);
    assert_eq!(g.len(), 22);
    assert_eq!(g.edge_count(), 34);
    assert_eq!(g.count(MoveKind::Flip), 18);
    assert_eq!(g.count(MoveKind::TFlip), 16);
    let s = g.stats();
    assert_eq!(s.expanded, 22);
    assert_eq!(s.discovered, 21);
}

#[test]
fn matrix_is_symmetric_without_self_edges() {
    let g = run(4);
    let m = g.adjacency();
    assert_eq!(m.len(), g.len());
    assert!(m.is_symmetric());
    assert!((0..g.len()).all(|i| m.get(i, i).is_none()));
}

#[test]
fn states_are_pairwise_distinct_and_valid() {
    let g = run(4);
    let cfg = EnumerateCfg::default().geom;
    for (i, a) in g.states().iter().enumerate() {
        assert!(a.validate(&cfg).is_ok());
        assert_eq!(g.index_of(a), Some(i));
        for b in &g.states()[i + 1..] {
            assert!(!a.equivalent(b, &cfg));
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let a = run(4);
    let b = run(4);
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.states(), b.states());
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn explore_from_other_start_finds_same_component() {
    let g3 = run(3);
    let from_last = explore(g3.states()[5].clone(), EnumerateCfg::default()).unwrap();
    assert_eq!(from_last.len(), 6);
    assert_eq!(from_last.edge_count(), 6);
    for s in g3.states() {
        assert!(from_last.index_of(s).is_some());
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        enumerate(0, EnumerateCfg::default()).unwrap_err(),
        EnumerateError::Rect(RectError::InvalidSize { n: 0 })
    );
    // Leaves a gap between the strips; `from_rects` would reject it.
    let r = Rectangulation::canonical(2).unwrap().with_pair(
        0,
        Rectangle::from_bounds(0.0, 0.0, 50.0, 100.0, 1),
        1,
        Rectangle::from_bounds(60.0, 0.0, 100.0, 100.0, 2),
    );
    assert!(matches!(
        explore(r, EnumerateCfg::default()),
        Err(EnumerateError::Rect(_))
    ));
}

#[test]
fn state_limit_aborts() {
    let cfg = EnumerateCfg {
        max_states: Some(5),
        ..EnumerateCfg::default()
    };
    assert_eq!(
        enumerate(4, cfg).unwrap_err(),
        EnumerateError::StateLimit { limit: 5 }
    );
    let roomy = EnumerateCfg {
        max_states: Some(6),
        ..EnumerateCfg::default()
    };
    assert_eq!(enumerate(3, roomy).unwrap().len(), 6);
}

#[test]
fn split_failure_aborts_the_whole_run() {
    // With no bisection steps, flipping the first two strips cannot place
    // its new edge, since the middle of their shared edge is on the diagonal.
    let cfg = EnumerateCfg {
        geom: RectCfg {
            max_bisections: 0,
            ..RectCfg::default()
        },
        max_states: None,
    };
    let res = enumerate(4, cfg);
    assert_eq!(
        res.unwrap_err(),
        EnumerateError::Split(SplitError::NoConvergence { steps: 0 })
    );
}

#[test]
fn index_lookup_ignores_coordinates() {
    let g = run(2);
    let cfg = EnumerateCfg::default().geom;
    let skewed = Rectangulation::from_rects(
        vec![
            Rectangle::from_bounds(0.0, 70.0, 100.0, 100.0, 1),
            Rectangle::from_bounds(0.0, 0.0, 100.0, 70.0, 2),
        ],
        &cfg,
    )
    .unwrap();
    assert_eq!(g.index_of(&skewed), Some(1));
    assert_eq!(g.index_of(&Rectangulation::canonical(3).unwrap()), None);
}

#[test]
fn dot_export_colors_edges() {
    let g = run(3);
    let dot = to_dot(&g, "graph3");
    assert!(dot.starts_with("graph \"graph3\" {\n"));
    assert!(dot.contains("    0 -- 1 [color=red, label=\"flip\"];\n"));
    assert!(dot.contains("    1 -- 3 [color=blue, label=\"T-flip\"];\n"));
    assert_eq!(dot.matches(" -- ").count(), 6);
    assert!(dot.ends_with("}\n"));
}

#[test]
fn adjacency_matrix_grows_and_overwrites() {
    let mut m = AdjacencyMatrix::new();
    assert!(m.is_empty());
    assert_eq!(m.grow(), 0);
    assert_eq!(m.grow(), 1);
    assert_eq!(m.grow(), 2);
    m.set(0, 2, MoveKind::Flip);
    assert_eq!(m.get(2, 0), Some(MoveKind::Flip));
    m.set(2, 0, MoveKind::TFlip);
    assert_eq!(m.get(0, 2), Some(MoveKind::TFlip));
    assert_eq!(m.row(1), &[None, None, None]);
    assert_eq!(m.get(7, 0), None);
    assert!(m.is_symmetric());
}
