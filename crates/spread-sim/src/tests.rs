//! Integration tests for spread-sim.
//!
//! All tests use small hand-checkable graphs (cycles, paths, tiny
//! grids) so expected adoption dynamics can be worked out on paper.

use spread_core::{ParamError, SimParams};
use spread_graph::generate::{cycle, grid};
use spread_graph::{GraphBuilder, GridLayout, LayoutProvider};

use crate::{NodeColor, NoopObserver, SimError, Simulation};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn base_params() -> SimParams {
    SimParams {
        w1: 1.0,
        w2: 1.0,
        w3: 1.0,
        subsidy: 10.0,
        transition_lb: 10.0,
        transition_ub: 20.0,
        bootstrap: 0.15,
        timesteps: 20,
        seed: 42,
    }
}

/// Uniform positions along a line — good enough when coordinates are
/// not under test.
fn line_positions(n: usize) -> Vec<spread_core::Point2> {
    (0..n).map(|i| spread_core::Point2::new(i as f32, 0.0)).collect()
}

/// Path graph 0 - 1 - 2.
fn path3() -> spread_graph::Graph {
    let mut b = GraphBuilder::new();
    let n0 = b.add_node();
    let n1 = b.add_node();
    let n2 = b.add_node();
    b.add_edge(n0, n1);
    b.add_edge(n1, n2);
    b.build()
}

// ── Construction & validation ─────────────────────────────────────────────────

mod construction {
    use super::*;

    #[test]
    fn invalid_params_rejected_before_any_work() {
        let g = cycle(4).unwrap();
        let p = SimParams { bootstrap: 1.5, ..base_params() };
        assert_eq!(
            Simulation::new(&g, p).err(),
            Some(SimError::Params(ParamError::BootstrapOutOfRange(1.5)))
        );
    }

    #[test]
    fn inverted_cost_bounds_rejected() {
        let g = cycle(4).unwrap();
        let p = SimParams { transition_lb: 5.0, transition_ub: 1.0, ..base_params() };
        assert!(matches!(
            Simulation::new(&g, p),
            Err(SimError::Params(ParamError::InvertedCostBounds { .. }))
        ));
    }

    #[test]
    fn empty_graph_rejected() {
        let g = GraphBuilder::new().build();
        assert_eq!(Simulation::new(&g, base_params()).err(), Some(SimError::EmptyGraph));
    }

    #[test]
    fn layout_length_mismatch_rejected() {
        let g = cycle(4).unwrap();
        let sim = Simulation::new(&g, base_params()).unwrap();
        let result = sim.run(&line_positions(3), &mut NoopObserver);
        assert_eq!(
            result.err(),
            Some(SimError::LayoutMismatch { expected: 4, got: 3 })
        );
    }

    #[test]
    fn costs_sampled_within_bounds() {
        let g = grid(4, 4);
        let sim = Simulation::new(&g, base_params()).unwrap();
        for &c in &sim.states.transition_cost {
            assert!((10.0..=20.0).contains(&c));
        }
    }
}

// ── Series shape & bounds ─────────────────────────────────────────────────────

mod series {
    use super::*;

    #[test]
    fn exactly_timesteps_points_increasing_from_zero() {
        let g = grid(6, 6);
        let trace = Simulation::new(&g, base_params())
            .unwrap()
            .run(&GridLayout::new(6, 6).positions(&g), &mut NoopObserver)
            .unwrap();

        assert_eq!(trace.percentages.len(), 20);
        for (i, p) in trace.percentages.iter().enumerate() {
            assert_eq!(p.timestep, i as u32);
        }
    }

    #[test]
    fn percentages_within_unit_interval() {
        let g = grid(6, 6);
        let trace = Simulation::new(&g, base_params())
            .unwrap()
            .run(&GridLayout::new(6, 6).positions(&g), &mut NoopObserver)
            .unwrap();

        for p in &trace.percentages {
            assert!((0.0..=1.0).contains(&p.percentage), "t={}: {}", p.timestep, p.percentage);
        }
    }

    #[test]
    fn frame_count_is_timesteps_times_nodes() {
        let g = grid(5, 4);
        let trace = Simulation::new(&g, base_params())
            .unwrap()
            .run(&GridLayout::new(5, 4).positions(&g), &mut NoopObserver)
            .unwrap();

        assert_eq!(trace.node_frames.len(), 20 * 20);
        for t in 0..20 {
            let frames = trace.frames_at(t);
            assert_eq!(frames.len(), 20);
            assert!(frames.iter().all(|f| f.timestep == t));
        }
    }

    #[test]
    fn single_timestep_run_is_bootstrap_only() {
        let g = cycle(4).unwrap();
        let p = SimParams { timesteps: 1, ..base_params() };
        let trace = Simulation::new(&g, p)
            .unwrap()
            .run(&line_positions(4), &mut NoopObserver)
            .unwrap();

        // No update rule ever ran: one percentage point, one frame set.
        assert_eq!(trace.percentages.len(), 1);
        assert_eq!(trace.percentages[0].timestep, 0);
        assert_eq!(trace.percentages[0].percentage, 0.15);
        assert_eq!(trace.node_frames.len(), 4);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

mod determinism {
    use super::*;

    #[test]
    fn identical_inputs_identical_traces() {
        let g = grid(8, 8);
        let pos = GridLayout::new(8, 8).positions(&g);

        let a = Simulation::new(&g, base_params())
            .unwrap()
            .run(&pos, &mut NoopObserver)
            .unwrap();
        let b = Simulation::new(&g, base_params())
            .unwrap()
            .run(&pos, &mut NoopObserver)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let g = grid(8, 8);
        let pos = GridLayout::new(8, 8).positions(&g);

        let a = Simulation::new(&g, base_params())
            .unwrap()
            .run(&pos, &mut NoopObserver)
            .unwrap();
        let b = Simulation::new(&g, SimParams { seed: 7, ..base_params() })
            .unwrap()
            .run(&pos, &mut NoopObserver)
            .unwrap();

        // Same shape, different bootstrap cohort and costs.
        assert_eq!(a.percentages.len(), b.percentages.len());
        assert_ne!(a.node_frames, b.node_frames);
    }
}

// ── Bootstrap invariants ──────────────────────────────────────────────────────

mod bootstrap {
    use super::*;

    #[test]
    fn seeded_count_is_floored() {
        // floor(0.5 * 5) = 2 adopters on a 5-cycle.
        let g = cycle(5).unwrap();
        let p = SimParams { bootstrap: 0.5, ..base_params() };
        let sim = Simulation::new(&g, p).unwrap();
        assert_eq!(sim.states.adopted_count(), 2);
    }

    #[test]
    fn recorded_percentage_is_configured_not_recomputed() {
        // Known inconsistency, preserved deliberately: the floored
        // count gives 2/5 = 0.4, but timestep 0 records 0.5.
        let g = cycle(5).unwrap();
        let p = SimParams { bootstrap: 0.5, timesteps: 1, ..base_params() };
        let trace = Simulation::new(&g, p)
            .unwrap()
            .run(&line_positions(5), &mut NoopObserver)
            .unwrap();

        let adopted = trace
            .frames_at(0)
            .iter()
            .filter(|f| f.color == NodeColor::Adopted)
            .count();
        assert_eq!(adopted, 2);
        assert_eq!(trace.percentages[0].percentage, 0.5);
    }

    #[test]
    fn zero_bootstrap_seeds_nobody() {
        let g = cycle(6).unwrap();
        let p = SimParams { bootstrap: 0.0, ..base_params() };
        let sim = Simulation::new(&g, p).unwrap();
        assert_eq!(sim.states.adopted_count(), 0);
    }

    #[test]
    fn full_bootstrap_seeds_everybody() {
        let g = cycle(6).unwrap();
        let p = SimParams { bootstrap: 1.0, ..base_params() };
        let sim = Simulation::new(&g, p).unwrap();
        assert_eq!(sim.states.adopted_count(), 6);
    }
}

// ── Update rule semantics ─────────────────────────────────────────────────────

mod update_rule {
    use super::*;

    #[test]
    fn four_node_cycle_saturates_by_step_one() {
        // All weights 1, no subsidy, all costs exactly 0, half seeded:
        // any positive network term makes U > 0, so everyone adopts at
        // t=1 and stays.  Expected series: [0.5, 1.0, 1.0].
        let g = cycle(4).unwrap();
        let p = SimParams {
            w1: 1.0,
            w2: 1.0,
            w3: 1.0,
            subsidy: 0.0,
            transition_lb: 0.0,
            transition_ub: 0.0,
            bootstrap: 0.5,
            timesteps: 3,
            seed: 42,
        };
        let trace = Simulation::new(&g, p)
            .unwrap()
            .run(&line_positions(4), &mut NoopObserver)
            .unwrap();

        let series: Vec<f64> = trace.percentages.iter().map(|p| p.percentage).collect();
        assert_eq!(series, vec![0.5, 1.0, 1.0]);
        assert!(trace
            .frames_at(1)
            .iter()
            .all(|f| f.color == NodeColor::Adopted));
    }

    #[test]
    fn zero_utility_reverts_even_bootstrap_adopters() {
        // All weights 0 ⇒ U = 0 for everyone, never strictly above the
        // zero costs — the decision rule is recomputed fresh each step,
        // so the bootstrap cohort flips off at t=1.
        let g = cycle(4).unwrap();
        let p = SimParams {
            w1: 0.0,
            w2: 0.0,
            w3: 0.0,
            subsidy: 10.0,
            transition_lb: 0.0,
            transition_ub: 0.0,
            bootstrap: 0.5,
            timesteps: 3,
            seed: 42,
        };
        let trace = Simulation::new(&g, p)
            .unwrap()
            .run(&line_positions(4), &mut NoopObserver)
            .unwrap();

        let series: Vec<f64> = trace.percentages.iter().map(|p| p.percentage).collect();
        assert_eq!(series, vec![0.5, 0.0, 0.0]);
    }

    #[test]
    fn update_is_synchronous_no_within_step_leak() {
        // Path 0-1-2, only the known-people term active.  With node 0
        // adopted at the start of the step:
        //   node 1 sees 1 adopted neighbor  → U = ln 2 ≈ 0.693 > 0.5 → joins
        //   node 2 sees 0 adopted neighbors → U = 0     < 0.5       → stays off
        // A leaky (sequential) update would let node 2 see node 1's
        // fresh adoption and join in the same step.
        let g = path3();
        let p = SimParams {
            w1: 0.0,
            w2: 1.0,
            w3: 0.0,
            subsidy: 0.0,
            transition_lb: 0.5,
            transition_ub: 0.5,
            bootstrap: 0.0,
            timesteps: 5,
            seed: 42,
        };
        let mut sim = Simulation::new(&g, p).unwrap();
        sim.states.on_platform[0] = true;
        sim.states.transition_cost[0] = 0.0;

        sim.step();

        assert_eq!(sim.states.on_platform, vec![false, true, false]);
        // Node 0's own neighbor was off-platform in the snapshot, so its
        // U was 0 — not above its zero cost — and it reverted.
        assert_eq!(sim.states.known_people, vec![0, 1, 0]);
    }

    #[test]
    fn adoption_resets_transition_cost_to_zero() {
        let g = cycle(4).unwrap();
        let p = SimParams {
            subsidy: 100.0, // guarantees U > ub for everyone
            ..base_params()
        };
        let mut sim = Simulation::new(&g, p).unwrap();
        sim.step();
        assert!(sim.states.on_platform.iter().all(|&on| on));
        assert!(sim.states.transition_cost.iter().all(|&c| c == 0.0));
    }
}

// ── Utility function ──────────────────────────────────────────────────────────

mod utility {
    use super::*;
    use crate::utility::{local_effect, network_effect, utility};

    #[test]
    fn log_terms_at_zero() {
        assert_eq!(network_effect(0), 0.0);
        assert_eq!(local_effect(0), 0.0);
    }

    #[test]
    fn matches_weighted_sum() {
        let p = base_params();
        let u = utility(&p, 10, 3);
        let expected = 11.0_f64.ln() + 4.0_f64.ln() + 10.0;
        assert!((u - expected).abs() < 1e-12);
    }

    #[test]
    fn increasing_subsidy_never_decreases_utility() {
        let lo = SimParams { subsidy: 5.0, ..base_params() };
        let hi = SimParams { subsidy: 6.0, ..base_params() };
        for network_size in [0, 1, 10, 1000] {
            for known in [0, 1, 7] {
                assert!(utility(&hi, network_size, known) >= utility(&lo, network_size, known));
            }
        }
    }
}

// ── Trace statics ─────────────────────────────────────────────────────────────

mod trace_statics {
    use super::*;

    #[test]
    fn edge_records_match_layout_once() {
        let g = grid(3, 3);
        let pos = GridLayout::new(3, 3).positions(&g);
        let trace = Simulation::new(&g, base_params())
            .unwrap()
            .run(&pos, &mut NoopObserver)
            .unwrap();

        // One record per unique undirected edge, endpoints straight
        // from the layout.
        assert_eq!(trace.edges.len(), g.edge_count());
        for (line, &(a, b)) in trace.edges.iter().zip(g.edges()) {
            assert_eq!((line.x1, line.y1), (pos[a.index()].x, pos[a.index()].y));
            assert_eq!((line.x2, line.y2), (pos[b.index()].x, pos[b.index()].y));
        }
    }

    #[test]
    fn frame_positions_constant_across_timesteps() {
        let g = cycle(5).unwrap();
        let pos = line_positions(5);
        let trace = Simulation::new(&g, base_params())
            .unwrap()
            .run(&pos, &mut NoopObserver)
            .unwrap();

        let first = trace.frames_at(0);
        for t in 1..trace.timesteps() {
            for (f, f0) in trace.frames_at(t).iter().zip(first) {
                assert_eq!((f.x, f.y), (f0.x, f0.y));
            }
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

mod observer {
    use super::*;
    use crate::{SimObserver, Trace};

    #[derive(Default)]
    struct Recorder {
        steps: Vec<(u32, usize)>,
        finished: bool,
    }

    impl SimObserver for Recorder {
        fn on_step_end(&mut self, timestep: u32, adopted: usize) {
            self.steps.push((timestep, adopted));
        }
        fn on_run_end(&mut self, _trace: &Trace) {
            self.finished = true;
        }
    }

    #[test]
    fn observer_sees_every_timestep() {
        let g = cycle(4).unwrap();
        let p = SimParams { timesteps: 5, ..base_params() };
        let mut rec = Recorder::default();
        Simulation::new(&g, p)
            .unwrap()
            .run(&line_positions(4), &mut rec)
            .unwrap();

        assert!(rec.finished);
        assert_eq!(rec.steps.len(), 5);
        assert_eq!(rec.steps[0].0, 0);
        assert_eq!(rec.steps.last().unwrap().0, 4);
    }
}
