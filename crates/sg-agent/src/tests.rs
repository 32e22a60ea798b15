//! Unit tests for sg-agent.

#[cfg(test)]
mod helpers {
    use sg_core::{Coord, GridDims, SamePref};
    use sg_grid::Grid;

    use crate::{AgentStore, AgentStoreBuilder};

    /// Build a store whose first `a_cells.len()` agents are kind A, the rest
    /// kind B, and place them at the given cells.
    pub fn world(
        dims:    GridDims,
        a_cells: &[Coord],
        b_cells: &[Coord],
        pref:    SamePref,
    ) -> (AgentStore, Grid) {
        let mut store = AgentStoreBuilder::new(a_cells.len() + b_cells.len())
            .kind_a_count(a_cells.len())
            .same_pref(pref)
            .build();
        let mut grid = Grid::new(dims);
        for (i, &c) in a_cells.iter().chain(b_cells).enumerate() {
            grid.place(c, sg_core::AgentId(i as u32)).unwrap();
            store.location[i] = c;
        }
        (store, grid)
    }

    pub fn pref(a: f64, b: f64) -> SamePref {
        SamePref { a, b }
    }
}

#[cfg(test)]
mod builder {
    use sg_core::{Kind, SamePref, SimConfig};

    use crate::AgentStoreBuilder;

    #[test]
    fn first_agents_are_kind_a() {
        let store = AgentStoreBuilder::new(5).kind_a_count(2).build();
        assert_eq!(store.kind, vec![Kind::A, Kind::A, Kind::B, Kind::B, Kind::B]);
        assert!(!store.all_placed());
    }

    #[test]
    fn thresholds_follow_kind() {
        let store = AgentStoreBuilder::new(3)
            .kind_a_count(1)
            .same_pref(SamePref { a: 0.25, b: 0.75 })
            .build();
        assert_eq!(store.same_pref, vec![0.25, 0.75, 0.75]);
    }

    #[test]
    fn kind_a_count_clamped() {
        let store = AgentStoreBuilder::new(2).kind_a_count(10).build();
        assert_eq!(store.count_of(Kind::A), 2);
        assert_eq!(store.count_of(Kind::B), 0);
    }

    #[test]
    fn from_config_uses_split() {
        let cfg = SimConfig { num_agents: 10, agent_prop: 0.3, ..SimConfig::default() };
        let store = AgentStoreBuilder::from_config(&cfg).build();
        assert_eq!(store.count, 10);
        assert_eq!(store.count_of(Kind::A), 3);
        assert_eq!(store.same_pref[0], cfg.same_pref.a);
        assert_eq!(store.same_pref[9], cfg.same_pref.b);
    }
}

#[cfg(test)]
mod happiness {
    use sg_core::{AgentId, Coord, GridDims};

    use super::helpers::{pref, world};
    use crate::{MovePolicy, NeighborTally};

    #[test]
    fn no_neighbors_is_unhappy() {
        let (store, grid) = world(GridDims::new(5, 5), &[Coord::new(2, 2)], &[], pref(0.0, 0.0));
        assert!(!MovePolicy::default().is_happy(&store, &grid, AgentId(0)).unwrap());
    }

    #[test]
    fn equality_passes() {
        let (store, grid) = world(
            GridDims::new(5, 5),
            &[Coord::new(2, 2), Coord::new(3, 3)],
            &[Coord::new(2, 3)],
            pref(0.5, 0.5),
        );
        let policy = MovePolicy::default();
        assert_eq!(
            policy.tally(&store, &grid, AgentId(0), Coord::new(2, 2)),
            NeighborTally { like: 1, unlike: 1 }
        );
        assert!(policy.is_happy(&store, &grid, AgentId(0)).unwrap());
    }

    #[test]
    fn von_neumann_ignores_diagonals() {
        let (store, grid) = world(
            GridDims::new(5, 5),
            &[Coord::new(2, 2)],
            &[Coord::new(3, 3)],
            pref(0.0, 0.0),
        );
        let policy = MovePolicy { neighborhood: sg_core::Neighborhood::VonNeumann, forced: false };
        assert_eq!(policy.tally(&store, &grid, AgentId(0), Coord::new(2, 2)).occupied(), 0);
        assert!(!policy.is_happy(&store, &grid, AgentId(0)).unwrap());
    }

    #[test]
    fn unlike_neighbors_counts_other_kind() {
        let (store, grid) = world(
            GridDims::new(5, 5),
            &[Coord::new(2, 2), Coord::new(1, 1)],
            &[Coord::new(2, 3), Coord::new(3, 2)],
            pref(0.5, 0.5),
        );
        let policy = MovePolicy::default();
        assert_eq!(policy.unlike_neighbors(&store, &grid, AgentId(0)).unwrap(), 2);
        assert_eq!(policy.unlike_neighbors(&store, &grid, AgentId(1)).unwrap(), 0);
    }

    #[test]
    fn unplaced_agent_is_an_error() {
        let (mut store, grid) = world(GridDims::new(3, 3), &[Coord::new(0, 0)], &[], pref(0.0, 0.0));
        store.location[0] = Coord::INVALID;
        assert!(MovePolicy::default().is_happy(&store, &grid, AgentId(0)).is_err());
    }
}

#[cfg(test)]
mod threshold_props {
    use proptest::prelude::*;
    use sg_core::{Coord, GridDims};

    use super::helpers::{pref, world};
    use crate::MovePolicy;

    /// Random occupied subset of a 5x5 torus, each occupant tagged A (`true`)
    /// or B.
    fn layout() -> impl Strategy<Value = (Vec<Coord>, Vec<Coord>)> {
        let cells: Vec<Coord> = GridDims::new(5, 5).coords().collect();
        (
            proptest::sample::subsequence(cells, 1..=24),
            proptest::collection::vec(any::<bool>(), 24),
        )
            .prop_map(|(occupied, tags)| {
                let (a, b): (Vec<_>, Vec<_>) = occupied.into_iter().zip(tags).partition(|&(_, t)| t);
                (a.into_iter().map(|(c, _)| c).collect(), b.into_iter().map(|(c, _)| c).collect())
            })
    }

    proptest! {
        #[test]
        fn zero_threshold_happy_iff_any_neighbor((a, b) in layout(), von_neumann in any::<bool>()) {
            let (store, grid) = world(GridDims::new(5, 5), &a, &b, pref(0.0, 0.0));
            let policy = MovePolicy {
                neighborhood: if von_neumann { sg_core::Neighborhood::VonNeumann } else { sg_core::Neighborhood::Moore },
                forced:       false,
            };
            for id in store.agent_ids() {
                let tally = policy.tally(&store, &grid, id, store.location_of(id));
                prop_assert_eq!(policy.is_happy(&store, &grid, id).unwrap(), tally.occupied() > 0);
            }
        }

        #[test]
        fn full_threshold_needs_all_alike((a, b) in layout()) {
            let (store, grid) = world(GridDims::new(5, 5), &a, &b, pref(1.0, 1.0));
            let policy = MovePolicy::default();
            for id in store.agent_ids() {
                let tally = policy.tally(&store, &grid, id, store.location_of(id));
                let happy = policy.is_happy(&store, &grid, id).unwrap();
                if tally.unlike > 0 {
                    prop_assert!(!happy, "agent {} happy with {} unlike", id, tally.unlike);
                } else {
                    prop_assert_eq!(happy, tally.like > 0);
                }
            }
        }
    }
}

#[cfg(test)]
mod moves {
    use sg_core::{AgentId, Coord, GridDims, SimRng};

    use super::helpers::{pref, world};
    use crate::{AgentError, MoveOutcome, MovePolicy, relocate};

    /// 3×3 Moore torus: every cell neighbors every other cell.  One A among
    /// seven B, so the lone vacancy can never satisfy the A.
    fn lone_minority() -> (crate::AgentStore, sg_grid::Grid) {
        let dims = GridDims::new(3, 3);
        let cells: Vec<Coord> = dims.coords().collect();
        world(dims, &cells[0..1], &cells[1..8], pref(0.5, 0.5))
    }

    #[test]
    fn happy_agent_stays() {
        let (mut store, mut grid) = world(
            GridDims::new(5, 5),
            &[Coord::new(2, 2), Coord::new(2, 3)],
            &[],
            pref(0.5, 0.5),
        );
        let out = MovePolicy::default()
            .attempt_move(&mut store, &mut grid, AgentId(0), &mut SimRng::new(1))
            .unwrap();
        assert_eq!(out, MoveOutcome::Happy);
        assert_eq!(store.location[0], Coord::new(2, 2));
    }

    #[test]
    fn first_fit_takes_first_satisfying_vacancy() {
        let (mut store, mut grid) = world(
            GridDims::new(5, 5),
            &[Coord::new(2, 2), Coord::new(4, 4)],
            &[Coord::new(2, 3), Coord::new(1, 1)],
            pref(0.6, 0.6),
        );
        let out = MovePolicy::default()
            .attempt_move(&mut store, &mut grid, AgentId(0), &mut SimRng::new(1))
            .unwrap();
        assert_eq!(out, MoveOutcome::Moved);
        assert_eq!(store.location[0], Coord::new(0, 3));
        assert_eq!(grid.occupant(Coord::new(0, 3)), Some(AgentId(0)));
        assert_eq!(grid.occupant(Coord::new(2, 2)), None);
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn stuck_when_no_vacancy_fits() {
        let (mut store, mut grid) = lone_minority();
        let out = MovePolicy::default()
            .attempt_move(&mut store, &mut grid, AgentId(0), &mut SimRng::new(1))
            .unwrap();
        assert_eq!(out, MoveOutcome::Stuck);
        assert_eq!(store.location[0], Coord::new(0, 0));
        assert_eq!(grid.vacancies(), vec![Coord::new(2, 2)]);
    }

    #[test]
    fn forced_move_relocates_regardless() {
        let (mut store, mut grid) = lone_minority();
        let policy = MovePolicy { forced: true, ..MovePolicy::default() };
        let out = policy
            .attempt_move(&mut store, &mut grid, AgentId(0), &mut SimRng::new(1))
            .unwrap();
        assert_eq!(out, MoveOutcome::Moved);
        assert_eq!(store.location[0], Coord::new(2, 2));
        assert_eq!(grid.vacancies(), vec![Coord::new(0, 0)]);
    }

    #[test]
    fn forced_move_reports_happiness_at_destination() {
        // 4x4 torus: B at (0,0) has no neighbors and is unhappy even with a
        // zero threshold.  After a forced move it is happy exactly when the
        // destination touches the A at (2,2), i.e. shares no row or column
        // with the vacated cell.
        let mut seen_happy = false;
        for seed in 0..20 {
            let (mut store, mut grid) = world(
                GridDims::new(4, 4),
                &[Coord::new(2, 2)],
                &[Coord::new(0, 0)],
                pref(1.0, 0.0),
            );
            let policy = MovePolicy { forced: true, ..MovePolicy::default() };
            let out = policy
                .attempt_move(&mut store, &mut grid, AgentId(1), &mut SimRng::new(seed))
                .unwrap();
            let dest = store.location[1];
            assert_ne!(dest, Coord::new(0, 0));
            assert_eq!(grid.occupied_count(), 2);
            let touches_a = dest.x != 0 && dest.y != 0;
            let expected = if touches_a { MoveOutcome::Happy } else { MoveOutcome::Moved };
            assert_eq!(out, expected, "seed {seed}, dest {dest}");
            seen_happy |= touches_a;
        }
        assert!(seen_happy);
    }

    #[test]
    fn forced_move_without_vacancy_is_error() {
        let (mut store, mut grid) = world(
            GridDims::new(1, 2),
            &[Coord::new(0, 0)],
            &[Coord::new(0, 1)],
            pref(0.5, 0.5),
        );
        let policy = MovePolicy { forced: true, ..MovePolicy::default() };
        let err = policy
            .attempt_move(&mut store, &mut grid, AgentId(0), &mut SimRng::new(1))
            .unwrap_err();
        assert!(matches!(err, AgentError::NoVacancy(AgentId(0))));

        let out = MovePolicy::default()
            .attempt_move(&mut store, &mut grid, AgentId(0), &mut SimRng::new(1))
            .unwrap();
        assert_eq!(out, MoveOutcome::Stuck);
    }

    #[test]
    fn outcome_codes() {
        assert_eq!(MoveOutcome::Happy.code(), 0);
        assert_eq!(MoveOutcome::Moved.code(), 1);
        assert_eq!(MoveOutcome::Stuck.code(), 2);
    }

    #[test]
    fn relocate_into_occupied_leaves_state_unchanged() {
        let (mut store, mut grid) = lone_minority();
        let err = relocate(&mut store, &mut grid, AgentId(0), Coord::new(0, 1)).unwrap_err();
        assert!(matches!(err, AgentError::Grid(_)));
        assert_eq!(store.location[0], Coord::new(0, 0));
        assert_eq!(grid.occupant(Coord::new(0, 0)), Some(AgentId(0)));
        assert_eq!(grid.occupied_count(), 8);
    }

    #[test]
    fn relocate_with_stale_location_fails() {
        let (mut store, mut grid) = lone_minority();
        store.location[0] = Coord::new(0, 1);
        let err = relocate(&mut store, &mut grid, AgentId(0), Coord::new(2, 2)).unwrap_err();
        assert!(matches!(err, AgentError::Grid(sg_grid::GridError::SourceMismatch { .. })));
        assert!(grid.is_vacant(Coord::new(2, 2)));
    }

    #[test]
    fn earlier_move_takes_contested_vacancy() {
        // 5x5 Moore torus, A threshold 0.5.  A(0) at (2,4) and A(1) at (0,0)
        // are both unhappy; of the vacancies (1,0) and (3,4) only (1,0)
        // satisfies either of them.
        let dims = GridDims::new(5, 5);
        let a_cells = [Coord::new(2, 4), Coord::new(0, 0), Coord::new(1, 1), Coord::new(1, 4)];
        let vacant = [Coord::new(1, 0), Coord::new(3, 4)];
        let b_cells: Vec<Coord> = dims
            .coords()
            .filter(|c| !a_cells.contains(c) && !vacant.contains(c))
            .collect();
        let policy = MovePolicy::default();

        // On its own, A(1) would take (1,0).
        let (mut store, mut grid) = world(dims, &a_cells, &b_cells, pref(0.5, 0.5));
        let out = policy
            .attempt_move(&mut store, &mut grid, AgentId(1), &mut SimRng::new(1))
            .unwrap();
        assert_eq!(out, MoveOutcome::Moved);
        assert_eq!(store.location[1], Coord::new(1, 0));

        // A(0) moves first and A(1) sees the updated grid.
        let (mut store, mut grid) = world(dims, &a_cells, &b_cells, pref(0.5, 0.5));
        let mut rng = SimRng::new(1);
        assert!(!policy.is_happy(&store, &grid, AgentId(0)).unwrap());
        assert!(!policy.is_happy(&store, &grid, AgentId(1)).unwrap());
        let first = policy.attempt_move(&mut store, &mut grid, AgentId(0), &mut rng).unwrap();
        let second = policy.attempt_move(&mut store, &mut grid, AgentId(1), &mut rng).unwrap();
        assert_eq!(first, MoveOutcome::Moved);
        assert_eq!(store.location[0], Coord::new(1, 0));
        assert_eq!(second, MoveOutcome::Stuck);
        assert_eq!(store.location[1], Coord::new(0, 0));
        assert_eq!(grid.vacancies(), vec![Coord::new(2, 4), Coord::new(3, 4)]);
        assert_eq!(grid.occupied_count(), 23);
    }
}
