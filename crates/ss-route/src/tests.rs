//! Unit tests for ss-route.
//!
//! All tests use hand-crafted graphs built through the `ss-graph` API.

#[cfg(test)]
mod helpers {
    use ss_core::{GeoPoint, Incident};
    use ss_graph::{StreetGraph, VertexRef};

    /// Insert an undirected road: one edge each way, same label and cost.
    pub fn add_road(g: &mut StreetGraph, a: VertexRef, b: VertexRef, label: &str, cost: f64) {
        g.insert_edge(a, b, label, cost).unwrap();
        g.insert_edge(b, a, label, cost).unwrap();
    }

    /// Unit square, unit costs:
    ///
    /// ```text
    ///   a(0,0) ── ab ── b(0,1)
    ///     │               │
    ///     ad             bc
    ///     │               │
    ///   d(1,0) ── dc ── c(1,1)
    /// ```
    ///
    /// Both a→c routes cost 2.0 until an edge is crime-weighted.
    pub fn square() -> (StreetGraph, [VertexRef; 4]) {
        let mut g = StreetGraph::new();
        let a = g.insert_vertex("0,0", GeoPoint::new(0.0, 0.0));
        let b = g.insert_vertex("1,0", GeoPoint::new(0.0, 1.0));
        let c = g.insert_vertex("1,1", GeoPoint::new(1.0, 1.0));
        let d = g.insert_vertex("0,1", GeoPoint::new(1.0, 0.0));
        add_road(&mut g, a, b, "ab", 1.0);
        add_road(&mut g, b, c, "bc", 1.0);
        add_road(&mut g, d, c, "dc", 1.0);
        add_road(&mut g, a, d, "ad", 1.0);
        (g, [a, b, c, d])
    }

    pub fn incident_at(lat: f64, lon: f64, code: &str) -> Incident {
        Incident {
            code: code.to_owned(),
            location: "test".to_owned(),
            outdoors: true,
            reports: 1,
            position: GeoPoint::new(lat, lon),
        }
    }
}

// ── Dijkstra routing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use ss_core::GeoPoint;
    use ss_graph::{GraphError, StreetGraph};

    use crate::{DijkstraRouter, Router, shortest_path};

    #[test]
    fn trivial_same_vertex() {
        let (g, [a, ..]) = super::helpers::square();
        let route = DijkstraRouter.route(&g, a, a).unwrap().unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.total_cost, 0.0);
    }

    #[test]
    fn shortest_path_picks_cheaper_branch() {
        let mut g = StreetGraph::new();
        let a = g.insert_vertex("0,0", GeoPoint::new(0.0, 0.0));
        let b = g.insert_vertex("1,0", GeoPoint::new(0.0, 1.0));
        let c = g.insert_vertex("2,0", GeoPoint::new(0.0, 2.0));
        let d = g.insert_vertex("1,1", GeoPoint::new(1.0, 1.0));
        // Two a→c routes: via b costs 3, via d costs 10.
        super::helpers::add_road(&mut g, a, b, "ab", 1.0);
        super::helpers::add_road(&mut g, b, c, "bc", 2.0);
        super::helpers::add_road(&mut g, a, d, "ad", 5.0);
        super::helpers::add_road(&mut g, d, c, "dc", 5.0);

        let route = shortest_path(&g, a, c).unwrap().unwrap();
        assert_eq!(route.total_cost, 3.0);
        assert_eq!(route.labels(&g).unwrap(), vec!["ab", "bc"]);

        // Reconstructed edges connect start to destination in order.
        assert_eq!(g.from(route.edges[0]).unwrap(), a);
        assert_eq!(g.to(route.edges[0]).unwrap(), b);
        assert_eq!(g.to(route.edges[1]).unwrap(), c);
    }

    #[test]
    fn total_cost_equals_summed_edge_costs() {
        let (g, [a, _, c, _]) = super::helpers::square();
        let route = shortest_path(&g, a, c).unwrap().unwrap();

        let sum: f64 = route
            .edges
            .iter()
            .map(|&e| g.cost(e).unwrap())
            .sum();
        assert_eq!(route.total_cost, sum);
        assert_eq!(route.total_cost, 2.0);
    }

    #[test]
    fn no_path_is_a_value_not_an_error() {
        let (mut g, [a, ..]) = super::helpers::square();
        let island = g.insert_vertex("9,9", GeoPoint::new(9.0, 9.0));
        assert!(shortest_path(&g, a, island).unwrap().is_none());
    }

    #[test]
    fn one_way_edge_blocks_return() {
        let mut g = StreetGraph::new();
        let a = g.insert_vertex("0,0", GeoPoint::new(0.0, 0.0));
        let b = g.insert_vertex("1,0", GeoPoint::new(0.0, 1.0));
        g.insert_edge(a, b, "oneway", 1.0).unwrap();

        assert!(shortest_path(&g, a, b).unwrap().is_some());
        assert!(shortest_path(&g, b, a).unwrap().is_none());
    }

    #[test]
    fn foreign_handle_faults() {
        let (g, [a, ..]) = super::helpers::square();
        let mut other = StreetGraph::new();
        let foreign = other.insert_vertex("0,0", GeoPoint::new(0.0, 0.0));
        assert_eq!(shortest_path(&g, a, foreign).unwrap_err(), GraphError::Position);
        assert_eq!(shortest_path(&g, foreign, a).unwrap_err(), GraphError::Position);
    }
}

// ── Incident assignment ───────────────────────────────────────────────────────

#[cfg(test)]
mod assignment {
    use ss_core::GeoPoint;
    use ss_graph::{StreetGraph, WeightingPolicy};

    use crate::{assign_incidents, nearest_edge};

    #[test]
    fn nearest_edge_by_midpoint() {
        // Three disjoint horizontal segments with midpoints at latitude
        // 1.0, 5.0 and 10.0 — distances 1, 5, 10 from the incident at the
        // origin.
        let mut g = StreetGraph::new();
        let mut edges = vec![];
        for mid in [1.0, 5.0, 10.0] {
            let u = g.insert_vertex("u", GeoPoint::new(mid, -0.5));
            let v = g.insert_vertex("v", GeoPoint::new(mid, 0.5));
            edges.push(g.insert_edge(u, v, "seg", 1.0).unwrap());
        }
        let incident = super::helpers::incident_at(0.0, 0.0, "3B");

        let hit = nearest_edge(&g, &incident).unwrap().unwrap();
        assert_eq!(hit, edges[0]);

        assign_incidents(&mut g, &[incident], WeightingPolicy::Accumulate).unwrap();
        assert_eq!(g.crime_total(edges[0]).unwrap(), 1);
        assert_eq!(g.crime_total(edges[1]).unwrap(), 0);
        assert_eq!(g.crime_total(edges[2]).unwrap(), 0);
    }

    #[test]
    fn nearest_edge_none_on_empty_graph() {
        let g = StreetGraph::new();
        let incident = super::helpers::incident_at(0.0, 0.0, "3B");
        assert!(nearest_edge(&g, &incident).unwrap().is_none());
    }

    #[test]
    fn untouched_edges_keep_base_cost() {
        let (mut g, _) = super::helpers::square();
        // One incident sitting on the ab midpoint.
        let incidents = [super::helpers::incident_at(0.0, 0.5, "5A")];
        assign_incidents(&mut g, &incidents, WeightingPolicy::Accumulate).unwrap();

        let weighted: Vec<_> = g
            .edges()
            .filter(|&e| g.crime_total(e).unwrap() > 0)
            .collect();
        assert_eq!(weighted.len(), 1);
        for e in g.edges() {
            if g.crime_total(e).unwrap() == 0 {
                assert_eq!(g.cost(e).unwrap(), g.base_cost(e).unwrap());
            }
        }
    }

    #[test]
    fn accumulate_policy_compounds_across_passes() {
        let (mut g, [a, ..]) = super::helpers::square();
        let ab = g.outgoing(a).unwrap()[0];
        let incidents = [super::helpers::incident_at(0.0, 0.5, "1A")];

        // First pass: freq 1 → penalty (21)² + 7·(20)².
        assign_incidents(&mut g, &incidents, WeightingPolicy::Accumulate).unwrap();
        let first = 441.0 + 7.0 * 400.0;
        assert_eq!(g.cost(ab).unwrap(), 1.0 + first);

        // Second pass re-counts the same incident: freq 2 → (22)² + 7·(20)²,
        // added on top.  Roughly double, by design of the observed behavior.
        assign_incidents(&mut g, &incidents, WeightingPolicy::Accumulate).unwrap();
        let second = 484.0 + 7.0 * 400.0;
        assert_eq!(g.cost(ab).unwrap(), 1.0 + first + second);
    }

    #[test]
    fn recompute_policy_is_idempotent_per_counter_state() {
        let (mut g, [a, ..]) = super::helpers::square();
        let ab = g.outgoing(a).unwrap()[0];
        let incidents = [super::helpers::incident_at(0.0, 0.5, "1A")];

        assign_incidents(&mut g, &incidents, WeightingPolicy::Recompute).unwrap();
        assert_eq!(g.cost(ab).unwrap(), 1.0 + 441.0 + 7.0 * 400.0);

        // Counters still advance, but the cost derives from base + counters.
        assign_incidents(&mut g, &incidents, WeightingPolicy::Recompute).unwrap();
        assert_eq!(g.crime_total(ab).unwrap(), 2);
        assert_eq!(g.cost(ab).unwrap(), 1.0 + 484.0 + 7.0 * 400.0);
    }

    #[test]
    fn crime_reroutes_around_hot_edge() {
        let (mut g, [a, _, c, _]) = super::helpers::square();

        // No incidents: both a→c routes cost 2.
        let before = crate::shortest_path(&g, a, c).unwrap().unwrap();
        assert_eq!(before.total_cost, 2.0);

        // Five same-category reports on the ab midpoint.  Of the two directed
        // ab edges (identical midpoints) the earlier-inserted a→b absorbs
        // them all, so the b branch becomes expensive.
        let incidents = vec![super::helpers::incident_at(0.0, 0.5, "4E"); 5];
        assign_incidents(&mut g, &incidents, WeightingPolicy::Accumulate).unwrap();

        let after = crate::shortest_path(&g, a, c).unwrap().unwrap();
        assert_eq!(after.labels(&g).unwrap(), vec!["ad", "dc"]);
        assert_eq!(after.total_cost, 2.0);
    }
}
