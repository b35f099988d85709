use super::*;
use crate::graph::def::GraphBuilder;
use crate::graph::preset::tower_map;

fn abcd(connect_d: bool) -> Graph {
    let mut b = GraphBuilder::new()
        .node("A", 0.0, 0.0)
        .node("B", 80.0, 0.0)
        .node("C", 80.0, 60.0)
        .node("D", 120.0, 60.0)
        .edge("A", "B", 10.0)
        .edge("B", "C", 5.0)
        .edge("A", "C", 20.0);
    if connect_d {
        b = b.edge("C", "D", 1.0);
    }
    b.build().unwrap()
}

#[test]
fn a_to_d_takes_the_cheap_detour() {
    let g = abcd(true);
    let out = plan_route(&g, &RunRequest::new("A", "D", Multiplier::ONE)).unwrap();
    let route = out.route().expect("reachable");
    assert_eq!(route.path.display(&g), "A → B → C → D");
    assert_eq!(route.total_cost, 16.0);
    assert_eq!(route.path.cost(&g, Multiplier::ONE), Some(16.0));

    let map = out.distance_map(&g);
    assert_eq!(map["A"], 0.0);
    assert_eq!(map["B"], 10.0);
    assert_eq!(map["C"], 15.0);
    assert_eq!(map["D"], 16.0);
}

#[test]
fn reached_trace_ends_with_final_event() {
    let g = abcd(true);
    let out = plan_route(&g, &RunRequest::new("A", "D", Multiplier::ONE)).unwrap();
    let trace = out.trace();
    assert_eq!(trace.len(), 9);
    let Some(TraceEvent::Final { path, snapshot }) = trace.final_event() else {
        panic!("missing final event");
    };
    assert_eq!(path, &out.path());
    assert_eq!(snapshot.distances(), out.distances());
    assert_eq!(snapshot.visited_count(), 4);
}

#[test]
fn disconnected_target_is_unreachable_not_error() {
    let g = abcd(false);
    let out = plan_route(&g, &RunRequest::new("A", "D", Multiplier::ONE)).unwrap();
    assert!(!out.is_reachable());
    assert!(out.path().is_empty());
    assert_eq!(out.total_cost(), None);
    assert!(out.distance_map(&g)["D"].is_infinite());
    assert!(out.trace().final_event().is_none());
    assert!(!out.trace().is_empty());
}

#[test]
fn doubled_multiplier_doubles_cost_keeps_path() {
    let g = abcd(true);
    let one = plan_route(&g, &RunRequest::new("A", "D", Multiplier::ONE)).unwrap();
    let two = plan_route(&g, &RunRequest::new("A", "D", Multiplier::new(2.0).unwrap())).unwrap();
    assert_eq!(one.path(), two.path());
    assert_eq!(two.total_cost(), Some(32.0));
    let kinds = |o: &RouteOutcome| o.trace().iter().map(TraceEvent::kind).collect::<Vec<_>>();
    assert_eq!(kinds(&one), kinds(&two));
}

#[test]
fn same_endpoints_rejected_before_search() {
    let g = abcd(true);
    let err = plan_route(&g, &RunRequest::new("B", "B", Multiplier::ONE)).unwrap_err();
    assert!(matches!(err, RouteError::InvalidSelection(_)));
}

#[test]
fn unknown_endpoint_rejected() {
    let g = abcd(true);
    let err = plan_route(&g, &RunRequest::new("A", "Q", Multiplier::ONE)).unwrap_err();
    assert!(matches!(err, RouteError::InvalidSelection(ref m) if m.contains("'Q'")));
}

#[test]
fn every_tower_route_is_a_valid_path() {
    let g = tower_map().unwrap();
    for mode in TravelMode::ALL {
        for s in g.nodes() {
            for t in g.nodes() {
                if s.id == t.id {
                    continue;
                }
                let out = plan_route(&g, &RunRequest::with_mode(&s.id, &t.id, mode)).unwrap();
                let route = out.route().expect("tower map is connected");
                assert_eq!(g.label(route.path.source().unwrap()), s.id);
                assert_eq!(g.label(route.path.target().unwrap()), t.id);
                let cost = route.path.cost(&g, mode.multiplier()).unwrap();
                assert!((cost - route.total_cost).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn trace_serializes_with_kind_tags() {
    let g = abcd(true);
    let out = plan_route(&g, &RunRequest::new("A", "D", Multiplier::ONE)).unwrap();
    let json = serde_json::to_value(out.trace().as_ref()).unwrap();
    let events = json.as_array().unwrap();
    assert_eq!(events[0]["kind"], "explored");
    assert_eq!(events[1]["kind"], "relaxed");
    assert_eq!(events.last().unwrap()["kind"], "final");
    assert_eq!(events.last().unwrap()["path"], serde_json::json!([0, 1, 2, 3]));
}

fn single_edge(weight: f64) -> Graph {
    GraphBuilder::new()
        .node("A", 0.0, 0.0)
        .node("B", 10.0, 0.0)
        .edge("A", "B", weight)
        .build()
        .unwrap()
}

#[test]
fn overflowing_effective_weight_is_invalid_mode() {
    let g = single_edge(1e300);
    let req = RunRequest::new("A", "B", Multiplier::new(1e10).unwrap());
    let err = plan_route(&g, &req).unwrap_err();
    assert!(matches!(err, RouteError::InvalidMode(ref m) if m.contains("A-B")), "{err}");
}

#[test]
fn underflowing_effective_weight_is_invalid_mode() {
    let g = single_edge(1e-200);
    let req = RunRequest::new("A", "B", Multiplier::new(1e-200).unwrap());
    let err = plan_route(&g, &req).unwrap_err();
    assert!(matches!(err, RouteError::InvalidMode(_)), "{err}");
}

#[test]
fn large_but_finite_weights_still_route() {
    let g = single_edge(1e300);
    let out = plan_route(&g, &RunRequest::new("A", "B", Multiplier::ONE)).unwrap();
    assert_eq!(out.total_cost(), Some(1e300));
}
