use super::*;

#[test]
fn json_definition_builds_graph() {
    let json = r#"
{
  "nodes": [
    { "id": "A", "x": 0, "y": 0 },
    { "id": "B", "x": 30, "y": 40 }
  ],
  "edges": [{ "a": "A", "b": "B", "weight": 2.5 }]
}
"#;
    let g = GraphDef::from_json_str(json).unwrap().build().unwrap();
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edges()[0].base_weight, 2.5);
    assert_eq!(g.position(g.find("B").unwrap()), kurbo::Point::new(30.0, 40.0));
}

#[test]
fn unknown_fields_are_serde_errors() {
    let json = r#"{ "nodes": [{ "id": "A", "x": 0, "y": 0, "z": 1 }] }"#;
    let err = GraphDef::from_json_str(json).unwrap_err();
    assert!(matches!(err, RouteError::Serde(_)), "{err}");
}

#[test]
fn missing_file_is_wrapped_io_error() {
    let err = GraphDef::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, RouteError::Other(_)));
    assert!(err.to_string().contains("open graph JSON"));
}

#[test]
fn builder_def_round_trips_through_json() {
    let b = GraphBuilder::new()
        .node("A", 1.0, 2.0)
        .node("B", 3.0, 4.0)
        .edge("A", "B", 9.0);
    let s = serde_json::to_string(b.def()).unwrap();
    assert_eq!(&GraphDef::from_json_str(&s).unwrap(), b.def());
}
