use crate::{
    foundation::error::RouteResult,
    graph::def::{EdgeDef, GraphDef, NodeDef},
    graph::model::Graph,
};

const TOWER_NODES: [(&str, f64, f64); 18] = [
    ("Tower 1", 236.0, 355.0),
    ("Tower 2", 390.0, 230.0),
    ("Tower 3", 430.0, 360.0),
    ("Tower 4", 707.0, 275.0),
    ("Tower 5", 840.0, 280.0),
    ("Tower 6", 1086.0, 107.0),
    ("Tower 7", 650.0, 435.0),
    ("Tower 8", 960.0, 285.0),
    ("Tower 9", 850.0, 430.0),
    ("Tower 10", 530.0, 483.0),
    ("Tower 11", 230.0, 625.0),
    ("Tower 12", 380.0, 693.0),
    ("Tower 13", 550.0, 620.0),
    ("Tower 14", 610.0, 750.0),
    ("Tower 15", 720.0, 620.0),
    ("Tower 16", 760.0, 780.0),
    ("Tower 17", 900.0, 676.0),
    ("Tower 18", 1005.0, 658.0),
];

const TOWER_EDGES: [(&str, &str, f64); 24] = [
    ("Tower 1", "Tower 2", 10.0),
    ("Tower 1", "Tower 3", 12.0),
    ("Tower 3", "Tower 2", 8.0),
    ("Tower 3", "Tower 4", 18.0),
    ("Tower 4", "Tower 9", 12.0),
    ("Tower 9", "Tower 5", 8.0),
    ("Tower 9", "Tower 8", 7.0),
    ("Tower 8", "Tower 6", 9.0),
    ("Tower 5", "Tower 6", 15.0),
    ("Tower 4", "Tower 7", 9.0),
    ("Tower 3", "Tower 10", 8.0),
    ("Tower 11", "Tower 1", 25.0),
    ("Tower 10", "Tower 7", 5.0),
    ("Tower 10", "Tower 13", 6.0),
    ("Tower 7", "Tower 15", 7.0),
    ("Tower 13", "Tower 15", 8.0),
    ("Tower 15", "Tower 17", 9.0),
    ("Tower 17", "Tower 18", 5.0),
    ("Tower 17", "Tower 16", 7.0),
    ("Tower 14", "Tower 16", 6.0),
    ("Tower 14", "Tower 13", 10.0),
    ("Tower 15", "Tower 16", 7.0),
    ("Tower 13", "Tower 12", 9.0),
    ("Tower 12", "Tower 11", 15.0),
];

/// Definition of the built-in 18-tower map (positions in map-image pixels).
pub fn tower_map_def() -> GraphDef {
    GraphDef {
        nodes: TOWER_NODES
            .iter()
            .map(|&(id, x, y)| NodeDef {
                id: id.to_owned(),
                x,
                y,
            })
            .collect(),
        edges: TOWER_EDGES
            .iter()
            .map(|&(a, b, weight)| EdgeDef {
                a: a.to_owned(),
                b: b.to_owned(),
                weight,
            })
            .collect(),
    }
}

/// The built-in 18-tower map as a validated graph.
pub fn tower_map() -> RouteResult<Graph> {
    tower_map_def().build()
}

#[cfg(test)]
#[path = "../../tests/unit/graph/preset.rs"]
mod tests;
