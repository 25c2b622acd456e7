use studio_domain::{DomainError, GraphEditor, NodeKind, Position};

#[test]
fn starter_graph_has_three_nodes_and_two_edges() {
  let g = GraphEditor::starter();
  assert_eq!(g.nodes().len(), 3);
  assert_eq!(g.edges().len(), 2);
  assert_eq!(g.nodes()[1].label(), Some("AI Processor"));
  assert!(g.dangling_edges().is_empty());
}

#[test]
fn add_node_uses_counter_and_default_payload() {
  let mut g = GraphEditor::starter();
  let id = g.add_node(NodeKind::Workflow, Position::new(120.0, 80.0));
  assert_eq!(id, "4");
  let node = g.nodes().last().unwrap();
  assert_eq!(node.kind, NodeKind::Workflow);
  assert_eq!(node.data["workflowType"], "sequential");
  assert_eq!(node.data["status"], "idle");

  // ids are never reused after a delete
  g.remove_node(&id).unwrap();
  let next = g.add_node(NodeKind::Code, Position::default());
  assert_eq!(next, "5");
}

#[test]
fn connect_requires_existing_nodes_and_dedupes() {
  let mut g = GraphEditor::starter();
  let id = g.connect("1", "3").unwrap();
  assert_eq!(id, "e1-3");
  assert_eq!(g.connect("1", "3").unwrap(), "e1-3");
  assert_eq!(g.edges().len(), 3);

  match g.connect("1", "99") {
    Err(DomainError::NotFound(_)) => {}
    other => panic!("expected NotFound, got {:?}", other),
  }
}

#[test]
fn remove_node_cascades_edges() {
  let mut g = GraphEditor::starter();
  let removed = g.remove_node("2").unwrap();
  assert_eq!(removed, 2);
  assert!(g.edges().is_empty());
  assert!(g.dangling_edges().is_empty());
  assert!(g.remove_node("2").is_err());
}

#[test]
fn from_graph_resumes_counter_after_highest_numeric_id() {
  let (nodes, edges) = GraphEditor::starter().into_parts();
  let mut g = GraphEditor::from_graph(nodes, edges);
  assert_eq!(g.add_node(NodeKind::Input, Position::default()), "4");
}

#[test]
fn node_serializes_kind_as_type() {
  let g = GraphEditor::starter();
  let v = serde_json::to_value(&g.nodes()[0]).unwrap();
  assert_eq!(v["type"], "input");
  assert_eq!(v["position"]["x"], 100.0);
  assert_eq!(v["data"]["label"], "Data Input");
}

#[test]
fn move_node_updates_position_only() {
  let mut g = GraphEditor::starter();
  let before = g.nodes()[1].data.clone();
  g.move_node("2", Position::new(420.5, -10.0)).unwrap();
  let node = &g.nodes()[1];
  assert_eq!(node.position, Position::new(420.5, -10.0));
  assert_eq!(node.data, before);
  assert_eq!(g.edges().len(), 2);

  match g.move_node("99", Position::default()) {
    Err(DomainError::NotFound(msg)) => assert!(msg.contains("99")),
    other => panic!("expected NotFound, got {:?}", other),
  }
}

#[test]
fn remove_edge_drops_only_that_edge() {
  let mut g = GraphEditor::starter();
  let first = g.edges()[0].id.clone();
  g.remove_edge(&first).unwrap();
  assert_eq!(g.edges().len(), 1);
  assert!(g.edges().iter().all(|e| e.id != first));
  assert_eq!(g.nodes().len(), 3);

  match g.remove_edge(&first) {
    Err(DomainError::NotFound(msg)) => assert!(msg.contains(&first)),
    other => panic!("expected NotFound, got {:?}", other),
  }
}

#[test]
fn every_kind_has_a_description() {
  for kind in NodeKind::ALL {
    assert!(!kind.description().is_empty(), "{} sin descripción", kind);
  }
  assert_eq!(NodeKind::Ai.description(), "AI processing node");
}
