// graph.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
  Input,
  Process,
  Output,
  Ai,
  Code,
  Workflow,
}

impl NodeKind {
  pub const ALL: [NodeKind; 6] =
    [NodeKind::Input, NodeKind::Process, NodeKind::Ai, NodeKind::Output, NodeKind::Code, NodeKind::Workflow];

  /// Payload inicial de un nodo recién añadido desde la paleta.
  pub fn default_data(&self) -> Map<String, JsonValue> {
    let v = match self {
      NodeKind::Input => json!({ "label": "New Input", "value": "" }),
      NodeKind::Process => json!({ "label": "New Process", "operation": "transform" }),
      NodeKind::Output => json!({ "label": "New Output", "value": "" }),
      NodeKind::Ai => json!({ "label": "AI Node", "model": "GPT-4" }),
      NodeKind::Code => json!({ "label": "Code Block", "code": "// Your code here", "language": "javascript" }),
      NodeKind::Workflow => json!({ "label": "Workflow", "workflowType": "sequential", "status": "idle" }),
    };
    into_object(v)
  }

  pub fn description(&self) -> &'static str {
    match self {
      NodeKind::Input => "Data input source",
      NodeKind::Process => "Data transformation",
      NodeKind::Output => "Data output destination",
      NodeKind::Ai => "AI processing node",
      NodeKind::Code => "Custom code execution",
      NodeKind::Workflow => "Workflow orchestration",
    }
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      NodeKind::Input => "input",
      NodeKind::Process => "process",
      NodeKind::Output => "output",
      NodeKind::Ai => "ai",
      NodeKind::Code => "code",
      NodeKind::Workflow => "workflow",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for NodeKind {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "input" => Ok(NodeKind::Input),
      "process" => Ok(NodeKind::Process),
      "output" => Ok(NodeKind::Output),
      "ai" => Ok(NodeKind::Ai),
      "code" => Ok(NodeKind::Code),
      "workflow" => Ok(NodeKind::Workflow),
      other => Err(DomainError::ValidationError(format!("tipo de nodo desconocido: {}", other))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: NodeKind,
  pub position: Position,
  #[serde(default)]
  pub data: Map<String, JsonValue>,
}

impl GraphNode {
  pub fn label(&self) -> Option<&str> {
    self.data.get("label").and_then(|v| v.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
  pub id: String,
  pub source: String,
  pub target: String,
  #[serde(default)]
  pub animated: bool,
}

fn into_object(v: JsonValue) -> Map<String, JsonValue> {
  match v {
    JsonValue::Object(m) => m,
    _ => Map::new(),
  }
}

/// Elimina el nodo `id` y todas las aristas que lo referencian. Devuelve
/// cuántas aristas se eliminaron, o `None` si el nodo no existía.
pub fn remove_node_cascade(nodes: &mut Vec<GraphNode>, edges: &mut Vec<GraphEdge>, id: &str) -> Option<usize> {
  let before = nodes.len();
  nodes.retain(|n| n.id != id);
  if nodes.len() == before {
    return None;
  }
  let edges_before = edges.len();
  edges.retain(|e| e.source != id && e.target != id);
  Some(edges_before - edges.len())
}

/// Bookkeeping del editor de grafos: nodos, aristas y el contador de ids.
///
/// Los ids de nodo salen de un contador creciente local al editor; nunca se
/// reutilizan aunque se borre el nodo más reciente.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEditor {
  nodes: Vec<GraphNode>,
  edges: Vec<GraphEdge>,
  next_id: u64,
}

impl GraphEditor {
  pub fn new() -> Self {
    Self { nodes: Vec::new(), edges: Vec::new(), next_id: 1 }
  }

  /// Grafo de arranque: entrada -> IA -> salida.
  pub fn starter() -> Self {
    let node = |id: &str, kind: NodeKind, x: f64, data: JsonValue| GraphNode { id: id.to_string(),
                                                                             kind,
                                                                             position: Position::new(x, 100.0),
                                                                             data: into_object(data) };
    let nodes = vec![node("1", NodeKind::Input, 100.0, json!({ "label": "Data Input", "value": "" })),
                     node("2", NodeKind::Ai, 300.0, json!({ "label": "AI Processor", "model": "GPT-4" })),
                     node("3", NodeKind::Output, 500.0, json!({ "label": "Result Output", "value": "" })),];
    let edge = |id: &str, s: &str, t: &str| GraphEdge { id: id.into(), source: s.into(), target: t.into(), animated: true };
    let edges = vec![edge("e1-2", "1", "2"), edge("e2-3", "2", "3")];
    Self { nodes, edges, next_id: 4 }
  }

  /// Reconstruye el editor desde un grafo existente. El contador arranca
  /// después del mayor id numérico presente.
  pub fn from_graph(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
    let max = nodes.iter().filter_map(|n| n.id.parse::<u64>().ok()).max().unwrap_or(0);
    Self { nodes, edges, next_id: max + 1 }
  }

  pub fn nodes(&self) -> &[GraphNode] {
    &self.nodes
  }

  pub fn edges(&self) -> &[GraphEdge] {
    &self.edges
  }

  pub fn into_parts(self) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    (self.nodes, self.edges)
  }

  pub fn contains(&self, id: &str) -> bool {
    self.nodes.iter().any(|n| n.id == id)
  }

  /// Añade un nodo con el payload por defecto de su tipo y devuelve su id.
  pub fn add_node(&mut self, kind: NodeKind, position: Position) -> String {
    let id = self.next_id.to_string();
    self.next_id += 1;
    self.nodes.push(GraphNode { id: id.clone(), kind, position, data: kind.default_data() });
    id
  }

  /// Conecta dos nodos existentes. Una conexión repetida no crea otra
  /// arista y devuelve el id de la existente.
  pub fn connect(&mut self, source: &str, target: &str) -> Result<String, DomainError> {
    for end in [source, target] {
      if !self.contains(end) {
        return Err(DomainError::NotFound(format!("nodo {}", end)));
      }
    }
    if let Some(existing) = self.edges.iter().find(|e| e.source == source && e.target == target) {
      return Ok(existing.id.clone());
    }
    let id = format!("e{}-{}", source, target);
    self.edges.push(GraphEdge { id: id.clone(), source: source.into(), target: target.into(), animated: true });
    Ok(id)
  }

  pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), DomainError> {
    let node = self.nodes
                   .iter_mut()
                   .find(|n| n.id == id)
                   .ok_or_else(|| DomainError::NotFound(format!("nodo {}", id)))?;
    node.position = position;
    Ok(())
  }

  /// Borra el nodo y en cascada sus aristas. Devuelve cuántas aristas cayeron.
  pub fn remove_node(&mut self, id: &str) -> Result<usize, DomainError> {
    remove_node_cascade(&mut self.nodes, &mut self.edges, id).ok_or_else(|| DomainError::NotFound(format!("nodo {}", id)))
  }

  pub fn remove_edge(&mut self, id: &str) -> Result<(), DomainError> {
    let before = self.edges.len();
    self.edges.retain(|e| e.id != id);
    if self.edges.len() == before {
      return Err(DomainError::NotFound(format!("arista {}", id)));
    }
    Ok(())
  }

  /// Aristas cuyo origen o destino no existe.
  pub fn dangling_edges(&self) -> Vec<&GraphEdge> {
    self.edges.iter().filter(|e| !self.contains(&e.source) || !self.contains(&e.target)).collect()
  }
}

impl Default for GraphEditor {
  fn default() -> Self {
    Self::new()
  }
}
