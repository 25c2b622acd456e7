use std::sync::Arc;
use studio_domain::{GraphEditor, LogLevel, MessageDraft, Mode, NodeKind, Position};
use studio_store::errors::StoreError;
use studio_store::stubs::InMemoryStateRepository;
use studio_store::{AppStore, StoreConfig};

fn main() -> Result<(), StoreError> {
    // Repo en memoria y store sobre el slot por defecto
    let repo = Arc::new(InMemoryStateRepository::new());
    let store = AppStore::new(repo.clone(), StoreConfig::default());
    let mut events = store.subscribe();

    // Editar el buffer: vuelve a Draft
    store.save();
    println!("status antes de editar: {}", store.code_status());
    store.set_code("fn main() {\n    println!(\"hola\");\n}");
    store.set_language("rust");
    println!("status tras editar: {} ({} líneas)\n", store.code_status(), store.state().code.line_count());

    // Chat: ids generados por el store
    for i in 1..=3 {
        let id = store.add_message(MessageDraft::user(format!("pregunta {}", i)), None);
        println!("mensaje {} -> {}", i, id);
    }

    // Grafo visual: grafo inicial más un nodo de código
    let mut editor = GraphEditor::starter();
    let code_node = editor.add_node(NodeKind::Code, Position::new(300.0, 300.0));
    if let Err(e) = editor.connect("2", &code_node) {
        println!("no se pudo conectar: {}", e);
    }
    let (nodes, edges) = editor.into_parts();
    store.set_nodes(nodes);
    store.set_edges(edges);
    println!("grafo: {} nodos, {} aristas\n", store.nodes().len(), store.edges().len());

    // Los logs no se persisten
    store.set_mode(Mode::Visual);
    store.add_log(LogLevel::Info, "sólo en memoria");
    println!("escrituras en el slot: {}", repo.write_count());

    // Reabrir desde el mismo repo: vuelven código, chat y grafo
    let reopened = AppStore::open(repo, StoreConfig::default())?;
    println!("reabierto: modo {}, {} mensajes, {} logs",
             reopened.mode(),
             reopened.messages().len(),
             reopened.logs().len());

    // Eventos publicados por el primer store
    let mut seen = 0;
    while let Ok(ev) = events.try_recv() {
        println!("evento: {:?}", ev);
        seen += 1;
    }
    println!("{} eventos", seen);

    Ok(())
}
