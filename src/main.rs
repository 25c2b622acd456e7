use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;
use studio_assistant::{split_code_blocks, ChatSession, Segment, SUGGESTIONS};
use studio_domain::{GraphEditor, Mode, NodeKind, Position, FONT_SIZE_OPTIONS, TAB_SIZE_OPTIONS};
use studio_store::StateRepository;
use studio_workflow::{HotkeyOutcome, StudioConfig, StudioSession};

/// Pequeño menú interactivo sobre una sesión del estudio. El estado se
/// guarda en el slot SQLite configurado y se recupera al arrancar.
///
/// Opciones soportadas:
/// 1) Ver estado
/// 2) Cambiar modo (code/visual)
/// 3) Editar código
/// 4) Cambiar lenguaje
/// 5) Pulsar atajo (ctrl+s / ctrl+r)
/// 6) Enviar mensaje al chat
/// 7) Usar una sugerencia del chat
/// 8) Ver logs
/// 9) Limpiar logs
/// 10) Limpiar chat
/// 11) Grafo visual
/// 12) Preferencias del editor
/// 13) Salir
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = StudioConfig::from_env()?;
    // Inicializar repo (aplica migraciones embebidas si procede)
    let repo: Arc<dyn StateRepository> = match &config.db_url {
        Some(url) => Arc::new(studio_persistence::DieselStateRepository::new(url)?),
        None => Arc::new(studio_persistence::new_from_env()?),
    };
    let session = StudioSession::open(repo, &config)?;
    let store = session.store().clone();
    let chat = ChatSession::new(store.clone(), config.reply_delay);

    loop {
        println!("\n== Code Studio ({} | {}) ==", store.mode(), store.code_status());
        println!("1) Ver estado");
        println!("2) Cambiar modo (code/visual)");
        println!("3) Editar código");
        println!("4) Cambiar lenguaje");
        println!("5) Pulsar atajo (ctrl+s / ctrl+r)");
        println!("6) Enviar mensaje al chat");
        println!("7) Usar una sugerencia del chat");
        println!("8) Ver logs");
        println!("9) Limpiar logs");
        println!("10) Limpiar chat");
        println!("11) Grafo visual");
        println!("12) Preferencias del editor");
        println!("13) Salir");
        let choice = prompt("Elige una opción: ")?;
        match choice.trim() {
            "1" => print_state(&session),
            "2" => {
                let raw = prompt("Modo (code/visual): ")?;
                match raw.trim().parse::<Mode>() {
                    Ok(mode) => store.set_mode(mode),
                    Err(e) => eprintln!("{}", e),
                }
            }
            "3" => {
                println!("Escribe el código; una línea con sólo '.' termina:");
                let text = read_block()?;
                store.set_code(text);
                println!("Buffer actualizado ({} líneas)", store.state().code.line_count());
            }
            "4" => {
                let lang = prompt("Lenguaje (ej: javascript, python): ")?;
                if lang.trim().is_empty() {
                    eprintln!("Lenguaje vacío");
                    continue;
                }
                store.set_language(lang.trim());
            }
            "5" => {
                let combo = prompt("Combinación: ")?;
                match session.handle_hotkey(combo.trim()) {
                    HotkeyOutcome::Saved => println!("Guardado"),
                    HotkeyOutcome::AlreadySaved => println!("Ya estaba guardado"),
                    HotkeyOutcome::RunStarted(handle) => {
                        println!("Ejecutando...");
                        match handle.await {
                            Ok(outcome) => println!("Resultado: {:?}", outcome),
                            Err(e) => eprintln!("La tarea de ejecución terminó mal: {}", e),
                        }
                        print_logs(&session);
                    }
                    HotkeyOutcome::Ignored => println!("Atajo no reconocido: {}", combo.trim()),
                    HotkeyOutcome::NoRuntime => eprintln!("No hay runtime para ejecutar"),
                }
            }
            "6" => {
                let text = prompt("Mensaje: ")?;
                match chat.send(text.trim_end()).await {
                    Some(ex) => {
                        print_reply(&session, &ex.reply_id);
                        if ex.code_updated {
                            println!("(el editor se actualizó con código generado)");
                        }
                    }
                    None => println!("Mensaje vacío, no se envía"),
                }
            }
            "7" => {
                for (i, (text, target)) in SUGGESTIONS.iter().enumerate() {
                    println!("{}) {} [{:?}]", i + 1, text, target);
                }
                let raw = prompt("Sugerencia: ")?;
                let picked = raw.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| SUGGESTIONS.get(i));
                match picked {
                    Some((text, target)) => {
                        let ex = chat.suggest(text, *target).await;
                        print_reply(&session, &ex.reply_id);
                    }
                    None => eprintln!("Sugerencia inválida"),
                }
            }
            "8" => print_logs(&session),
            "9" => {
                store.clear_logs();
                println!("Logs vaciados");
            }
            "10" => {
                store.clear_messages();
                println!("Chat vaciado");
            }
            "11" => graph_menu(&session)?,
            "12" => preferences_menu(&session)?,
            "13" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

fn print_state(session: &StudioSession) {
    let state = session.store().state();
    println!("Modo: {}", state.mode);
    println!("Estado del código: {}", state.code_status);
    println!("Lenguaje: {} ({} líneas)", state.code.language, state.code.line_count());
    println!("Nodos: {} | Aristas: {}", state.nodes.len(), state.edges.len());
    println!("Mensajes: {} | Logs: {}", state.messages.len(), state.logs.len());
    println!("Paneles: logs {} ({}px), chat {} ({}px)",
             if state.layout.logs_open { "abierto" } else { "cerrado" },
             state.layout.logs_panel_height,
             if state.layout.chat_open { "abierto" } else { "cerrado" },
             state.layout.chat_panel_width);
    println!("----- código -----\n{}\n------------------", state.code.text);
}

fn print_logs(session: &StudioSession) {
    let logs = session.store().logs();
    if logs.is_empty() {
        println!("(sin logs)");
    }
    for entry in logs {
        println!("{}", entry);
    }
}

fn print_reply(session: &StudioSession, reply_id: &str) {
    let Some(msg) = session.store().messages().into_iter().find(|m| m.id == reply_id) else {
        return;
    };
    for segment in split_code_blocks(&msg.content) {
        match segment {
            Segment::Text(t) => print!("{}", t),
            Segment::Code(block) => println!("[bloque {} de {} líneas]", block.label(), block.line_count()),
        }
    }
    println!();
}

fn graph_menu(session: &StudioSession) -> io::Result<()> {
    let store = session.store();
    let mut editor = GraphEditor::from_graph(store.nodes(), store.edges());
    println!("a) Listar  b) Grafo inicial  c) Añadir nodo  d) Conectar  e) Borrar nodo");
    println!("f) Mover nodo  g) Borrar arista");
    match prompt("Acción: ")?.trim() {
        "a" => {
            for n in editor.nodes() {
                println!("{} [{}] {} @ ({}, {})", n.id, n.kind, n.label().unwrap_or("-"), n.position.x, n.position.y);
            }
            for e in editor.edges() {
                println!("{}: {} -> {}", e.id, e.source, e.target);
            }
            return Ok(());
        }
        "b" => editor = GraphEditor::starter(),
        "c" => {
            for k in NodeKind::ALL {
                println!("  {:<9} {}", k.to_string(), k.description());
            }
            let raw = prompt("Tipo: ")?;
            let kind = match raw.trim().parse::<NodeKind>() {
                Ok(k) => k,
                Err(e) => {
                    eprintln!("{}", e);
                    return Ok(());
                }
            };
            let x = prompt("x: ")?.trim().parse().unwrap_or(0.0);
            let y = prompt("y: ")?.trim().parse().unwrap_or(0.0);
            let id = editor.add_node(kind, Position::new(x, y));
            println!("Nodo creado: {}", id);
        }
        "d" => {
            let source = prompt("Origen: ")?;
            let target = prompt("Destino: ")?;
            match editor.connect(source.trim(), target.trim()) {
                Ok(id) => println!("Arista: {}", id),
                Err(e) => {
                    eprintln!("{}", e);
                    return Ok(());
                }
            }
        }
        "e" => {
            let id = prompt("Nodo a borrar: ")?;
            match store.remove_node(id.trim()) {
                Some(n) => println!("Nodo borrado junto con {} aristas", n),
                None => eprintln!("No existe el nodo {}", id.trim()),
            }
            return Ok(());
        }
        "f" => {
            let id = prompt("Nodo a mover: ")?;
            let x = prompt("x: ")?.trim().parse().unwrap_or(0.0);
            let y = prompt("y: ")?.trim().parse().unwrap_or(0.0);
            if let Err(e) = editor.move_node(id.trim(), Position::new(x, y)) {
                eprintln!("{}", e);
                return Ok(());
            }
        }
        "g" => {
            let id = prompt("Arista a borrar: ")?;
            if let Err(e) = editor.remove_edge(id.trim()) {
                eprintln!("{}", e);
                return Ok(());
            }
            println!("Arista borrada");
        }
        other => {
            println!("Acción inválida: {}", other);
            return Ok(());
        }
    }
    let (nodes, edges) = editor.into_parts();
    store.set_nodes(nodes);
    store.set_edges(edges);
    Ok(())
}

fn preferences_menu(session: &StudioSession) -> io::Result<()> {
    let store = session.store();
    let p = store.preferences();
    println!("a) Tamaño de fuente ({})  b) Tabulación ({})", p.font_size, p.tab_size);
    println!("c) Números de línea ({})  d) Minimapa ({})  e) Ajuste de línea ({})  f) Autocompletado ({})",
             p.show_line_numbers,
             p.show_minimap,
             p.word_wrap,
             p.code_completion);
    match prompt("Preferencia: ")?.trim() {
        "a" => match prompt(&format!("Tamaño en pt {:?}: ", FONT_SIZE_OPTIONS))?.trim().parse() {
            Ok(n) => store.set_font_size(n),
            Err(_) => eprintln!("Número inválido"),
        },
        "b" => match prompt(&format!("Espacios {:?}: ", TAB_SIZE_OPTIONS))?.trim().parse() {
            Ok(n) => store.set_tab_size(n),
            Err(_) => eprintln!("Número inválido"),
        },
        "c" => store.set_show_line_numbers(!p.show_line_numbers),
        "d" => store.set_show_minimap(!p.show_minimap),
        "e" => store.set_word_wrap(!p.word_wrap),
        "f" => store.set_code_completion(!p.code_completion),
        other => println!("Opción inválida: {}", other),
    }
    Ok(())
}

fn read_block() -> io::Result<String> {
    let mut lines = Vec::new();
    loop {
        let mut s = String::new();
        if io::stdin().read_line(&mut s)? == 0 {
            break;
        }
        let line = s.trim_end_matches(['\n', '\r']);
        if line == "." {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s)
}
