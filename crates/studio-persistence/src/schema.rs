// Esquema Diesel de la base SQLite local.
// Tabla: state_slots (un snapshot serializado por slot con nombre)
diesel::table! {
    state_slots (name) {
        name -> Text,
        payload -> Text,
        updated_at_ts -> BigInt,
    }
}
