//! Persistencia durable del slot de estado sobre SQLite (Diesel + r2d2).
//! Expone el módulo `schema` y reexporta `DieselStateRepository`, que
//! implementa `studio_store::StateRepository`. Las migraciones se embeben en
//! el binario y se aplican al crear el repositorio.

mod slot_persistence;
pub mod schema;

pub use slot_persistence::{new_from_env, new_sqlite_for_test, DieselStateRepository, DEFAULT_DB_URL, MIGRATIONS};
