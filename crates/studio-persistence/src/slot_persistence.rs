use crate::schema::state_slots;
use crate::schema::state_slots::dsl as slots_dsl;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::Error as DieselError;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use studio_store::{Result, StateRepository, StoreError};
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");
/// Fichero usado cuando no hay `STUDIO_DB_URL` ni `DATABASE_URL`.
pub const DEFAULT_DB_URL: &str = "studio.db";
type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// Repo Diesel que implementa `StateRepository` sobre una tabla de slots.
pub struct DieselStateRepository {
  pool: Arc<DbPool>,
}
impl DieselStateRepository {
  /// Abre (o crea) la base indicada y aplica las migraciones pendientes.
  pub fn new(database_url: &str) -> Result<Self> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder().max_size(4)
                              .build(manager)
                              .map_err(|e| StoreError::Storage(format!("no se pudo crear el pool de conexiones: {}", e)))?;
    let repo = DieselStateRepository { pool: Arc::new(pool) };
    let mut c = repo.conn()?;
    let _ = diesel::sql_query("PRAGMA journal_mode = WAL;").execute(&mut c);
    let _ = diesel::sql_query("PRAGMA busy_timeout = 5000;").execute(&mut c);
    c.run_pending_migrations(MIGRATIONS).map_err(|e| StoreError::Storage(format!("migraciones: {}", e)))?;
    log::debug!("slots SQLite listos en '{}'", database_url);
    Ok(repo)
  }
  fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
    self.pool.get().map_err(|e| StoreError::Storage(format!("pool: {}", e)))
  }
}
#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = state_slots)]
struct SlotRow {
  pub name: String,
  pub payload: String,
  pub updated_at_ts: i64,
}
fn map_db_err<T>(res: std::result::Result<T, DieselError>) -> Result<T> {
  res.map_err(|e| StoreError::Storage(format!("db: {}", e)))
}
impl StateRepository for DieselStateRepository {
  fn load_slot(&self, name: &str) -> Result<Option<String>> {
    let mut conn = self.conn()?;
    let row = map_db_err(slots_dsl::state_slots.filter(slots_dsl::name.eq(name))
                                               .first::<SlotRow>(&mut conn)
                                               .optional())?;
    Ok(row.map(|r| r.payload))
  }
  fn save_slot(&self, name: &str, payload: &str) -> Result<()> {
    let mut conn = self.conn()?;
    let row = SlotRow { name: name.to_string(),
                        payload: payload.to_string(),
                        updated_at_ts: chrono::Utc::now().timestamp_millis() };
    map_db_err(diesel::replace_into(state_slots::table).values(&row).execute(&mut conn))?;
    Ok(())
  }
  fn delete_slot(&self, name: &str) -> Result<()> {
    let mut conn = self.conn()?;
    map_db_err(diesel::delete(slots_dsl::state_slots.filter(slots_dsl::name.eq(name))).execute(&mut conn))?;
    Ok(())
  }
}
/// Construye el repositorio leyendo `STUDIO_DB_URL` (o `DATABASE_URL`) del
/// entorno y de `.env`. Sin ninguna de las dos usa `studio.db` en el
/// directorio actual.
pub fn new_from_env() -> Result<DieselStateRepository> {
  dotenvy::dotenv().ok();
  let url = std::env::var("STUDIO_DB_URL").or_else(|_| std::env::var("DATABASE_URL"))
                                          .unwrap_or_else(|_| DEFAULT_DB_URL.into());
  let url_l = url.to_lowercase();
  if url_l.starts_with("postgres") {
    return Err(StoreError::Storage("studio-persistence sólo soporta SQLite; la URL parece de Postgres".into()));
  }
  DieselStateRepository::new(&url)
}
// Helper de pruebas: repositorio sobre una URL SQLite explícita, sin pasar
// por el entorno.
pub fn new_sqlite_for_test(database_url: &str) -> Result<DieselStateRepository> {
  DieselStateRepository::new(database_url)
}
