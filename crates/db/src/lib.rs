use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, PgConnection};
use ventas_core::config::{DbAuth, DbConfig};

pub mod models;
pub mod repositories;
pub mod schema;

/// Raw landing table fed by upstream producers and the simulator.
pub const RAW_TABLE: &str = "ventas_crudas";

/// Clean table filled only by the copy steps.
pub const CLEAN_TABLE: &str = "ventas_limpias";

/// Target of the server-side daily load procedures.
pub const DAILY_SALES_TABLE: &str = "ventas_diarias";

/// Translate the job configuration into driver connect options.
pub fn connect_options(config: &DbConfig) -> Result<PgConnectOptions, sqlx::Error> {
    if let Some(url) = &config.database_url {
        return url.parse();
    }

    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database);

    Ok(match &config.auth {
        DbAuth::Trusted => options,
        DbAuth::Credentials { user, password } => {
            let options = options.username(user);
            match password {
                Some(password) => options.password(password),
                None => options,
            }
        }
    })
}

/// Open a single connection for one job invocation.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, sqlx::Error> {
    let options = connect_options(config)?;
    let conn = options.connect().await?;
    tracing::debug!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        from_url = config.database_url.is_some(),
        "Database connection opened",
    );
    Ok(conn)
}

/// Verify the connection answers a trivial query.
pub async fn health_check(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    conn.ping().await
}
