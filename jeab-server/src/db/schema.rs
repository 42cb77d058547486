//! Catalog schema
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so running it on each
//! startup is safe. Column lengths mirror the catalog's field limits;
//! SQLite records them but does not enforce them.

use sqlx::SqlitePool;

const TABLES: [(&str, &str); 4] = [
    (
        "principles",
        r#"
        CREATE TABLE IF NOT EXISTS principles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(200) NOT NULL UNIQUE,
            description TEXT,
            category VARCHAR(100),
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "procedures",
        r#"
        CREATE TABLE IF NOT EXISTS procedures (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(200) NOT NULL UNIQUE,
            description TEXT,
            organism VARCHAR(100),
            apparatus VARCHAR(200),
            parameters TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "math_models",
        r#"
        CREATE TABLE IF NOT EXISTS math_models (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(200) NOT NULL,
            type VARCHAR(50),
            latex_equation TEXT,
            description TEXT,
            parameters TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "articles",
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(500) NOT NULL,
            authors VARCHAR(1000) NOT NULL,
            year INTEGER NOT NULL,
            volume INTEGER,
            issue INTEGER,
            pages VARCHAR(50),
            doi VARCHAR(200),
            abstract TEXT,
            principle_id INTEGER REFERENCES principles(id),
            procedure_id INTEGER REFERENCES procedures(id),
            math_model_id INTEGER REFERENCES math_models(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
];

const INDEXES: [&str; 6] = [
    "CREATE INDEX IF NOT EXISTS idx_articles_title ON articles(title)",
    "CREATE INDEX IF NOT EXISTS idx_articles_year ON articles(year)",
    "CREATE INDEX IF NOT EXISTS idx_articles_principle ON articles(principle_id)",
    "CREATE INDEX IF NOT EXISTS idx_math_models_name ON math_models(name)",
    "CREATE INDEX IF NOT EXISTS idx_principles_category ON principles(category)",
    "CREATE INDEX IF NOT EXISTS idx_procedures_organism ON procedures(organism)",
];

// Any update that leaves updated_at alone gets it refreshed.
const TOUCH_ARTICLES: &str = r#"
    CREATE TRIGGER IF NOT EXISTS articles_touch_updated_at
    AFTER UPDATE ON articles
    FOR EACH ROW
    WHEN NEW.updated_at = OLD.updated_at
    BEGIN
        UPDATE articles
        SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = NEW.id;
    END
"#;

/// Create tables, indexes, and triggers.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("applying catalog schema");

    for (table, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await.map_err(|e| {
            tracing::error!(table, "failed to create table: {}", e);
            e
        })?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    sqlx::query(TOUCH_ARTICLES).execute(pool).await?;

    tracing::info!("catalog schema ready");
    Ok(())
}
