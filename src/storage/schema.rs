//! Database schema definitions
//!
//! The bootstrap is idempotent so every process start can apply it. The `url`
//! column carries no uniqueness constraint: re-harvested listings produce
//! duplicate rows and downstream consumers must tolerate them.

/// SQL schema for the advertisements table
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS advertisements (
    id BIGSERIAL PRIMARY KEY,
    url TEXT NOT NULL,
    name TEXT NOT NULL,
    model TEXT NOT NULL,
    price BIGINT NOT NULL,
    region TEXT NOT NULL,
    run BIGINT NOT NULL,
    color TEXT NOT NULL,
    salon TEXT NOT NULL,
    seller TEXT NOT NULL,
    adv_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_advertisements_created_at
    ON advertisements(created_at);
"#;
