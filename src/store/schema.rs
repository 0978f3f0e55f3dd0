pub const SCHEMA: &str = r#"
-- Virtualizations group views into one queryable source
CREATE TABLE IF NOT EXISTS virtualizations (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    version INTEGER NOT NULL DEFAULT 1,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

-- User-authored views; only complete views may carry privileges
CREATE TABLE IF NOT EXISTS view_definitions (
    id TEXT PRIMARY KEY,
    virtualization_id TEXT NOT NULL REFERENCES virtualizations(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT,
    ddl TEXT NOT NULL DEFAULT '',
    complete INTEGER NOT NULL DEFAULT 0,
    user_defined INTEGER NOT NULL DEFAULT 0,
    version INTEGER NOT NULL DEFAULT 1,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now')),

    UNIQUE(virtualization_id, name)
);

-- One row per (role, view); a row with no privilege bits is never kept
CREATE TABLE IF NOT EXISTS table_privileges (
    role_name TEXT NOT NULL,
    view_definition_id TEXT NOT NULL REFERENCES view_definitions(id) ON DELETE CASCADE,
    privilege_bits INTEGER NOT NULL CHECK (privilege_bits != 0),
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now')),
    PRIMARY KEY (role_name, view_definition_id)
);

CREATE INDEX IF NOT EXISTS idx_views_virtualization ON view_definitions(virtualization_id);
CREATE INDEX IF NOT EXISTS idx_privileges_view ON table_privileges(view_definition_id);
"#;
