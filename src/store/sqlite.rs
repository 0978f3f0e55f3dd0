use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

fn map_unique(err: rusqlite::Error, message: impl FnOnce() -> String) -> Error {
    if is_unique_violation(&err) {
        Error::Conflict(message())
    } else {
        Error::from(err)
    }
}

fn check_version<T: WithVersion>(entity: &T, stored: i32, what: &str) -> Result<()> {
    if entity.version() != stored {
        return Err(Error::Conflict(format!(
            "{what} version {} does not match stored version {stored}",
            entity.version()
        )));
    }
    Ok(())
}

const VIRTUALIZATION_COLUMNS: &str = "id, name, description, version, created_at, updated_at";

fn virtualization_from_row(row: &Row<'_>) -> rusqlite::Result<Virtualization> {
    Ok(Virtualization {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        version: row.get(3)?,
        created_at: parse_datetime(&row.get::<_, String>(4)?),
        updated_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

const VIEW_COLUMNS: &str = "id, virtualization_id, name, description, ddl, complete, user_defined, version, created_at, updated_at";

fn view_from_row(row: &Row<'_>) -> rusqlite::Result<ViewDefinition> {
    Ok(ViewDefinition {
        id: row.get(0)?,
        virtualization_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        ddl: row.get(4)?,
        complete: row.get(5)?,
        user_defined: row.get(6)?,
        version: row.get(7)?,
        created_at: parse_datetime(&row.get::<_, String>(8)?),
        updated_at: parse_datetime(&row.get::<_, String>(9)?),
    })
}

fn privilege_from_row(row: &Row<'_>) -> rusqlite::Result<TablePrivilege> {
    Ok(TablePrivilege {
        role_name: row.get(0)?,
        view_definition_id: row.get(1)?,
        grant_privileges: PrivilegeSet::from(row.get::<_, i64>(2)?),
    })
}

fn select_privilege_bits(conn: &Connection, role_name: &str, view_id: &str) -> Result<PrivilegeSet> {
    let bits: Option<i64> = conn
        .query_row(
            "SELECT privilege_bits FROM table_privileges
             WHERE role_name = ?1 AND view_definition_id = ?2",
            params![role_name, view_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(bits.map(PrivilegeSet::from).unwrap_or_default())
}

fn write_privilege(
    conn: &Connection,
    role_name: &str,
    view_id: &str,
    kinds: PrivilegeSet,
) -> Result<()> {
    if kinds.is_empty() {
        conn.execute(
            "DELETE FROM table_privileges WHERE role_name = ?1 AND view_definition_id = ?2",
            params![role_name, view_id],
        )?;
        return Ok(());
    }

    let now = format_datetime(&Utc::now());
    conn.execute(
        "INSERT INTO table_privileges (role_name, view_definition_id, privilege_bits, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?4)
         ON CONFLICT (role_name, view_definition_id) DO UPDATE SET
            privilege_bits = excluded.privilege_bits,
            updated_at = excluded.updated_at",
        params![role_name, view_id, i64::from(kinds), now],
    )?;
    Ok(())
}

fn check_target(conn: &Connection, virtualization_id: &str, view_id: &str) -> Result<()> {
    let target: Option<(String, String, bool)> = conn
        .query_row(
            "SELECT virtualization_id, name, complete FROM view_definitions WHERE id = ?1",
            params![view_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    let Some((owner, name, complete)) = target else {
        return Err(Error::InvalidTarget(format!(
            "view definition '{view_id}' does not exist"
        )));
    };
    if owner != virtualization_id {
        return Err(Error::InvalidTarget(format!(
            "view '{name}' belongs to a different virtualization"
        )));
    }
    if !complete {
        return Err(Error::InvalidTarget(format!("view '{name}' is not complete")));
    }
    Ok(())
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        let count: i32 = self.conn().query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'table_privileges'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    // Virtualization operations

    fn create_virtualization(&self, virtualization: &Virtualization) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO virtualizations (id, name, description, version, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    virtualization.id,
                    virtualization.name,
                    virtualization.description,
                    virtualization.version,
                    format_datetime(&virtualization.created_at),
                    format_datetime(&virtualization.updated_at),
                ],
            )
            .map_err(|e| {
                map_unique(e, || {
                    format!("virtualization '{}' already exists", virtualization.name)
                })
            })?;
        Ok(())
    }

    fn get_virtualization_by_name(&self, name: &str) -> Result<Option<Virtualization>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {VIRTUALIZATION_COLUMNS} FROM virtualizations WHERE name = ?1"),
            params![name],
            virtualization_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_virtualizations(&self) -> Result<Vec<Virtualization>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {VIRTUALIZATION_COLUMNS} FROM virtualizations ORDER BY name"
        ))?;

        let rows = stmt.query_map([], virtualization_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_virtualization(&self, virtualization: &Virtualization) -> Result<Virtualization> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let stored: i32 = tx
            .query_row(
                "SELECT version FROM virtualizations WHERE id = ?1",
                params![virtualization.id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| {
                Error::NotFound(format!("virtualization '{}'", virtualization.name))
            })?;
        check_version(virtualization, stored, "virtualization")?;

        tx.execute(
            "UPDATE virtualizations SET description = ?1, version = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                virtualization.description,
                virtualization.next_version(),
                format_datetime(&Utc::now()),
                virtualization.id,
            ],
        )?;

        let updated = tx.query_row(
            &format!("SELECT {VIRTUALIZATION_COLUMNS} FROM virtualizations WHERE id = ?1"),
            params![virtualization.id],
            virtualization_from_row,
        )?;

        tx.commit()?;
        Ok(updated)
    }

    fn delete_virtualization(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM virtualizations WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // View definition operations

    fn create_view(&self, view: &ViewDefinition) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO view_definitions (id, virtualization_id, name, description, ddl, complete, user_defined, version, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    view.id,
                    view.virtualization_id,
                    view.name,
                    view.description,
                    view.ddl,
                    view.complete,
                    view.user_defined,
                    view.version,
                    format_datetime(&view.created_at),
                    format_datetime(&view.updated_at),
                ],
            )
            .map_err(|e| map_unique(e, || format!("view '{}' already exists", view.name)))?;
        Ok(())
    }

    fn get_view(&self, id: &str) -> Result<Option<ViewDefinition>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {VIEW_COLUMNS} FROM view_definitions WHERE id = ?1"),
            params![id],
            view_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_views(&self, virtualization_id: &str) -> Result<Vec<ViewDefinition>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {VIEW_COLUMNS} FROM view_definitions
             WHERE virtualization_id = ?1 ORDER BY name"
        ))?;

        let rows = stmt.query_map(params![virtualization_id], view_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_view(&self, view: &ViewDefinition) -> Result<ViewDefinition> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let stored: i32 = tx
            .query_row(
                "SELECT version FROM view_definitions WHERE id = ?1",
                params![view.id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("view definition '{}'", view.id)))?;
        check_version(view, stored, "view definition")?;

        tx.execute(
            "UPDATE view_definitions
             SET name = ?1, description = ?2, ddl = ?3, complete = ?4, user_defined = ?5,
                 version = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                view.name,
                view.description,
                view.ddl,
                view.complete,
                view.user_defined,
                view.next_version(),
                format_datetime(&Utc::now()),
                view.id,
            ],
        )
        .map_err(|e| map_unique(e, || format!("view '{}' already exists", view.name)))?;

        let updated = tx.query_row(
            &format!("SELECT {VIEW_COLUMNS} FROM view_definitions WHERE id = ?1"),
            params![view.id],
            view_from_row,
        )?;

        tx.commit()?;
        Ok(updated)
    }

    fn delete_view(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM view_definitions WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Privilege record operations

    fn get_privileges(&self, view_definition_id: &str) -> Result<Vec<TablePrivilege>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT role_name, view_definition_id, privilege_bits
             FROM table_privileges WHERE view_definition_id = ?1 ORDER BY role_name",
        )?;

        let rows = stmt.query_map(params![view_definition_id], privilege_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_privilege(
        &self,
        role_name: &str,
        view_definition_id: &str,
    ) -> Result<Option<TablePrivilege>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT role_name, view_definition_id, privilege_bits
             FROM table_privileges WHERE role_name = ?1 AND view_definition_id = ?2",
            params![role_name, view_definition_id],
            privilege_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn upsert_privilege(&self, privilege: &TablePrivilege) -> Result<()> {
        write_privilege(
            &self.conn(),
            &privilege.role_name,
            &privilege.view_definition_id,
            privilege.grant_privileges,
        )
    }

    fn remove_privilege(&self, role_name: &str, view_definition_id: &str) -> Result<bool> {
        let rows = self.conn().execute(
            "DELETE FROM table_privileges WHERE role_name = ?1 AND view_definition_id = ?2",
            params![role_name, view_definition_id],
        )?;
        Ok(rows > 0)
    }

    fn list_virtualization_privileges(
        &self,
        virtualization_id: &str,
    ) -> Result<Vec<TablePrivilege>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT p.role_name, p.view_definition_id, p.privilege_bits
             FROM table_privileges p
             JOIN view_definitions v ON v.id = p.view_definition_id
             WHERE v.virtualization_id = ?1
             ORDER BY v.name, p.role_name",
        )?;

        let rows = stmt.query_map(params![virtualization_id], privilege_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn list_role_names(&self) -> Result<Vec<String>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT DISTINCT role_name FROM table_privileges ORDER BY role_name")?;

        let rows = stmt.query_map([], |row| row.get(0))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn apply_privilege_changes(
        &self,
        virtualization_id: &str,
        operation: Operation,
        changes: &[TablePrivilege],
    ) -> Result<Vec<TablePrivilege>> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        for change in changes {
            check_target(&tx, virtualization_id, &change.view_definition_id)?;
        }

        let mut touched: Vec<(&str, &str)> = Vec::new();
        for change in changes {
            let (role, view) = change.key();
            let existing = select_privilege_bits(&tx, role, view)?;
            let resolved = operation.apply(existing, change.grant_privileges);
            if resolved != existing {
                write_privilege(&tx, role, view, resolved)?;
            }
            if !touched.contains(&(role, view)) {
                touched.push((role, view));
            }
        }

        let mut effective = Vec::with_capacity(touched.len());
        for (role, view) in touched {
            let kinds = select_privilege_bits(&tx, role, view)?;
            effective.push(TablePrivilege::new(role, view, kinds));
        }

        tx.commit()?;
        Ok(effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::types::PrivilegeKind::*;

    fn open_store(temp: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        store
    }

    fn virtualization(id: &str, name: &str) -> Virtualization {
        Virtualization {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            version: INITIAL_VERSION,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn view(id: &str, virtualization_id: &str, name: &str) -> ViewDefinition {
        ViewDefinition {
            id: id.to_string(),
            virtualization_id: virtualization_id.to_string(),
            name: name.to_string(),
            description: None,
            ddl: format!("create view {name} as select 1"),
            complete: true,
            user_defined: true,
            version: INITIAL_VERSION,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn seeded() -> (TempDir, SqliteStore) {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        store
            .create_virtualization(&virtualization("dv-1", "sales"))
            .unwrap();
        store.create_view(&view("view-1", "dv-1", "orders")).unwrap();
        store.create_view(&view("view-2", "dv-1", "customers")).unwrap();
        (temp, store)
    }

    #[test]
    fn test_initialize_creates_tables() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        assert!(!store.is_initialized().unwrap());
        store.initialize().unwrap();
        assert!(store.is_initialized().unwrap());

        let conn = store.conn();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"virtualizations".to_string()));
        assert!(tables.contains(&"view_definitions".to_string()));
        assert!(tables.contains(&"table_privileges".to_string()));
    }

    #[test]
    fn test_duplicate_virtualization_is_conflict() {
        let (_temp, store) = seeded();
        let result = store.create_virtualization(&virtualization("dv-2", "sales"));
        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[test]
    fn test_duplicate_view_name_is_conflict() {
        let (_temp, store) = seeded();
        let result = store.create_view(&view("view-3", "dv-1", "orders"));
        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[test]
    fn test_update_view_bumps_version() {
        let (_temp, store) = seeded();
        let mut current = store.get_view("view-1").unwrap().unwrap();
        assert_eq!(current.version, INITIAL_VERSION);

        current.ddl = "create view orders as select 2".to_string();
        let updated = store.update_view(&current).unwrap();
        assert_eq!(updated.version, INITIAL_VERSION + 1);
        assert_eq!(updated.ddl, "create view orders as select 2");
    }

    #[test]
    fn test_update_view_with_stale_version_is_conflict() {
        let (_temp, store) = seeded();
        let original = store.get_view("view-1").unwrap().unwrap();
        store.update_view(&original).unwrap();

        let result = store.update_view(&original);
        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(
            store.get_view("view-1").unwrap().unwrap().version,
            INITIAL_VERSION + 1
        );
    }

    #[test]
    fn test_update_virtualization_checks_version() {
        let (_temp, store) = seeded();
        let mut dv = store.get_virtualization_by_name("sales").unwrap().unwrap();
        dv.description = Some("quarterly numbers".to_string());
        let updated = store.update_virtualization(&dv).unwrap();
        assert_eq!(updated.version, INITIAL_VERSION + 1);
        assert_eq!(updated.description.as_deref(), Some("quarterly numbers"));

        assert!(matches!(
            store.update_virtualization(&dv),
            Err(Error::Conflict(_))
        ));
    }

    #[test]
    fn test_get_privileges_for_unknown_view_is_empty() {
        let (_temp, store) = seeded();
        assert!(store.get_privileges("nope").unwrap().is_empty());
        assert!(store.get_privilege("x", "nope").unwrap().is_none());
    }

    #[test]
    fn test_upsert_empty_set_removes_record() {
        let (_temp, store) = seeded();
        store
            .upsert_privilege(&TablePrivilege::new("x", "view-1", PrivilegeSet::of(Select)))
            .unwrap();
        assert_eq!(store.get_privileges("view-1").unwrap().len(), 1);

        store
            .upsert_privilege(&TablePrivilege::new("x", "view-1", PrivilegeSet::EMPTY))
            .unwrap();
        assert!(store.get_privileges("view-1").unwrap().is_empty());
        assert!(!store.remove_privilege("x", "view-1").unwrap());
    }

    #[test]
    fn test_role_keys_are_case_sensitive() {
        let (_temp, store) = seeded();
        store
            .upsert_privilege(&TablePrivilege::new("Analyst", "view-1", PrivilegeSet::of(Select)))
            .unwrap();
        store
            .upsert_privilege(&TablePrivilege::new("analyst", "view-1", PrivilegeSet::of(Insert)))
            .unwrap();

        assert_eq!(store.list_role_names().unwrap(), vec!["Analyst", "analyst"]);
    }

    #[test]
    fn test_apply_changes_processes_entries_in_order() {
        let (_temp, store) = seeded();
        let changes = vec![
            TablePrivilege::new("x", "view-1", PrivilegeSet::of(Select)),
            TablePrivilege::new("y", "view-2", PrivilegeSet::of(Insert)),
            TablePrivilege::new("x", "view-1", PrivilegeSet::of(Delete)),
        ];

        let effective = store
            .apply_privilege_changes("dv-1", Operation::Grant, &changes)
            .unwrap();

        assert_eq!(effective.len(), 2);
        assert_eq!(effective[0].key(), ("x", "view-1"));
        assert_eq!(effective[0].grant_privileges.to_kinds(), vec![Select, Delete]);
        assert_eq!(effective[1].key(), ("y", "view-2"));
    }

    #[test]
    fn test_revoke_to_empty_deletes_record() {
        let (_temp, store) = seeded();
        let grant = vec![TablePrivilege::new("x", "view-1", PrivilegeSet::of(Select))];
        store.apply_privilege_changes("dv-1", Operation::Grant, &grant).unwrap();

        let effective = store
            .apply_privilege_changes("dv-1", Operation::Revoke, &grant)
            .unwrap();

        assert!(effective[0].grant_privileges.is_empty());
        assert!(store.get_privilege("x", "view-1").unwrap().is_none());
        assert!(store.list_role_names().unwrap().is_empty());
    }

    #[test]
    fn test_failed_batch_leaves_no_changes() {
        let (_temp, store) = seeded();
        let changes = vec![
            TablePrivilege::new("x", "view-1", PrivilegeSet::of(Select)),
            TablePrivilege::new("x", "missing-view", PrivilegeSet::of(Select)),
        ];

        let result = store.apply_privilege_changes("dv-1", Operation::Grant, &changes);
        assert!(matches!(result, Err(Error::InvalidTarget(_))));
        assert!(store.get_privileges("view-1").unwrap().is_empty());
    }

    #[test]
    fn test_targets_are_checked_against_committed_state() {
        let (_temp, store) = seeded();
        store
            .create_virtualization(&virtualization("dv-2", "hr"))
            .unwrap();
        store.create_view(&view("view-3", "dv-2", "payroll")).unwrap();

        let mut orders = store.get_view("view-1").unwrap().unwrap();
        orders.complete = false;
        store.update_view(&orders).unwrap();

        for target in ["view-1", "view-3"] {
            let change = [TablePrivilege::new("x", target, PrivilegeSet::of(Select))];
            let result = store.apply_privilege_changes("dv-1", Operation::Grant, &change);
            assert!(
                matches!(result, Err(Error::InvalidTarget(_))),
                "expected InvalidTarget for {target}"
            );
        }
        assert!(store.list_role_names().unwrap().is_empty());
    }

    #[test]
    fn test_virtualization_privileges_and_cascade() {
        let (_temp, store) = seeded();
        store
            .apply_privilege_changes(
                "dv-1",
                Operation::Grant,
                &[
                    TablePrivilege::new("b", "view-1", PrivilegeSet::of(Select)),
                    TablePrivilege::new("a", "view-1", PrivilegeSet::of(Select)),
                    TablePrivilege::new("a", "view-2", PrivilegeSet::of(Update)),
                ],
            )
            .unwrap();

        let listed = store.list_virtualization_privileges("dv-1").unwrap();
        let keys: Vec<_> = listed.iter().map(TablePrivilege::key).collect();
        assert_eq!(
            keys,
            vec![("a", "view-2"), ("a", "view-1"), ("b", "view-1")]
        );

        assert!(store.delete_view("view-2").unwrap());
        assert_eq!(store.list_virtualization_privileges("dv-1").unwrap().len(), 2);

        assert!(store.delete_virtualization("dv-1").unwrap());
        assert!(store.list_role_names().unwrap().is_empty());
        assert!(store.get_view("view-1").unwrap().is_none());
    }
}
