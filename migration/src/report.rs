use std::fmt;

/// One structural change applied during provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaAction {
    CreatedDatabase(String),
    CreatedTable(String),
    CreatedIndex(String),
    AddedColumn { table: String, column: String },
}

impl fmt::Display for SchemaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaAction::CreatedDatabase(name) => write!(f, "created database {name}"),
            SchemaAction::CreatedTable(name) => write!(f, "created table {name}"),
            SchemaAction::CreatedIndex(name) => write!(f, "created index {name}"),
            SchemaAction::AddedColumn { table, column } => {
                write!(f, "added column {table}.{column}")
            }
        }
    }
}

/// Everything a provisioning run changed. Empty once the database has
/// converged to the target schema.
#[derive(Debug, Default)]
pub struct MigrationReport {
    actions: Vec<SchemaAction>,
}

impl MigrationReport {
    pub fn record(&mut self, action: SchemaAction) {
        log::info!("{action}");
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[SchemaAction] {
        &self.actions
    }

    pub fn is_noop(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn merge(&mut self, other: MigrationReport) {
        self.actions.extend(other.actions);
    }
}
