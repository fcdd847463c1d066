use serde::Serialize;

/// Dense user × permission table. Every row has one cell per permission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermissionMatrix {
    pub users: Vec<String>,
    pub permissions: Vec<String>,
    pub rows: Vec<PermissionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionRow {
    pub user: String,
    pub cells: Vec<String>,
}

impl PermissionMatrix {
    pub fn cell(&self, user: &str, permission: &str) -> Option<&str> {
        let column = self.permissions.iter().position(|p| p == permission)?;
        self.rows
            .iter()
            .find(|row| row.user == user)
            .and_then(|row| row.cells.get(column))
            .map(String::as_str)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    pub fn is_rectangular(&self) -> bool {
        self.rows.len() == self.users.len()
            && self.rows.iter().all(|row| row.cells.len() == self.permissions.len())
    }
}
