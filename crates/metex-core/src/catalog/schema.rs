//! Column schema provider boundary and the rule-based stub.

use serde::{Deserialize, Serialize};

/// Key role of a column in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRole {
    #[default]
    None,
    Primary,
    Foreign,
}

/// Descriptive metadata for one column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Display string, e.g. `VARCHAR(100)`. Not parsed.
    pub data_type: String,
    pub key_role: KeyRole,
}

impl ColumnDescriptor {
    fn new(name: &str, data_type: &str, key_role: KeyRole) -> Self {
        Self {
            name: name.to_string(),
            data_type: data_type.to_string(),
            key_role,
        }
    }
}

/// Source of column schemas, keyed by table name.
pub trait ColumnSchemaProvider {
    fn columns_for(&self, table_name: &str) -> Vec<ColumnDescriptor>;
}

/// Rule-based column stub.
///
/// Every table gets the same base set; tables whose name contains `customer`
/// or `sales` get extra groups appended. The rules are independent and
/// additive, customer group before sales group.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedSchemaProvider;

impl ColumnSchemaProvider for RuleBasedSchemaProvider {
    fn columns_for(&self, table_name: &str) -> Vec<ColumnDescriptor> {
        let mut columns = vec![
            ColumnDescriptor::new("id", "INT", KeyRole::Primary),
            ColumnDescriptor::new("created_at", "TIMESTAMP", KeyRole::None),
            ColumnDescriptor::new("updated_at", "TIMESTAMP", KeyRole::None),
            ColumnDescriptor::new("status", "VARCHAR(20)", KeyRole::None),
        ];

        if table_name.contains("customer") {
            columns.push(ColumnDescriptor::new("email", "VARCHAR(100)", KeyRole::None));
            columns.push(ColumnDescriptor::new(
                "full_name",
                "VARCHAR(100)",
                KeyRole::None,
            ));
        }

        if table_name.contains("sales") {
            columns.push(ColumnDescriptor::new(
                "amount",
                "DECIMAL(10,2)",
                KeyRole::None,
            ));
            columns.push(ColumnDescriptor::new("customer_id", "INT", KeyRole::Foreign));
        }

        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(columns: &[ColumnDescriptor]) -> Vec<&str> {
        columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_base_columns_only() {
        let columns = RuleBasedSchemaProvider.columns_for("products");
        assert_eq!(names(&columns), ["id", "created_at", "updated_at", "status"]);
        assert_eq!(columns[0].key_role, KeyRole::Primary);
        assert!(columns[1..].iter().all(|c| c.key_role == KeyRole::None));
    }

    #[test]
    fn test_customer_group_appended() {
        let columns = RuleBasedSchemaProvider.columns_for("customers");
        assert_eq!(
            names(&columns),
            ["id", "created_at", "updated_at", "status", "email", "full_name"]
        );
        // The customer group adds no key roles.
        assert!(columns[4..].iter().all(|c| c.key_role == KeyRole::None));
    }

    #[test]
    fn test_sales_group_appended() {
        let columns = RuleBasedSchemaProvider.columns_for("sales_orders");
        assert_eq!(
            names(&columns),
            ["id", "created_at", "updated_at", "status", "amount", "customer_id"]
        );
        assert_eq!(columns[5].key_role, KeyRole::Foreign);
    }

    #[test]
    fn test_rules_are_additive_customer_first() {
        let columns = RuleBasedSchemaProvider.columns_for("customer_sales_log");
        assert_eq!(
            names(&columns),
            [
                "id",
                "created_at",
                "updated_at",
                "status",
                "email",
                "full_name",
                "amount",
                "customer_id"
            ]
        );
    }
}
