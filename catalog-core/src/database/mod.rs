//! Repository ports and their PostgreSQL adapters.

pub mod infrastructure;
pub mod ports;
pub mod postgres;

pub use postgres::PostgresDatabase;

/// Formats the confirmation returned by update/delete operations.
pub(crate) fn confirmation(action: &str) -> String {
    format!(
        "Successfully {action}. ({})",
        chrono::Utc::now().format("%A, %d %B %Y %H:%M:%S")
    )
}

/// Row offset for a zero-based page. Computed in 64 bits so large indexes do
/// not wrap; the database rejects negative results.
pub(crate) fn page_offset(page_index: i32, page_size: i32) -> i64 {
    i64::from(page_index) * i64::from(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offset_multiplies_index_by_size() {
        assert_eq!(page_offset(0, 10), 0);
        assert_eq!(page_offset(3, 4), 12);
        assert_eq!(page_offset(i32::MAX, i32::MAX), 4_611_686_014_132_420_609);
    }

    #[test]
    fn confirmation_names_the_action() {
        let message = confirmation("deleted");
        assert!(message.starts_with("Successfully deleted. ("));
        assert!(message.ends_with(')'));
    }
}
