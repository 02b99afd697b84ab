//! Migration filename derivation.
//!
//! Migration files are named `<timestamp>_<seq>_create_<table>_table.php`,
//! e.g. `2026_08_25_143012_0001_create_create_orders_table.php`. The
//! timestamp keeps migrations sorted by generation time the way the schema
//! tool expects; the sequence number guarantees uniqueness when two
//! invocations for the same name land in the same wall-clock second, which
//! a timestamp alone cannot.
//!
//! The sequence counter is process-wide and monotonic. Filenames from
//! separate processes in the same second can still collide on the sequence
//! value, but the commit step refuses to overwrite an existing file, so the
//! collision surfaces as an error rather than a silent last-write-wins.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDateTime;

use crate::domain::name::SliceName;

static MIGRATION_SEQ: AtomicU64 = AtomicU64::new(1);

/// Next value of the process-wide migration sequence.
pub fn next_sequence() -> u64 {
    MIGRATION_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Derive a migration filename from a slice name, a timestamp, and a
/// sequence number.
///
/// Pure: the same inputs always produce the same output. Callers obtain
/// `seq` from [`next_sequence`] at generation time.
pub fn migration_filename(name: &SliceName, now: NaiveDateTime, seq: u64) -> String {
    format!(
        "{}_{:04}_create_{}_table.php",
        now.format("%Y_%m_%d_%H%M%S"),
        seq,
        name.table()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 25)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap()
    }

    #[test]
    fn filename_format() {
        let name = SliceName::parse("create-order").unwrap();
        assert_eq!(
            migration_filename(&name, at_noon(), 7),
            "2026_08_25_123045_0007_create_create_orders_table.php"
        );
    }

    #[test]
    fn same_second_same_name_distinct_filenames() {
        let name = SliceName::parse("Order").unwrap();
        let a = migration_filename(&name, at_noon(), next_sequence());
        let b = migration_filename(&name, at_noon(), next_sequence());
        assert_ne!(a, b);
    }

    #[test]
    fn sequence_is_monotonic() {
        let first = next_sequence();
        let second = next_sequence();
        assert!(second > first);
    }

    #[test]
    fn filename_is_deterministic_for_fixed_inputs() {
        let name = SliceName::parse("Order").unwrap();
        assert_eq!(
            migration_filename(&name, at_noon(), 1),
            migration_filename(&name, at_noon(), 1)
        );
    }
}
