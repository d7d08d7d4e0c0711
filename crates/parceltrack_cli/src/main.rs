//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `parceltrack_core` linkage.
//! - Run one in-memory register/fetch cycle for quick local sanity checks.

use parceltrack_core::db::open_db_in_memory;
use parceltrack_core::{SqliteParcelStore, TrackingService};

fn main() {
    println!("parceltrack_core version={}", parceltrack_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("smoke failed: {err}");
            std::process::exit(1);
        }
    };

    let service = TrackingService::new(SqliteParcelStore::new(&conn));
    match service.register(1, "smoke street 1") {
        Ok(parcel) => println!(
            "smoke ok number={} status={} created_at={}",
            parcel.number, parcel.status, parcel.created_at
        ),
        Err(err) => {
            eprintln!("smoke failed: {err}");
            std::process::exit(1);
        }
    }
}
