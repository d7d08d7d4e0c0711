use parceltrack_core::db::open_db_in_memory;
use parceltrack_core::{
    ParcelStatus, RepoError, ServiceError, SqliteParcelStore, TrackingService,
};

#[test]
fn register_assigns_a_number_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let service = TrackingService::new(SqliteParcelStore::new(&conn));

    let parcel = service.register(1000, "test").unwrap();
    assert!(parcel.number > 0);
    assert_eq!(parcel.status, ParcelStatus::Registered);

    let loaded = service.get(parcel.number).unwrap();
    assert_eq!(loaded, parcel);
}

#[test]
fn address_can_change_only_while_registered() {
    let conn = open_db_in_memory().unwrap();
    let service = TrackingService::new(SqliteParcelStore::new(&conn));

    let parcel = service.register(1000, "test").unwrap();
    service.update_address(parcel.number, "new address").unwrap();
    assert_eq!(service.get(parcel.number).unwrap().address, "new address");

    service.send(parcel.number).unwrap();

    let err = service
        .update_address(parcel.number, "too late")
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::AddressFrozen {
            status: ParcelStatus::Sent,
            ..
        }
    ));
    assert_eq!(service.get(parcel.number).unwrap().address, "new address");
}

#[test]
fn status_follows_the_delivery_workflow() {
    let conn = open_db_in_memory().unwrap();
    let service = TrackingService::new(SqliteParcelStore::new(&conn));

    let parcel = service.register(1000, "test").unwrap();

    // Skipping `sent` is rejected.
    let err = service.deliver(parcel.number).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidTransition {
            from: ParcelStatus::Registered,
            to: ParcelStatus::Delivered,
            ..
        }
    ));

    service.send(parcel.number).unwrap();
    assert_eq!(
        service.get(parcel.number).unwrap().status,
        ParcelStatus::Sent
    );

    let err = service.send(parcel.number).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidTransition { .. }));

    service.deliver(parcel.number).unwrap();
    assert_eq!(
        service.get(parcel.number).unwrap().status,
        ParcelStatus::Delivered
    );

    let err = service.deliver(parcel.number).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidTransition { .. }));
}

#[test]
fn delete_is_forbidden_once_sent() {
    let conn = open_db_in_memory().unwrap();
    let service = TrackingService::new(SqliteParcelStore::new(&conn));

    let kept = service.register(1000, "keep me").unwrap();
    service.send(kept.number).unwrap();

    let err = service.delete(kept.number).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::DeleteForbidden {
            status: ParcelStatus::Sent,
            ..
        }
    ));
    assert!(service.get(kept.number).is_ok());

    let removable = service.register(1000, "remove me").unwrap();
    service.delete(removable.number).unwrap();

    let err = service.get(removable.number).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepoError::NotFound(n)) if n == removable.number
    ));
}

#[test]
fn parcels_for_client_lists_only_that_client() {
    let conn = open_db_in_memory().unwrap();
    let service = TrackingService::new(SqliteParcelStore::new(&conn));

    let a = service.register(7, "a").unwrap();
    let b = service.register(7, "b").unwrap();
    service.register(8, "c").unwrap();

    let mut numbers: Vec<_> = service
        .parcels_for_client(7)
        .unwrap()
        .into_iter()
        .map(|parcel| parcel.number)
        .collect();
    numbers.sort_unstable();

    assert_eq!(numbers, vec![a.number, b.number]);
}
