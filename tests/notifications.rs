//! Record actions surface as toasts on the notification bus

use pharmadesk::pages::{messages, prescriptions};
use pharmadesk::prelude::*;

fn session() -> SessionContext {
    SessionContext::User {
        user_id: Uuid::new_v4(),
        roles: vec!["pharmacist".to_string()],
    }
}

#[tokio::test]
async fn test_successful_actions_publish_success() {
    let registry = PageRegistry::default();
    let mut toasts = registry.notifications().subscribe();
    let mut inbox = registry.open::<Message>(&session(), seed::messages()).unwrap();

    messages::mark_read(&mut inbox, "MSG-02").unwrap();
    inbox.delete("MSG-03").unwrap();

    let first = toasts.recv().await.unwrap();
    assert_eq!(first.level, NotificationLevel::Success);
    assert_eq!(
        first.kind,
        NotificationKind::RecordUpdated {
            resource: "messages".to_string(),
            id: "MSG-02".to_string()
        }
    );

    let second = toasts.recv().await.unwrap();
    assert_eq!(second.message(), "Deleted messages MSG-03");
}

#[tokio::test]
async fn test_refused_actions_publish_failure() {
    let registry = PageRegistry::default();
    let mut toasts = registry.notifications().subscribe();
    let mut queue = registry
        .open::<Prescription>(&session(), seed::prescriptions())
        .unwrap();

    let err = prescriptions::cancel(&mut queue, "RX-1005").unwrap_err();
    let toast = toasts.recv().await.unwrap();

    assert_eq!(toast.level, NotificationLevel::Error);
    match toast.kind {
        NotificationKind::ActionFailed { notice } => {
            assert_eq!(notice, err.to_notice());
            assert_eq!(notice.code, "INVALID_TRANSITION");
        }
        other => panic!("unexpected toast {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_record_is_not_committed() {
    let registry = PageRegistry::default();
    let mut toasts = registry.notifications().subscribe();
    let mut patients = registry.open::<Patient>(&session(), seed::patients()).unwrap();

    let mut patient = seed::patients().remove(0);
    patient.id = "PT-100".to_string();
    patient.name = "   ".to_string();

    let err = patients.create(patient).unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(patients.store().get("PT-100").is_none());

    let toast = toasts.recv().await.unwrap();
    assert_eq!(toast.level, NotificationLevel::Error);
    assert_eq!(toast.message(), "patients failed validation: name");
}

#[test]
fn test_publishing_without_listeners_is_fine() {
    let registry = PageRegistry::default();
    let mut view = registry.open::<Alert>(&session(), seed::alerts()).unwrap();
    assert_eq!(registry.notifications().listener_count(), 0);
    assert!(view.modify("AL-002", Alert::archive).is_ok());
}
