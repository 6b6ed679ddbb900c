use reminders_core::{
    InMemoryReminderDataSource, ReminderDataItem, ReminderDataSource, RemindersListService,
    SaveReminderService, ValidationError, REMINDER_SAVED_MESSAGE,
};

fn sample_item() -> ReminderDataItem {
    ReminderDataItem {
        title: Some("reminder".to_string()),
        description: Some("Description1".to_string()),
        location: Some("Location1".to_string()),
        latitude: Some(30.151351165),
        longitude: Some(29.351531),
        id: "1".to_string(),
    }
}

#[test]
fn empty_title_is_rejected() {
    let store = InMemoryReminderDataSource::new();
    let service = SaveReminderService::new(&store);
    let item = ReminderDataItem {
        title: Some(String::new()),
        ..sample_item()
    };

    assert_eq!(
        service.validate_entered_data(&item),
        Err(ValidationError::EmptyTitle)
    );
}

#[test]
fn missing_title_is_rejected_before_location() {
    let store = InMemoryReminderDataSource::new();
    let service = SaveReminderService::new(&store);
    let item = ReminderDataItem {
        title: None,
        location: None,
        ..sample_item()
    };

    assert_eq!(
        service.validate_entered_data(&item),
        Err(ValidationError::EmptyTitle)
    );
}

#[test]
fn empty_location_is_rejected() {
    let store = InMemoryReminderDataSource::new();
    let service = SaveReminderService::new(&store);
    let item = ReminderDataItem {
        location: Some(String::new()),
        ..sample_item()
    };

    let err = service.validate_and_save_reminder(&item).unwrap_err();
    assert_eq!(err, ValidationError::MissingLocation);
    assert_eq!(err.message(), "Please select location");
    assert!(store.is_empty());
}

#[test]
fn valid_item_is_saved_and_readable() {
    let store = InMemoryReminderDataSource::new();
    let service = SaveReminderService::new(&store);

    let outcome = service.validate_and_save_reminder(&sample_item()).unwrap();
    assert_eq!(outcome.message, REMINDER_SAVED_MESSAGE);
    assert_eq!(store.get_reminder("1").unwrap(), outcome.reminder);
    assert_eq!(store.get_reminders().unwrap().len(), 1);
}

#[test]
fn form_builds_item_that_list_service_displays() {
    let store = InMemoryReminderDataSource::new();
    let mut save_service = SaveReminderService::new(&store);
    let mut list_service = RemindersListService::new(&store);

    let form = save_service.form_mut();
    form.title = Some("Buy milk".to_string());
    form.select_location("Corner shop", 30.05, 31.23);
    let item = save_service.form().to_data_item();
    save_service.validate_and_save_reminder(&item).unwrap();
    save_service.on_clear();

    assert!(save_service.form().title.is_none());
    let state = list_service.load_reminders();
    assert_eq!(state.items, vec![item]);
}
