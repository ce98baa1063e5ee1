use super::*;

fn user() -> UserProfile {
    UserProfile {
        id: 3,
        name: "Han".to_owned(),
        email: "han@example.com".to_owned(),
        phone: None,
        date_of_birth: Some("1988-12-24".to_owned()),
        job_start_date: None,
        job_end_date: None,
        user_type: "technician".to_owned(),
        is_active: Some(false),
        avatar: None,
        created_at: "2024-01-01".to_owned(),
        updated_at: "2024-01-01".to_owned(),
    }
}

#[test]
fn profile_rows_fill_missing_values_with_dash() {
    let rows = profile_rows(&user());
    assert!(rows.contains(&("Phone", "-".to_owned())));
    assert!(rows.contains(&("Date of birth", "1988-12-24".to_owned())));
}

#[test]
fn profile_rows_render_activity_status() {
    let rows = profile_rows(&user());
    assert!(rows.contains(&("Status", "Inactive".to_owned())));

    let unknown = UserProfile { is_active: None, ..user() };
    assert!(profile_rows(&unknown).contains(&("Status", "-".to_owned())));
}

#[test]
fn profile_rows_start_with_identity() {
    let rows = profile_rows(&user());
    assert_eq!(rows[0], ("Name", "Han".to_owned()));
    assert_eq!(rows[1], ("Email", "han@example.com".to_owned()));
}
