use carpentry::promotion::{Admin, User};

fn admin() -> Admin {
    Admin::new(User::new("Joshua", "jaguilar20@gmail.com"), "Super")
}

#[test]
fn inner_and_forwarded_notify_are_identical() {
    let admin = admin();
    let mut inner = Vec::new();
    let mut outer = Vec::new();
    admin.user().notify(&mut inner).unwrap();
    admin.notify(&mut outer).unwrap();
    assert_eq!(inner, outer);
    assert_eq!(
        String::from_utf8(outer).unwrap(),
        " Sending User Email to Joshua<jaguilar20@gmail.com>\n"
    );
}

#[test]
fn fields_are_reachable_both_ways() {
    let admin = admin();
    assert_eq!(admin.name(), admin.user().name());
    assert_eq!(admin.email(), admin.user().email());
    assert_eq!(admin.level(), "Super");
}
