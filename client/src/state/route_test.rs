use super::*;

#[test]
fn segments_are_distinct() {
    assert_eq!(Page::Login.segment(), "");
    assert_eq!(Page::Signup.segment(), "signup");
    assert_eq!(Page::Dashboard.segment(), "dashboard");
}

#[test]
fn link_path_is_rooted_segment() {
    for page in Page::ALL {
        assert_eq!(page.path(), format!("/{}", page.segment()));
    }
}
