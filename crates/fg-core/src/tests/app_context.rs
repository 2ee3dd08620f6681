use crate::{AppContext, AuthProvider, AuthState, CoreError, Destination, Navigator, Session};

fn session() -> Session {
    Session::new("uid-1", Some("ada@example.com".to_string()), AuthProvider::Password)
}

#[test]
fn given_new_context_when_queried_then_loading_until_session_resolved() {
    let mut context = AppContext::new();
    assert_eq!(context.auth_state(), AuthState::Loading);

    context.set_session(None);

    assert_eq!(context.auth_state(), AuthState::SignedOut);
}

#[test]
fn given_signed_in_user_when_navigating_then_screens_stack_up() {
    let mut context = AppContext::new();
    context.set_session(Some(session()));

    context.navigate(Destination::Game).unwrap();
    context.navigate(Destination::HighScores).unwrap();

    assert_eq!(context.current_screen(), Some(Destination::HighScores));
    assert_eq!(context.back(), Some(Destination::HighScores));
    assert_eq!(context.current_screen(), Some(Destination::Game));
}

#[test]
fn given_open_screens_when_signed_out_then_back_at_main_menu() {
    let mut context = AppContext::new();
    context.set_session(Some(session()));
    context.navigate(Destination::Game).unwrap();

    context.sign_out();

    assert_eq!(context.auth_state(), AuthState::SignedOut);
    assert_eq!(context.current_screen(), None);
    assert_eq!(context.navigator().depth(), 0);
}

#[test]
fn given_full_navigator_when_pushing_then_overflow() {
    let mut navigator = Navigator::with_max_depth(2);
    navigator.push(Destination::Game).unwrap();
    navigator.push(Destination::HighScores).unwrap();

    let result = navigator.push(Destination::Game);

    assert!(matches!(
        result,
        Err(CoreError::NavigationOverflow { max_depth: 2, .. })
    ));
    assert_eq!(navigator.depth(), 2);
}

#[test]
fn given_main_menu_when_going_back_then_nothing_to_pop() {
    let mut navigator = Navigator::default();

    assert_eq!(navigator.pop(), None);
    assert_eq!(navigator.current(), None);
}
