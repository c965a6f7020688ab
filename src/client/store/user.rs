use crate::model::user::UserDto;

/// Session identity shared through context from the root component
///
/// `fetched` distinguishes "not checked yet" from "checked, signed out" so
/// guarded views can wait for the session check instead of redirecting early.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}
