//! Application Context
//!
//! Shared state provided via Leptos Context API: the current page, the
//! signed-in session and the notice board.

use leptos::prelude::*;

use crate::error::ApiResult;
use crate::models::LoginGrant;
use crate::notify::NoticeBoard;
use crate::session::{BrowserStorage, Session};

/// Screens of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Rules,
    Search(String),
    MyChallans,
    AdminLogin,
    AdminRules,
    AdminOfficers,
    AdminIssue,
    AdminChallans,
    AdminAppeals,
}

impl Page {
    pub fn requires_officer(&self) -> bool {
        matches!(
            self,
            Page::AdminRules
                | Page::AdminOfficers
                | Page::AdminIssue
                | Page::AdminChallans
                | Page::AdminAppeals
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Rules => "Traffic Rules",
            Page::Search(_) => "Search Challans",
            Page::MyChallans => "My Challans",
            Page::AdminLogin => "Officer Login",
            Page::AdminRules => "Manage Rules",
            Page::AdminOfficers => "Manage Officers",
            Page::AdminIssue => "Issue Challan",
            Page::AdminChallans => "Sent Challans",
            Page::AdminAppeals => "Appeals",
        }
    }
}

/// Page actually rendered: officer pages fall back to the officer login
pub fn gate(page: &Page, session: Option<&Session>) -> Page {
    if page.requires_officer() && !session.is_some_and(Session::is_officer) {
        Page::AdminLogin
    } else {
        page.clone()
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Signed-in identity - read
    pub session: ReadSignal<Option<Session>>,
    /// Signed-in identity - write
    set_session: WriteSignal<Option<Session>>,
    /// Trigger to reload lists from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from backend - write
    set_reload_trigger: WriteSignal<u32>,
    pub notices: NoticeBoard,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notices: NoticeBoard,
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            session: session.0,
            set_session: session.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notices,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[APP] navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// Trigger a reload of lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Access token for a protected call, read without tracking
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.access.clone()))
    }

    pub fn is_officer(&self) -> bool {
        self.session.with(|s| s.as_ref().is_some_and(Session::is_officer))
    }

    /// Persist a fresh login and make it current
    pub fn login(&self, grant: LoginGrant) {
        let session = Session::from(grant);
        session.save(&BrowserStorage::new());
        self.set_session.set(Some(session));
    }

    pub fn logout(&self) {
        Session::clear(&BrowserStorage::new());
        self.set_session.set(None);
        self.navigate(Page::Home);
    }

    /// 401 from the backend: drop the session and send the user to log in
    pub fn handle_unauthorized(&self) {
        let was_officer = self
            .session
            .with_untracked(|s| s.as_ref().is_some_and(Session::is_officer));
        Session::clear(&BrowserStorage::new());
        self.set_session.set(None);
        self.navigate(if was_officer { Page::AdminLogin } else { Page::MyChallans });
    }

    /// Unwrap a call result, turning a failure into an error notice
    pub fn report<T>(&self, result: ApiResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.notices.error(err.to_string());
                if err.is_unauthorized() {
                    self.handle_unauthorized();
                }
                None
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rank, Role};

    fn make_session(role: Role) -> Session {
        Session {
            access: "acc".to_string(),
            refresh: "ref".to_string(),
            display_name: "Asad".to_string(),
            role,
        }
    }

    #[test]
    fn test_officer_pages_need_officer_session() {
        assert_eq!(gate(&Page::AdminRules, None), Page::AdminLogin);
        let citizen = make_session(Role::Citizen);
        assert_eq!(gate(&Page::AdminAppeals, Some(&citizen)), Page::AdminLogin);
        let officer = make_session(Role::Officer(Rank::Si));
        assert_eq!(gate(&Page::AdminAppeals, Some(&officer)), Page::AdminAppeals);
    }

    #[test]
    fn test_public_pages_always_render() {
        for page in [Page::Home, Page::Rules, Page::Search("LEB-1".into()), Page::MyChallans] {
            assert_eq!(gate(&page, None), page);
        }
    }

    #[test]
    fn test_officer_sees_every_page() {
        let officer = make_session(Role::Officer(Rank::Si));
        let pages = [
            Page::Home,
            Page::Rules,
            Page::Search("LEB-1".into()),
            Page::MyChallans,
            Page::AdminLogin,
            Page::AdminRules,
            Page::AdminOfficers,
            Page::AdminIssue,
            Page::AdminChallans,
            Page::AdminAppeals,
        ];
        for page in pages {
            assert_eq!(gate(&page, Some(&officer)), page);
            assert!(!page.title().is_empty());
        }
    }
}
