use crate::events::EventHandler;
use crate::requests::{api_channel, ApiEvent, ApiReceiver, RequestDispatcher, ViewToken};
use crate::router::Route;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use std::sync::Arc;

use tracing::{debug, info, warn};
use user_service::{ServiceError, User, UserApi, UserId, UserPage, UserUpdate};

pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user data";
pub const UPDATE_USER_FAILED: &str = "Failed to update user";
pub const DELETE_USER_FAILED: &str = "Failed to delete user";

// =============================================================================
// Views
// =============================================================================

/// The mounted screen and the state it owns. Replacing it drops that state.
#[derive(Debug, Clone)]
pub enum View {
    Login,
    UserList(ListViewState),
    EditUser(EditViewState),
}

// =============================================================================
// List View State
// =============================================================================

#[derive(Debug, Clone)]
pub struct ListViewState {
    /// Records of the most recently resolved fetch for `page`
    pub users: Vec<User>,
    pub page: u32,
    /// Reported by the API; shown, never enforced
    pub total_pages: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            page: 1,
            total_pages: None,
            loading: false,
            error: None,
            selected: 0,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.users.clear();
        self.selected = 0;
    }

    /// Apply a page response. Returns false when the response is for a
    /// page other than the current one and was ignored.
    pub fn apply_page(&mut self, page: u32, result: Result<UserPage, ServiceError>) -> bool {
        if page != self.page {
            return false;
        }

        self.loading = false;
        match result {
            Ok(body) => {
                self.users = body.data;
                self.total_pages = (body.total_pages > 0).then_some(body.total_pages);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(FETCH_USERS_FAILED.to_string());
            }
        }
        self.clamp_selection();
        true
    }

    /// Step back one page. At page 1 nothing changes.
    pub fn previous_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn remove_user(&mut self, id: UserId) {
        self.users.retain(|user| user.id != id);
        self.clamp_selection();
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.users.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.users.len().saturating_sub(1));
    }
}

// =============================================================================
// Edit View State
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::FirstName => Field::LastName,
            Field::LastName => Field::Email,
            Field::Email => Field::FirstName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Field::FirstName => Field::Email,
            Field::LastName => Field::FirstName,
            Field::Email => Field::LastName,
        }
    }
}

/// The three editable fields. Empty until the fetch resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
        }
    }

    /// Required-field and email-shape checks, run before anything is sent.
    /// The error is the inline message to show.
    pub fn validate(&self) -> Result<UserUpdate, String> {
        let update = UserUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        };
        match update.validate() {
            Ok(()) => Ok(update),
            Err(ServiceError::InvalidInput(message)) => Err(message),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    NotLoaded,
    Loaded,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct EditViewState {
    pub id: UserId,
    pub form: UserForm,
    pub focus: Field,
    pub phase: EditPhase,
    /// Inline message from the last rejected submit
    pub validation: Option<String>,
}

impl EditViewState {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            form: UserForm::default(),
            focus: Field::FirstName,
            phase: EditPhase::NotLoaded,
            validation: None,
        }
    }

    pub fn populate(&mut self, user: &User) {
        self.form = UserForm::from_user(user);
        if self.phase == EditPhase::NotLoaded {
            self.phase = EditPhase::Loaded;
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.form.value_mut(self.focus).push(c);
    }

    pub fn pop_char(&mut self) {
        self.form.value_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub route: Route,
    pub history: Vec<Route>,
    pub view: View,
    /// Blocking notification; swallows input until dismissed
    pub notification: Option<String>,
    pub should_quit: bool,

    dispatcher: RequestDispatcher,
    receiver: ApiReceiver,
    token: ViewToken,
    in_flight: usize,
}

impl App {
    pub fn new(api: Arc<dyn UserApi>, start: Route) -> Self {
        let (sender, receiver) = api_channel();
        let mut app = Self {
            route: start,
            history: Vec::new(),
            view: View::Login,
            notification: None,
            should_quit: false,
            dispatcher: RequestDispatcher::new(api, sender),
            receiver,
            token: ViewToken::default(),
            in_flight: 0,
        };
        app.mount(start);
        app
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
            self.process_api_events();
        }
        Ok(())
    }

    // =========================================================================
    // Routing
    // =========================================================================

    pub fn navigate(&mut self, route: Route) {
        self.history.push(self.route);
        self.mount(route);
    }

    pub fn go_back(&mut self) {
        match self.history.pop() {
            Some(previous) => self.mount(previous),
            None => self.should_quit = true,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn mount(&mut self, route: Route) {
        info!(route = %route, "mounting view");
        self.route = route;
        self.token = self.token.next();
        self.notification = None;

        match route {
            Route::Login => self.view = View::Login,
            Route::Users => {
                self.view = View::UserList(ListViewState::new());
                self.load_page();
            }
            Route::EditUser(id) => {
                self.view = View::EditUser(EditViewState::new(id));
                self.load_user();
            }
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn notify(&mut self, message: &str) {
        self.notification = Some(message.to_string());
    }

    // =========================================================================
    // List View
    // =========================================================================

    /// Fetch the current page. Exactly one request per call.
    pub fn load_page(&mut self) {
        let View::UserList(list) = &mut self.view else {
            return;
        };
        list.begin_load();
        let page = list.page;
        self.in_flight += 1;
        self.dispatcher.list_users(self.token, page);
    }

    pub fn previous_page(&mut self) {
        let changed = match &mut self.view {
            View::UserList(list) => list.previous_page(),
            _ => false,
        };
        if changed {
            self.load_page();
        }
    }

    pub fn next_page(&mut self) {
        if let View::UserList(list) = &mut self.view {
            list.next_page();
            self.load_page();
        }
    }

    pub fn edit_selected(&mut self) {
        let id = match &self.view {
            View::UserList(list) => list.selected_user().map(|user| user.id),
            _ => None,
        };
        if let Some(id) = id {
            self.navigate(Route::EditUser(id));
        }
    }

    pub fn delete_selected(&mut self) {
        let id = match &self.view {
            View::UserList(list) => list.selected_user().map(|user| user.id),
            _ => None,
        };
        if let Some(id) = id {
            self.in_flight += 1;
            self.dispatcher.delete_user(self.token, id);
        }
    }

    pub fn move_up(&mut self) {
        match &mut self.view {
            View::UserList(list) => list.select_previous(),
            View::EditUser(edit) => edit.focus_previous(),
            View::Login => {}
        }
    }

    pub fn move_down(&mut self) {
        match &mut self.view {
            View::UserList(list) => list.select_next(),
            View::EditUser(edit) => edit.focus_next(),
            View::Login => {}
        }
    }

    // =========================================================================
    // Edit View
    // =========================================================================

    fn load_user(&mut self) {
        if let View::EditUser(edit) = &self.view {
            let id = edit.id;
            self.in_flight += 1;
            self.dispatcher.get_user(self.token, id);
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let View::EditUser(edit) = &mut self.view {
            edit.push_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let View::EditUser(edit) = &mut self.view {
            edit.pop_char();
        }
    }

    pub fn submit(&mut self) {
        let View::EditUser(edit) = &mut self.view else {
            return;
        };
        if edit.phase == EditPhase::Submitting {
            return;
        }

        match edit.form.validate() {
            Ok(update) => {
                edit.validation = None;
                edit.phase = EditPhase::Submitting;
                let id = edit.id;
                self.in_flight += 1;
                self.dispatcher.update_user(self.token, id, update);
            }
            Err(message) => {
                edit.validation = Some(message);
            }
        }
    }

    // =========================================================================
    // Responses
    // =========================================================================

    /// Apply every response that has already arrived, without waiting
    pub fn process_api_events(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.apply_event(event);
        }
    }

    /// Wait until every request issued so far has been answered
    pub async fn wait_for_responses(&mut self) {
        while self.in_flight > 0 {
            match self.receiver.recv().await {
                Some(event) => self.apply_event(event),
                None => break,
            }
        }
    }

    pub fn apply_event(&mut self, event: ApiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if event.token() != self.token {
            debug!(?event, "discarding response for unmounted view");
            return;
        }

        match event {
            ApiEvent::PageLoaded { page, result, .. } => {
                if let Err(e) = &result {
                    warn!(page, error = %e, "{}", FETCH_USERS_FAILED);
                }
                if let View::UserList(list) = &mut self.view {
                    if !list.apply_page(page, result) {
                        debug!(page, current = list.page, "discarding response for old page");
                    }
                }
            }

            ApiEvent::UserLoaded { id, result, .. } => match result {
                Ok(user) => {
                    if let View::EditUser(edit) = &mut self.view {
                        edit.populate(&user);
                    }
                }
                Err(e) => {
                    warn!(%id, error = %e, "{}", FETCH_USER_FAILED);
                    self.notify(FETCH_USER_FAILED);
                }
            },

            ApiEvent::UserUpdated { id, result, .. } => match result {
                Ok(()) => {
                    info!(%id, "user updated");
                    self.navigate(Route::Users);
                }
                Err(e) => {
                    warn!(%id, error = %e, "{}", UPDATE_USER_FAILED);
                    if let View::EditUser(edit) = &mut self.view {
                        edit.phase = EditPhase::Loaded;
                    }
                    self.notify(UPDATE_USER_FAILED);
                }
            },

            ApiEvent::UserDeleted { id, result, .. } => match result {
                Ok(()) => {
                    info!(%id, "user deleted");
                    if let View::UserList(list) = &mut self.view {
                        list.remove_user(id);
                    }
                }
                Err(e) => {
                    warn!(%id, error = %e, "{}", DELETE_USER_FAILED);
                    self.notify(DELETE_USER_FAILED);
                }
            },
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[cfg(test)]
    pub fn list_state(&self) -> Option<&ListViewState> {
        match &self.view {
            View::UserList(list) => Some(list),
            _ => None,
        }
    }

    pub fn edit_state(&self) -> Option<&EditViewState> {
        match &self.view {
            View::EditUser(edit) => Some(edit),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn current_token(&self) -> ViewToken {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::testing::{sample_user, ApiCall, MockUserApi};

    fn app_with(api: MockUserApi, start: Route) -> (App, Arc<MockUserApi>) {
        let api = Arc::new(api);
        let app = App::new(api.clone(), start);
        (app, api)
    }

    fn ids(list: &ListViewState) -> Vec<u64> {
        list.users.iter().map(|u| u.id.get()).collect()
    }

    fn two_pages() -> MockUserApi {
        MockUserApi::new()
            .with_page(1, vec![sample_user(1), sample_user(2)])
            .with_page(2, vec![sample_user(3), sample_user(4)])
    }

    // -------------------------------------------------------------------------
    // List view
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_mount_loads_page_one() {
        let (mut app, api) = app_with(two_pages(), Route::Users);
        assert!(app.list_state().unwrap().loading);

        app.wait_for_responses().await;

        let list = app.list_state().unwrap();
        assert!(!list.loading);
        assert_eq!(list.page, 1);
        assert_eq!(ids(list), vec![1, 2]);
        assert_eq!(list.total_pages, Some(2));
        assert_eq!(api.calls(), vec![ApiCall::List(1)]);
    }

    #[tokio::test]
    async fn test_previous_at_first_page_is_noop() {
        let (mut app, api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;

        app.previous_page();
        app.wait_for_responses().await;

        let list = app.list_state().unwrap();
        assert_eq!(list.page, 1);
        assert!(!list.loading);
        assert_eq!(api.calls(), vec![ApiCall::List(1)]);
    }

    #[tokio::test]
    async fn test_next_then_previous_fetches_each_page_once() {
        let (mut app, api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;

        app.next_page();
        app.wait_for_responses().await;
        assert_eq!(ids(app.list_state().unwrap()), vec![3, 4]);

        app.previous_page();
        app.wait_for_responses().await;
        assert_eq!(ids(app.list_state().unwrap()), vec![1, 2]);

        assert_eq!(
            api.calls(),
            vec![ApiCall::List(1), ApiCall::List(2), ApiCall::List(1)]
        );
    }

    #[tokio::test]
    async fn test_next_is_unbounded() {
        let (mut app, api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;

        app.next_page();
        app.next_page();
        app.wait_for_responses().await;

        let list = app.list_state().unwrap();
        assert_eq!(list.page, 3);
        assert!(list.users.is_empty());
        assert!(list.error.is_none());
        let mut calls = api.calls();
        calls.sort_by_key(|c| match c {
            ApiCall::List(p) => *p,
            _ => 0,
        });
        assert_eq!(
            calls,
            vec![ApiCall::List(1), ApiCall::List(2), ApiCall::List(3)]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_sets_error_and_clears_loading() {
        let (mut app, _api) = app_with(two_pages().failing_page(2), Route::Users);
        app.wait_for_responses().await;

        app.next_page();
        app.wait_for_responses().await;

        let list = app.list_state().unwrap();
        assert!(!list.loading);
        assert!(list.users.is_empty());
        assert_eq!(list.error.as_deref(), Some(FETCH_USERS_FAILED));
        assert!(app.notification.is_none());

        app.previous_page();
        app.wait_for_responses().await;
        let list = app.list_state().unwrap();
        assert!(list.error.is_none());
        assert_eq!(ids(list), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_removes_row_without_refetch() {
        let (mut app, api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;

        app.delete_selected();
        app.wait_for_responses().await;

        assert_eq!(ids(app.list_state().unwrap()), vec![2]);
        assert_eq!(
            api.calls(),
            vec![ApiCall::List(1), ApiCall::Delete(UserId::new(1))]
        );
    }

    #[tokio::test]
    async fn test_failed_delete_notifies_and_keeps_rows() {
        let (mut app, _api) = app_with(two_pages().failing_delete(), Route::Users);
        app.wait_for_responses().await;

        app.move_down();
        app.delete_selected();
        app.wait_for_responses().await;

        assert_eq!(ids(app.list_state().unwrap()), vec![1, 2]);
        assert_eq!(app.notification.as_deref(), Some(DELETE_USER_FAILED));
    }

    #[tokio::test]
    async fn test_delete_then_next_replaces_sequence() {
        let (mut app, api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;

        app.delete_selected();
        app.wait_for_responses().await;
        assert_eq!(ids(app.list_state().unwrap()), vec![2]);

        app.next_page();
        app.wait_for_responses().await;
        assert_eq!(ids(app.list_state().unwrap()), vec![3, 4]);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::List(1),
                ApiCall::Delete(UserId::new(1)),
                ApiCall::List(2)
            ]
        );
    }

    #[tokio::test]
    async fn test_response_for_old_page_is_ignored() {
        let (mut app, _api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;
        app.next_page();
        app.wait_for_responses().await;

        let token = app.current_token();
        app.apply_event(ApiEvent::PageLoaded {
            token,
            page: 1,
            result: Ok(UserPage {
                data: vec![sample_user(1)],
                ..UserPage::default()
            }),
        });

        let list = app.list_state().unwrap();
        assert_eq!(list.page, 2);
        assert_eq!(ids(list), vec![3, 4]);
    }

    #[tokio::test]
    async fn test_response_for_unmounted_view_is_discarded() {
        let (mut app, _api) = app_with(two_pages(), Route::Users);
        let list_token = app.current_token();
        app.wait_for_responses().await;

        app.edit_selected();
        app.wait_for_responses().await;
        assert_eq!(app.route, Route::EditUser(UserId::new(1)));

        app.apply_event(ApiEvent::UserDeleted {
            token: list_token,
            id: UserId::new(1),
            result: Err(ServiceError::NotFound("/api/users/1".to_string())),
        });

        assert!(app.notification.is_none());
        assert_eq!(app.edit_state().unwrap().form.first_name, "George");
    }

    #[tokio::test]
    async fn test_edit_selected_passes_id_through_route() {
        let (mut app, _api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;

        app.move_down();
        app.edit_selected();

        assert_eq!(app.route, Route::EditUser(UserId::new(2)));
        assert_eq!(app.route.path(), "/edit/2");
        assert_eq!(app.history, vec![Route::Users]);
    }

    // -------------------------------------------------------------------------
    // Edit view
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_edit_mount_populates_form() {
        let api = MockUserApi::new().with_user(sample_user(2));
        let (mut app, api) = app_with(api, Route::EditUser(UserId::new(2)));
        assert_eq!(app.edit_state().unwrap().phase, EditPhase::NotLoaded);

        app.wait_for_responses().await;

        let edit = app.edit_state().unwrap();
        assert_eq!(edit.phase, EditPhase::Loaded);
        assert_eq!(
            edit.form,
            UserForm {
                first_name: "Janet".to_string(),
                last_name: "Weaver".to_string(),
                email: "janet.weaver@reqres.in".to_string(),
            }
        );
        assert_eq!(api.calls(), vec![ApiCall::Get(UserId::new(2))]);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_form_empty_and_notifies() {
        let api = MockUserApi::new().with_user(sample_user(2)).failing_get();
        let (mut app, _api) = app_with(api, Route::EditUser(UserId::new(2)));
        app.wait_for_responses().await;

        let edit = app.edit_state().unwrap();
        assert_eq!(edit.form, UserForm::default());
        assert_eq!(edit.phase, EditPhase::NotLoaded);
        assert_eq!(app.notification.as_deref(), Some(FETCH_USER_FAILED));
    }

    #[tokio::test]
    async fn test_edit_first_name_and_submit() {
        let api = MockUserApi::new()
            .with_user(sample_user(2))
            .with_page(1, vec![sample_user(1), sample_user(2)]);
        let (mut app, api) = app_with(api, Route::EditUser(UserId::new(2)));
        app.wait_for_responses().await;

        app.delete_char();
        app.delete_char();
        app.type_char('e');
        app.submit();
        assert_eq!(app.edit_state().unwrap().phase, EditPhase::Submitting);

        app.wait_for_responses().await;

        assert_eq!(app.route, Route::Users);
        assert_eq!(ids(app.list_state().unwrap()), vec![1, 2]);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::Get(UserId::new(2)),
                ApiCall::Update(
                    UserId::new(2),
                    UserUpdate {
                        first_name: "Jane".to_string(),
                        last_name: "Weaver".to_string(),
                        email: "janet.weaver@reqres.in".to_string(),
                    }
                ),
                ApiCall::List(1),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_update_stays_on_form() {
        let api = MockUserApi::new()
            .with_user(sample_user(3))
            .failing_update();
        let (mut app, _api) = app_with(api, Route::EditUser(UserId::new(3)));
        app.wait_for_responses().await;

        app.move_down();
        app.type_char('s');
        app.submit();
        app.wait_for_responses().await;

        assert_eq!(app.route, Route::EditUser(UserId::new(3)));
        assert_eq!(app.notification.as_deref(), Some(UPDATE_USER_FAILED));
        let edit = app.edit_state().unwrap();
        assert_eq!(edit.phase, EditPhase::Loaded);
        assert_eq!(edit.form.last_name, "Wongs");
        assert_eq!(edit.form.first_name, "Emma");
    }

    #[tokio::test]
    async fn test_empty_field_blocks_submit() {
        let api = MockUserApi::new().with_user(sample_user(4));
        let (mut app, api) = app_with(api, Route::EditUser(UserId::new(4)));
        app.wait_for_responses().await;

        for _ in 0.."Eve".len() {
            app.delete_char();
        }
        app.submit();
        app.wait_for_responses().await;

        let edit = app.edit_state().unwrap();
        assert_eq!(edit.validation.as_deref(), Some("First Name is required"));
        assert_eq!(edit.phase, EditPhase::Loaded);
        assert_eq!(api.calls(), vec![ApiCall::Get(UserId::new(4))]);
    }

    #[tokio::test]
    async fn test_submit_ignored_while_submitting() {
        let api = MockUserApi::new()
            .with_user(sample_user(1))
            .with_page(1, vec![sample_user(1)]);
        let (mut app, api) = app_with(api, Route::EditUser(UserId::new(1)));
        app.wait_for_responses().await;

        app.submit();
        app.submit();
        app.wait_for_responses().await;

        let updates = api
            .calls()
            .into_iter()
            .filter(|c| matches!(c, ApiCall::Update(..)))
            .count();
        assert_eq!(updates, 1);
    }

    // -------------------------------------------------------------------------
    // Routing
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_back_remounts_and_refetches() {
        let (mut app, api) = app_with(two_pages(), Route::Users);
        app.wait_for_responses().await;
        app.next_page();
        app.wait_for_responses().await;

        app.edit_selected();
        app.wait_for_responses().await;
        app.go_back();
        app.wait_for_responses().await;

        assert_eq!(app.route, Route::Users);
        assert_eq!(app.list_state().unwrap().page, 1);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::List(1),
                ApiCall::List(2),
                ApiCall::Get(UserId::new(3)),
                ApiCall::List(1)
            ]
        );
    }

    #[tokio::test]
    async fn test_back_from_first_route_quits() {
        let (mut app, _api) = app_with(MockUserApi::new(), Route::Login);
        app.go_back();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_navigation_clears_notification() {
        let (mut app, _api) = app_with(two_pages().failing_delete(), Route::Users);
        app.wait_for_responses().await;
        app.delete_selected();
        app.wait_for_responses().await;
        assert!(app.notification.is_some());

        app.navigate(Route::Login);
        assert!(app.notification.is_none());
    }

    // -------------------------------------------------------------------------
    // State helpers
    // -------------------------------------------------------------------------

    #[test]
    fn test_field_edit_touches_only_focused_field() {
        let mut edit = EditViewState::new(UserId::new(1));
        edit.populate(&sample_user(1));
        edit.focus_next();
        edit.push_char('!');

        assert_eq!(edit.form.first_name, "George");
        assert_eq!(edit.form.last_name, "Bluth!");
        assert_eq!(edit.form.email, "george.bluth@reqres.in");
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(Field::Email.next(), Field::FirstName);
        assert_eq!(Field::FirstName.previous(), Field::Email);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let form = UserForm {
            first_name: "Eve".to_string(),
            last_name: String::new(),
            email: String::new(),
        };
        assert_eq!(form.validate().unwrap_err(), "Last Name is required");

        let form = UserForm {
            first_name: "Eve".to_string(),
            last_name: "Holt".to_string(),
            email: "eve".to_string(),
        };
        assert_eq!(
            form.validate().unwrap_err(),
            "'eve' is not a valid email address"
        );
    }

    #[test]
    fn test_remove_user_clamps_selection() {
        let mut list = ListViewState::new();
        list.apply_page(
            1,
            Ok(UserPage {
                data: vec![sample_user(1), sample_user(2)],
                ..UserPage::default()
            }),
        );
        list.select_next();
        assert_eq!(list.selected, 1);

        list.remove_user(UserId::new(2));
        assert_eq!(list.selected, 0);
        assert_eq!(list.selected_user().map(|u| u.id), Some(UserId::new(1)));
        assert_eq!(list.total_pages, None);
    }
}
