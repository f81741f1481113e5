use crate::catalog::CategoryRegistry;
use crate::navigation::NavigationTarget;
use crate::ui::footer::FooterHints;
use crate::ui::mvi::Reducer;
use crate::ui::navigator::{NavigationIntent, NavigationReducer, NavigationState};
use crate::ui::screen::{breadcrumb, ScreenModel};
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};
use std::sync::Arc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    show_icons: bool,
    registry: Arc<CategoryRegistry>,
    /// Back-stack (MVI pattern).
    navigation: NavigationState,
    /// Cursor over the current list (MVI pattern).
    selection: SelectionState,
    /// Current screen, resolved on entry.
    screen: ScreenModel,
}

impl App {
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        let navigation = NavigationState::default();
        let screen = ScreenModel::resolve(&registry, navigation.current());
        let selection = SelectionState {
            cursor: 0,
            len: screen.row_count(),
        };
        Self {
            should_quit: false,
            show_icons: true,
            registry,
            navigation,
            selection,
            screen,
        }
    }

    /// Start at a deep-linked target with its ancestry already on the stack.
    pub fn with_start(registry: Arc<CategoryRegistry>, target: NavigationTarget) -> Self {
        let mut app = Self::new(registry);
        app.restore(target);
        app
    }

    pub fn set_show_icons(&mut self, show: bool) {
        self.show_icons = show;
    }

    pub fn show_icons(&self) -> bool {
        self.show_icons
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_target(&self) -> &NavigationTarget {
        self.navigation.current()
    }

    pub fn screen(&self) -> &ScreenModel {
        &self.screen
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn breadcrumb(&self) -> Vec<String> {
        breadcrumb(&self.registry, self.navigation.stack())
    }

    pub fn footer_hints(&self) -> FooterHints {
        FooterHints {
            can_select: self.screen.row_count() > 0,
            can_go_back: self.navigation.can_go_back(),
        }
    }

    // ========================================================================
    // Navigation (MVI pattern)
    // ========================================================================

    pub fn navigate_to(&mut self, target: NavigationTarget) {
        self.dispatch_navigation(NavigationIntent::Navigate(target));
        self.enter_screen(0);
    }

    /// Pop one screen. Returns `false` when already at the root.
    pub fn go_back(&mut self) -> bool {
        if !self.navigation.can_go_back() {
            return false;
        }
        let leaving = self.navigation.current().clone();
        self.dispatch_navigation(NavigationIntent::Back);
        // Land the cursor on the row we came from.
        let cursor = match &leaving {
            NavigationTarget::ItemDetail { index, .. } => *index,
            NavigationTarget::CategoryDetail { category } => {
                self.registry.position_of(category).unwrap_or(0)
            }
            NavigationTarget::CategoryList => 0,
        };
        self.enter_screen(cursor);
        true
    }

    /// Jump straight back to the category list.
    pub fn reset(&mut self) {
        self.dispatch_navigation(NavigationIntent::Reset);
        self.enter_screen(0);
    }

    pub fn restore(&mut self, target: NavigationTarget) {
        self.dispatch_navigation(NavigationIntent::Restore(target));
        self.enter_screen(0);
    }

    /// Open the row under the cursor.
    pub fn select(&mut self) {
        let Some(row) = self.selection.selected() else {
            return;
        };
        let next = match self.navigation.current() {
            NavigationTarget::CategoryList => self
                .registry
                .list_categories()
                .get(row)
                .map(|category| NavigationTarget::category_detail(category.key.clone())),
            NavigationTarget::CategoryDetail { category } => {
                Some(NavigationTarget::item_detail(category.clone(), row))
            }
            NavigationTarget::ItemDetail { .. } => None,
        };
        if let Some(target) = next {
            self.navigate_to(target);
        }
    }

    pub fn dispatch_navigation(&mut self, intent: NavigationIntent) {
        let from = self.navigation.current().to_string();
        dispatch_mvi!(self, navigation, NavigationReducer, intent);
        tracing::debug!(
            from = %from,
            to = %self.navigation.current(),
            depth = self.navigation.depth(),
            "Navigation"
        );
    }

    // ========================================================================
    // Selection (MVI pattern)
    // ========================================================================

    pub fn dispatch_selection(&mut self, intent: SelectionIntent) {
        dispatch_mvi!(self, selection, SelectionReducer, intent);
    }

    pub fn move_up(&mut self) {
        self.dispatch_selection(SelectionIntent::MoveUp);
    }

    pub fn move_down(&mut self) {
        self.dispatch_selection(SelectionIntent::MoveDown);
    }

    pub fn move_first(&mut self) {
        self.dispatch_selection(SelectionIntent::First);
    }

    pub fn move_last(&mut self) {
        self.dispatch_selection(SelectionIntent::Last);
    }

    /// Re-resolve the current target and reset the cursor for it.
    fn enter_screen(&mut self, cursor: usize) {
        self.screen = ScreenModel::resolve(&self.registry, self.navigation.current());
        self.dispatch_selection(SelectionIntent::Reset {
            len: self.screen.row_count(),
            cursor,
        });
    }
}
